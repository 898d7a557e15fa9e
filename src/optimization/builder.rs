use super::{AdaGrad, GradientDescent, Optimizer};
use crate::config::OptimizerConfig;

/// Builds optimizers out of their configuration.
pub struct OptimizerBuilder;

impl OptimizerBuilder {
    /// Builds the optimizer described by `config`.
    ///
    /// # Arguments
    /// * `config` - The update policy and its hyperparameters.
    /// * `len` - The amount of weights of the model to optimize.
    ///
    /// # Returns
    /// A boxed optimizer implementation.
    pub fn build(config: &OptimizerConfig, len: usize) -> Box<dyn Optimizer> {
        match *config {
            OptimizerConfig::Plain { lr_w, lr_b } => Box::new(GradientDescent::new(lr_w, lr_b)),
            OptimizerConfig::Adaptive { lr, epsilon } => Box::new(AdaGrad::new(len, lr, epsilon)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::Dataset, model::Model};

    #[test]
    fn both_policies_train() {
        let train = Dataset::from_rows(vec![vec![1., 0.], vec![-1., 0.]], vec![1, 0]).unwrap();
        let configs = [
            OptimizerConfig::Plain { lr_w: 0.5, lr_b: 0.5 },
            OptimizerConfig::Adaptive {
                lr: 0.5,
                epsilon: 1e-8,
            },
        ];

        for config in configs {
            let mut model = Model::zeros(2);
            let mut optimizer = OptimizerBuilder::build(&config, model.len());

            for _ in 0..10 {
                optimizer.step(&mut model, &train).unwrap();
            }

            assert!(model.weights()[0] > 0., "{config:?}");
            assert_eq!(model.weights()[1], 0., "{config:?}");
        }
    }
}
