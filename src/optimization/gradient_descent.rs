use super::{Gradient, Optimizer, optimizer::check_len};
use crate::{error::Result, model::Model};

/// Plain gradient descent with separate fixed learning rates for the weights and the
/// bias.
#[derive(Debug)]
pub struct GradientDescent {
    lr_w: f64,
    lr_b: f64,
}

impl GradientDescent {
    /// Creates a new `GradientDescent` optimizer.
    ///
    /// # Arguments
    /// * `lr_w` - The learning rate of the weights.
    /// * `lr_b` - The learning rate of the bias.
    ///
    /// # Returns
    /// A new `GradientDescent` instance.
    pub fn new(lr_w: f64, lr_b: f64) -> Self {
        Self { lr_w, lr_b }
    }
}

impl Optimizer for GradientDescent {
    fn update_params(&mut self, grad: &Gradient, model: &mut Model) -> Result<()> {
        check_len(grad, model)?;

        let (weights, bias) = model.params_mut();
        weights.scaled_add(-self.lr_w, &grad.weights);
        *bias -= self.lr_b * grad.bias;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{data::Dataset, error::TrainErr};
    use ndarray::array;

    #[test]
    fn applies_both_learning_rates() {
        let mut model = Model::new(array![1., 2.], 3.);
        let grad = Gradient {
            weights: array![10., -20.],
            bias: 4.,
        };

        GradientDescent::new(0.1, 0.5)
            .update_params(&grad, &mut model)
            .unwrap();

        assert_eq!(model.weights(), array![0., 4.]);
        assert_eq!(model.bias(), 1.);
    }

    #[test]
    fn rejects_mismatched_gradient() {
        let mut model = Model::zeros(2);
        let grad = Gradient {
            weights: array![1.],
            bias: 0.,
        };

        let err = GradientDescent::new(0.1, 0.1)
            .update_params(&grad, &mut model)
            .unwrap_err();

        assert!(matches!(err, TrainErr::DimensionMismatch { .. }));
        assert_eq!(model, Model::zeros(2));
    }

    #[test]
    fn step_lowers_the_loss() {
        let train = Dataset::from_rows(
            vec![vec![1., 1.], vec![2., 1.], vec![-1., -2.], vec![-2., -1.]],
            vec![1, 1, 0, 0],
        )
        .unwrap();

        let mut model = Model::zeros(2);
        let mut optimizer = GradientDescent::new(0.5, 0.5);

        let first = optimizer.step(&mut model, &train).unwrap();
        let mut last = first.clone();
        for _ in 0..50 {
            last = optimizer.step(&mut model, &train).unwrap();
        }

        let norm = |g: &Gradient| g.weights.dot(&g.weights) + g.bias * g.bias;
        assert!(norm(&last) < norm(&first));
        assert!(model.weights().iter().all(|w| *w > 0.));
    }
}
