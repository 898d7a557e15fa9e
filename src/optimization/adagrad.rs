use ndarray::{Array1, Zip};

use super::{Gradient, Optimizer, optimizer::check_len};
use crate::{
    error::{Result, TrainErr},
    model::Model,
};

/// Gradient descent with a per parameter step size that decays with the accumulated
/// squared gradients: `p -= lr / sqrt(G + eps) * g`.
#[derive(Debug)]
pub struct AdaGrad {
    learning_rate: f64,
    epsilon: f64,
    acc_w: Array1<f64>,
    acc_b: f64,
}

impl AdaGrad {
    /// Creates a new `AdaGrad` optimizer.
    ///
    /// # Arguments
    /// * `len` - The amount of weights this instance should hold accumulators for.
    /// * `learning_rate` - The base step size shared by every parameter.
    /// * `epsilon` - Keeps the denominator strictly positive while the accumulators are
    ///   still zero.
    ///
    /// # Returns
    /// A new `AdaGrad` instance.
    pub fn new(len: usize, learning_rate: f64, epsilon: f64) -> Self {
        Self {
            learning_rate,
            epsilon,
            acc_w: Array1::zeros(len),
            acc_b: 0.,
        }
    }
}

impl Optimizer for AdaGrad {
    fn update_params(&mut self, grad: &Gradient, model: &mut Model) -> Result<()> {
        check_len(grad, model)?;

        if self.acc_w.len() != model.len() {
            return Err(TrainErr::DimensionMismatch {
                what: "accumulator",
                got: self.acc_w.len(),
                expected: model.len(),
            });
        }

        let Self {
            learning_rate: lr,
            epsilon: eps,
            ..
        } = *self;

        let (weights, bias) = model.params_mut();

        Zip::from(weights)
            .and(&mut self.acc_w)
            .and(&grad.weights)
            .for_each(|w, acc, &g| {
                *acc += g * g;
                *w -= lr / (*acc + eps).sqrt() * g;
            });

        self.acc_b += grad.bias * grad.bias;
        *bias -= lr / (self.acc_b + eps).sqrt() * grad.bias;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use ndarray::array;

    #[test]
    fn first_step_from_zero_accumulators_is_finite() {
        let mut model = Model::zeros(3);
        let mut optimizer = AdaGrad::new(3, 0.1, 1e-8);
        let grad = Gradient {
            weights: array![0., 2., -1e-300],
            bias: 0.,
        };

        optimizer.update_params(&grad, &mut model).unwrap();

        assert!(model.weights().iter().all(|w| w.is_finite()));
        assert!(model.bias().is_finite());
        assert_eq!(model.weights()[0], 0.);
        assert_eq!(model.bias(), 0.);
    }

    #[test]
    fn first_step_moves_by_about_the_learning_rate() {
        let mut model = Model::zeros(1);
        let mut optimizer = AdaGrad::new(1, 0.1, 1e-8);
        let grad = Gradient {
            weights: array![4.],
            bias: -3.,
        };

        optimizer.update_params(&grad, &mut model).unwrap();

        assert!((model.weights()[0] + 0.1).abs() < 1e-9);
        assert!((model.bias() - 0.1).abs() < 1e-9);
    }

    #[test]
    fn accumulators_never_decrease() {
        let train = Dataset::from_rows(
            vec![vec![1., 0.5], vec![-0.5, -1.], vec![2., 2.]],
            vec![1, 0, 1],
        )
        .unwrap();

        let mut model = Model::zeros(2);
        let mut optimizer = AdaGrad::new(2, 0.5, 1e-8);
        let mut prev_w = optimizer.acc_w.clone();
        let mut prev_b = optimizer.acc_b;

        for _ in 0..20 {
            optimizer.step(&mut model, &train).unwrap();

            assert!(optimizer.acc_w.iter().zip(&prev_w).all(|(a, p)| a >= p));
            assert!(optimizer.acc_b >= prev_b);
            prev_w = optimizer.acc_w.clone();
            prev_b = optimizer.acc_b;
        }
    }

    #[test]
    fn rejects_mismatched_gradient() {
        let mut model = Model::zeros(2);
        let mut optimizer = AdaGrad::new(2, 0.1, 1e-8);
        let grad = Gradient {
            weights: array![1., 2., 3.],
            bias: 0.,
        };

        let err = optimizer.update_params(&grad, &mut model).unwrap_err();
        assert!(matches!(err, TrainErr::DimensionMismatch { .. }));
        assert_eq!(optimizer.acc_b, 0.);
    }
}
