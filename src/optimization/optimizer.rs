use ndarray::Array1;

use crate::{
    data::Dataset,
    error::{Result, TrainErr},
    model::Model,
};

/// The gradient of the average binary cross-entropy over a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    pub weights: Array1<f64>,
    pub bias: f64,
}

/// Computes the full batch gradient of the logistic loss:
/// `dw[k] = (1/m) Σ (p[i] - y[i]) x[i][k]` and `db = (1/m) Σ (p[i] - y[i])`.
///
/// # Arguments
/// * `model` - The current parameters.
/// * `train` - The `m` examples to average over.
///
/// # Returns
/// A `DimensionMismatch` error if the feature vectors and the weights differ in length,
/// or an `InsufficientData` error if `train` is empty.
pub fn gradient(model: &Model, train: &Dataset) -> Result<Gradient> {
    if train.dim() != model.len() {
        return Err(TrainErr::DimensionMismatch {
            what: "feature vector",
            got: train.dim(),
            expected: model.len(),
        });
    }

    if train.is_empty() {
        return Err(TrainErr::InsufficientData {
            got: 0,
            required: 1,
        });
    }

    let m = train.len() as f64;
    let error = model.predict(train.features())? - train.labels();

    Ok(Gradient {
        weights: train.features().t().dot(&error) / m,
        bias: error.sum() / m,
    })
}

/// Defines the strategy for updating model parameters based on calculated gradients.
///
/// Implementations own whatever state they accumulate across epochs, and updates must be
/// deterministic.
pub trait Optimizer: Send {
    /// Updates the model's weights and bias using `grad`.
    ///
    /// # Arguments
    /// * `grad` - The gradient of the loss at the model's current parameters.
    /// * `model` - The model to update.
    ///
    /// # Returns
    /// A `DimensionMismatch` error if `grad` and the model differ in length.
    fn update_params(&mut self, grad: &Gradient, model: &mut Model) -> Result<()>;

    /// Runs one epoch: computes the gradient over the whole of `train` and applies it.
    ///
    /// # Returns
    /// The gradient that was applied, or the first error found, in which case `model` is
    /// left untouched.
    fn step(&mut self, model: &mut Model, train: &Dataset) -> Result<Gradient> {
        let grad = gradient(model, train)?;
        self.update_params(&grad, model)?;
        Ok(grad)
    }
}

impl<T: Optimizer + ?Sized> Optimizer for Box<T> {
    fn update_params(&mut self, grad: &Gradient, model: &mut Model) -> Result<()> {
        (**self).update_params(grad, model)
    }

    fn step(&mut self, model: &mut Model, train: &Dataset) -> Result<Gradient> {
        (**self).step(model, train)
    }
}

pub(super) fn check_len(grad: &Gradient, model: &Model) -> Result<()> {
    if grad.weights.len() != model.len() {
        return Err(TrainErr::DimensionMismatch {
            what: "gradient",
            got: grad.weights.len(),
            expected: model.len(),
        });
    }

    Ok(())
}
