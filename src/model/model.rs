use ndarray::{Array1, ArrayView1, ArrayView2};
use rand::Rng;

use super::{ParamInit, sigmoid};
use crate::error::{Result, TrainErr};

/// A binary logistic classifier: `p(x) = sigmoid(w · x + b)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Model {
    weights: Array1<f64>,
    bias: f64,
}

impl Model {
    pub fn new(weights: Array1<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// A model with `len` zeroed weights and a zero bias.
    pub fn zeros(len: usize) -> Self {
        Self::new(Array1::zeros(len), 0.)
    }

    /// Creates a model whose weights are drawn from `init`.
    ///
    /// # Arguments
    /// * `len` - The amount of weights, one per feature.
    /// * `init` - The weight generator.
    /// * `bias` - The starting bias.
    /// * `rng` - The generator's source of randomness.
    ///
    /// # Returns
    /// An `InvalidConfig` error if `init` or `bias` is invalid.
    pub fn init<R: Rng>(len: usize, init: &ParamInit, bias: f64, rng: &mut R) -> Result<Self> {
        if !bias.is_finite() {
            return Err(TrainErr::InvalidConfig(format!(
                "initial bias must be finite, got {bias}"
            )));
        }

        let weights = init.sample(len, rng)?;
        Ok(Self::new(Array1::from(weights), bias))
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Mutable access to the parameters, for optimizers.
    pub(crate) fn params_mut(&mut self) -> (&mut Array1<f64>, &mut f64) {
        (&mut self.weights, &mut self.bias)
    }

    /// The probability of class `1` for a single feature vector.
    ///
    /// # Returns
    /// A `DimensionMismatch` error if `x` and the weights differ in length.
    pub fn predict_one(&self, x: ArrayView1<f64>) -> Result<f64> {
        self.check_dim(x.len())?;
        Ok(sigmoid(self.weights.dot(&x) + self.bias))
    }

    /// The probability of class `1` for every row of `features`.
    ///
    /// # Returns
    /// A `DimensionMismatch` error if the rows and the weights differ in length.
    pub fn predict(&self, features: ArrayView2<f64>) -> Result<Array1<f64>> {
        self.check_dim(features.ncols())?;

        let mut z = features.dot(&self.weights);
        z.mapv_inplace(|z| sigmoid(z + self.bias));
        Ok(z)
    }

    fn check_dim(&self, got: usize) -> Result<()> {
        if got != self.weights.len() {
            return Err(TrainErr::DimensionMismatch {
                what: "feature vector",
                got,
                expected: self.weights.len(),
            });
        }

        Ok(())
    }
}
