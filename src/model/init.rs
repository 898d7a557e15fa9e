use rand::Rng;
use rand_distr::{Distribution, Uniform};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TrainErr};

/// How the weights of a fresh model are generated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ParamInit {
    #[default]
    Zeros,
    Constant(f64),
    /// Samples every weight from `[low, high)`.
    Uniform { low: f64, high: f64 },
}

impl ParamInit {
    /// Checks the parameters of the generator.
    ///
    /// # Returns
    /// An `InvalidConfig` error for non finite values or an empty uniform range.
    pub fn validate(&self) -> Result<()> {
        match *self {
            ParamInit::Zeros => Ok(()),
            ParamInit::Constant(value) if value.is_finite() => Ok(()),
            ParamInit::Constant(value) => Err(TrainErr::InvalidConfig(format!(
                "constant init must be finite, got {value}"
            ))),
            ParamInit::Uniform { low, high } => {
                Uniform::<f64>::new(low, high)
                    .map(|_| ())
                    .map_err(|e| TrainErr::InvalidConfig(format!("uniform init: {e}")))
            }
        }
    }

    /// Generates `n` values.
    ///
    /// # Arguments
    /// * `n` - The amount of values.
    /// * `rng` - Only drawn from by `Uniform`.
    ///
    /// # Returns
    /// An `InvalidConfig` error if the generator's parameters are invalid.
    pub fn sample<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>> {
        self.validate()?;

        let values = match *self {
            ParamInit::Zeros => vec![0.; n],
            ParamInit::Constant(value) => vec![value; n],
            ParamInit::Uniform { low, high } => {
                let dist = Uniform::<f64>::new(low, high)
                    .map_err(|e| TrainErr::InvalidConfig(format!("uniform init: {e}")))?;
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        };

        Ok(values)
    }
}
