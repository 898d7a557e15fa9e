use std::{fs, num::NonZeroUsize, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrainErr},
    model::ParamInit,
};

/// The update policy and its hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum OptimizerConfig {
    /// Fixed learning rates, one for the weights and one for the bias.
    Plain { lr_w: f64, lr_b: f64 },
    /// A single base learning rate scaled per parameter by the accumulated gradients.
    Adaptive {
        lr: f64,
        #[serde(default = "default_epsilon")]
        epsilon: f64,
    },
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self::Plain {
            lr_w: 1e-3,
            lr_b: 1e-1,
        }
    }
}

/// How many epochs to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpochBudget {
    Bounded(NonZeroUsize),
    /// Runs until cancelled.
    Unbounded,
}

impl EpochBudget {
    /// Whether `epoch` epochs exhaust the budget.
    pub fn is_exhausted(&self, epoch: usize) -> bool {
        match self {
            EpochBudget::Bounded(n) => epoch >= n.get(),
            EpochBudget::Unbounded => false,
        }
    }
}

const DEFAULT_EPOCHS: NonZeroUsize = NonZeroUsize::new(10_000).unwrap();
const DEFAULT_REPORT_INTERVAL: NonZeroUsize = NonZeroUsize::new(100).unwrap();

/// Everything needed to train a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    pub degree: usize,
    pub train_fraction: f64,
    pub optimizer: OptimizerConfig,
    pub epochs: EpochBudget,
    pub report_interval: NonZeroUsize,
    pub init: ParamInit,
    pub bias: f64,
    pub seed: u64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            degree: 1,
            train_fraction: 0.8,
            optimizer: OptimizerConfig::default(),
            epochs: EpochBudget::Bounded(DEFAULT_EPOCHS),
            report_interval: DEFAULT_REPORT_INTERVAL,
            init: ParamInit::Zeros,
            bias: 0.,
            seed: 10,
        }
    }
}

impl TrainingConfig {
    /// Parses a configuration from JSON, missing fields take their default value.
    ///
    /// # Errors
    /// `InvalidConfig` if the document can't be parsed or a value is invalid.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    /// `Io` if the file can't be read, otherwise the same as `from_json_str`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Checks every value before any training happens.
    ///
    /// # Errors
    /// `InvalidConfig` describing the first invalid value.
    pub fn validate(&self) -> Result<()> {
        if self.degree < 1 {
            return Err(TrainErr::InvalidConfig(format!(
                "degree must be at least 1, got {}",
                self.degree
            )));
        }

        if !(self.train_fraction > 0. && self.train_fraction < 1.) {
            return Err(TrainErr::InvalidConfig(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            )));
        }

        match self.optimizer {
            OptimizerConfig::Plain { lr_w, lr_b } => {
                positive("lr_w", lr_w)?;
                positive("lr_b", lr_b)?;
            }
            OptimizerConfig::Adaptive { lr, epsilon } => {
                positive("lr", lr)?;
                positive("epsilon", epsilon)?;
            }
        }

        if !self.bias.is_finite() {
            return Err(TrainErr::InvalidConfig(format!(
                "bias must be finite, got {}",
                self.bias
            )));
        }

        self.init.validate()
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if !(value.is_finite() && value > 0.) {
        return Err(TrainErr::InvalidConfig(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }

    Ok(())
}

fn default_epsilon() -> f64 {
    1e-8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = TrainingConfig::default();
        cfg.validate().unwrap();

        assert_eq!(cfg.epochs, EpochBudget::Bounded(NonZeroUsize::new(10_000).unwrap()));
        assert_eq!(cfg.report_interval.get(), 100);
    }

    #[test]
    fn parses_adaptive_unbounded() {
        let cfg = TrainingConfig::from_json_str(
            r#"{
                "degree": 3,
                "train_fraction": 0.5,
                "optimizer": { "policy": "adaptive", "lr": 0.3 },
                "epochs": "unbounded",
                "report_interval": 1,
                "init": { "uniform": { "low": 0.0, "high": 1.0 } },
                "bias": 0.2,
                "seed": 7
            }"#,
        )
        .unwrap();

        assert_eq!(cfg.degree, 3);
        assert_eq!(
            cfg.optimizer,
            OptimizerConfig::Adaptive {
                lr: 0.3,
                epsilon: 1e-8
            }
        );
        assert_eq!(cfg.epochs, EpochBudget::Unbounded);
        assert_eq!(cfg.report_interval.get(), 1);
        assert_eq!(cfg.init, ParamInit::Uniform { low: 0., high: 1. });
        assert_eq!(cfg.seed, 7);
    }

    #[test]
    fn parses_plain_bounded_with_defaults() {
        let cfg = TrainingConfig::from_json_str(
            r#"{ "optimizer": { "policy": "plain", "lr_w": 0.001, "lr_b": 0.1 },
                 "epochs": { "bounded": 500 } }"#,
        )
        .unwrap();

        assert_eq!(cfg.epochs, EpochBudget::Bounded(NonZeroUsize::new(500).unwrap()));
        assert_eq!(cfg.degree, 1);
        assert_eq!(cfg.train_fraction, 0.8);
    }

    #[test]
    fn rejects_invalid_values() {
        let invalid = [
            r#"{ "degree": 0 }"#,
            r#"{ "train_fraction": 1.0 }"#,
            r#"{ "optimizer": { "policy": "plain", "lr_w": 0.0, "lr_b": 0.1 } }"#,
            r#"{ "optimizer": { "policy": "adaptive", "lr": 0.1, "epsilon": -1.0 } }"#,
            r#"{ "optimizer": { "policy": "momentum", "lr": 0.1 } }"#,
            r#"{ "epochs": { "bounded": 0 } }"#,
            r#"{ "report_interval": 0 }"#,
            r#"{ "init": { "uniform": { "low": 1.0, "high": 0.0 } } }"#,
        ];

        for json in invalid {
            let err = TrainingConfig::from_json_str(json).unwrap_err();
            assert!(matches!(err, TrainErr::InvalidConfig(_)), "{json}: {err}");
        }
    }

    #[test]
    fn budget_exhaustion() {
        let bounded = EpochBudget::Bounded(NonZeroUsize::new(3).unwrap());
        assert!(!bounded.is_exhausted(2));
        assert!(bounded.is_exhausted(3));
        assert!(!EpochBudget::Unbounded.is_exhausted(usize::MAX));
    }

    #[test]
    fn missing_file_is_io() {
        let err = TrainingConfig::from_json_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, TrainErr::Io(_)));
    }
}
