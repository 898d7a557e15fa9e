pub mod config;
pub mod data;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod model;
pub mod optimization;
pub mod training;

pub use config::{EpochBudget, OptimizerConfig, TrainingConfig};
pub use error::{Result, TrainErr};
pub use training::{Outbox, Snapshot, TrainerState, TrainingLoop, TrainingReport};
