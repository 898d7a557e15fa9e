use log::{debug, error, info, warn};
use rand::{SeedableRng, rngs::StdRng};
use tokio::task::{self, JoinHandle};
use tokio_util::sync::CancellationToken;

use super::{Outbox, Snapshot, TrainerState, TrainingReport};
use crate::{
    config::TrainingConfig,
    data::{Dataset, RawDataset, split},
    error::{Result, TrainErr},
    evaluation::{accuracy, log_loss},
    features::FeatureExpander,
    model::Model,
    optimization::{Optimizer, OptimizerBuilder},
};

/// Owns the model and the optimizer state and drives them epoch after epoch, publishing
/// its progress to an `Outbox` every `report_interval` epochs.
///
/// Nothing else ever mutates the model: consumers only see immutable snapshots.
pub struct TrainingLoop {
    cfg: TrainingConfig,
    expander: FeatureExpander,
    model: Model,
    optimizer: Box<dyn Optimizer>,
    train: Dataset,
    test: Dataset,
    state: TrainerState,
    epoch: usize,
}

impl TrainingLoop {
    /// Prepares a training run over `raw`: validates `cfg`, expands the points, splits them
    /// and initializes the model, all seeded by `cfg.seed`.
    ///
    /// # Args
    /// * `cfg` - The training configuration.
    /// * `raw` - The labeled points handed over by the data loader.
    ///
    /// # Returns
    /// An idle training loop.
    ///
    /// # Errors
    /// `InvalidConfig` or `InsufficientData` if the configuration or the data can't be used.
    pub fn new(cfg: TrainingConfig, raw: &RawDataset) -> Result<Self> {
        cfg.validate()?;

        let expander = FeatureExpander::new(cfg.degree)?;
        let data = Dataset::from_raw(raw, &expander);
        let (train, test) = split(&data, cfg.train_fraction, cfg.seed)?;

        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let model = Model::init(expander.len(), &cfg.init, cfg.bias, &mut rng)?;

        debug!(
            "prepared {} train and {} test examples with {} features",
            train.len(),
            test.len(),
            expander.len()
        );

        Self::from_parts(cfg, model, train, test)
    }

    /// Builds a training loop out of an already split dataset and a model.
    ///
    /// The datasets aren't checked against the model here, a mismatch fails the run on
    /// its first epoch.
    ///
    /// # Errors
    /// `InvalidConfig` if `cfg` is invalid, or `DimensionMismatch` if the model's length
    /// isn't the amount of features of `cfg.degree`.
    pub fn from_parts(
        cfg: TrainingConfig,
        model: Model,
        train: Dataset,
        test: Dataset,
    ) -> Result<Self> {
        cfg.validate()?;

        let expander = FeatureExpander::new(cfg.degree)?;
        if model.len() != expander.len() {
            return Err(TrainErr::DimensionMismatch {
                what: "weights",
                got: model.len(),
                expected: expander.len(),
            });
        }

        let optimizer = OptimizerBuilder::build(&cfg.optimizer, model.len());

        Ok(Self {
            cfg,
            expander,
            model,
            optimizer,
            train,
            test,
            state: TrainerState::Idle,
            epoch: 0,
        })
    }

    pub fn state(&self) -> TrainerState {
        self.state
    }

    /// The amount of epochs run so far.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn train_set(&self) -> &Dataset {
        &self.train
    }

    pub fn test_set(&self) -> &Dataset {
        &self.test
    }

    /// Runs until the epoch budget is exhausted, `cancel` is triggered or an error occurs.
    ///
    /// Cancellation is only observed between epochs, so the model is always left fully
    /// updated. A failed run leaves whatever was last published in `outbox` untouched.
    ///
    /// # Args
    /// * `outbox` - Where snapshots get published.
    /// * `cancel` - Stops the loop before the next epoch.
    ///
    /// # Returns
    /// The final report on `Completed` or `Cancelled`.
    ///
    /// # Errors
    /// `InvalidConfig` if the loop isn't idle, otherwise the error that moved it to
    /// `Failed`.
    pub fn run(&mut self, outbox: &Outbox, cancel: &CancellationToken) -> Result<TrainingReport> {
        if self.state != TrainerState::Idle {
            return Err(TrainErr::InvalidConfig(format!(
                "a training loop can only be started once, it is {}",
                self.state
            )));
        }

        self.state = TrainerState::Running;
        info!(
            "training started: degree={} epochs={:?} policy={:?}",
            self.cfg.degree, self.cfg.epochs, self.cfg.optimizer
        );

        match self.drive(outbox, cancel) {
            Ok(report) => {
                self.state = report.state;
                info!(
                    "training {}: epochs={} accuracy={:.4} cost={:.6}",
                    report.state, report.epochs, report.accuracy, report.cost
                );
                Ok(report)
            }
            Err(e) => {
                self.state = TrainerState::Failed;
                error!("training failed at epoch {}: {e}", self.epoch);
                Err(e)
            }
        }
    }

    /// Runs the loop on tokio's blocking pool, handing the loop back once it stops.
    pub fn spawn(
        mut self,
        outbox: Outbox,
        cancel: CancellationToken,
    ) -> JoinHandle<(Self, Result<TrainingReport>)> {
        task::spawn_blocking(move || {
            let ret = self.run(&outbox, &cancel);
            (self, ret)
        })
    }

    fn drive(&mut self, outbox: &Outbox, cancel: &CancellationToken) -> Result<TrainingReport> {
        let interval = self.cfg.report_interval.get();

        let state = loop {
            if self.cfg.epochs.is_exhausted(self.epoch) {
                break TrainerState::Completed;
            }

            if cancel.is_cancelled() {
                warn!("training cancelled after {} epochs", self.epoch);
                break TrainerState::Cancelled;
            }

            let grad = self.optimizer.step(&mut self.model, &self.train)?;
            self.epoch += 1;

            if self.epoch % interval == 0 {
                debug!(epoch = self.epoch; "dw={} db={}", grad.weights, grad.bias);
                let snapshot = self.snapshot()?;

                info!(
                    epoch = snapshot.epoch(),
                    accuracy = snapshot.accuracy(),
                    cost = snapshot.cost();
                    "report"
                );

                if outbox.publish(snapshot) {
                    debug!("previous snapshot was never taken");
                }
            }
        };

        Ok(TrainingReport {
            state,
            epochs: self.epoch,
            accuracy: accuracy(&self.model, &self.test)?,
            cost: log_loss(&self.model, &self.train)?,
        })
    }

    fn snapshot(&self) -> Result<Snapshot> {
        let accuracy = accuracy(&self.model, &self.test)?;
        let cost = log_loss(&self.model, &self.train)?;

        Ok(Snapshot::new(
            self.model.clone(),
            self.expander,
            accuracy,
            cost,
            self.epoch,
        ))
    }
}
