use std::fmt;

/// The lifecycle of a training loop.
///
/// `Idle -> Running -> {Completed, Cancelled, Failed}`, the last three are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainerState {
    Idle,
    Running,
    /// The epoch budget was exhausted.
    Completed,
    /// Stopped between two epochs by a cancellation request.
    Cancelled,
    /// An epoch or an evaluation returned an error.
    Failed,
}

impl TrainerState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TrainerState::Completed | TrainerState::Cancelled | TrainerState::Failed
        )
    }
}

impl fmt::Display for TrainerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrainerState::Idle => "idle",
            TrainerState::Running => "running",
            TrainerState::Completed => "completed",
            TrainerState::Cancelled => "cancelled",
            TrainerState::Failed => "failed",
        };

        f.write_str(s)
    }
}

/// What a finished run leaves behind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainingReport {
    pub state: TrainerState,
    pub epochs: usize,
    /// Test accuracy of the final model.
    pub accuracy: f64,
    /// Train cost of the final model.
    pub cost: f64,
}
