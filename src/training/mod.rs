mod outbox;
mod snapshot;
mod state;
mod trainer;

pub use outbox::Outbox;
pub use snapshot::Snapshot;
pub use state::{TrainerState, TrainingReport};
pub use trainer::TrainingLoop;
