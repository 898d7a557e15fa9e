mod confusion;
mod loss;

pub use confusion::{Confusion, THRESHOLD, accuracy, evaluate};
pub use loss::log_loss;
