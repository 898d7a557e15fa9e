use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

/// The result type used across the whole trainer.
pub type Result<T> = std::result::Result<T, TrainErr>;

/// The trainer's error type.
///
/// None of these are retried, a failed run must be restarted by the caller with a
/// corrected configuration.
#[derive(Debug)]
pub enum TrainErr {
    /// A configuration value is out of its valid domain, raised before training starts.
    InvalidConfig(String),
    /// The dataset holds fewer examples than the operation requires.
    InsufficientData { got: usize, required: usize },
    /// A feature vector, weight vector or label vector disagree in length.
    DimensionMismatch {
        what: &'static str,
        got: usize,
        expected: usize,
    },
    /// A metric would have divided by zero.
    NumericDegeneracy(&'static str),
    Io(io::Error),
}

impl Display for TrainErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainErr::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            TrainErr::InsufficientData { got, required } => write!(
                f,
                "insufficient data: got {got} examples, at least {required} are required"
            ),
            TrainErr::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got}, expected {expected}"
            ),
            TrainErr::NumericDegeneracy(msg) => write!(f, "numeric degeneracy: {msg}"),
            TrainErr::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for TrainErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            TrainErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TrainErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for TrainErr {
    fn from(value: serde_json::Error) -> Self {
        Self::InvalidConfig(value.to_string())
    }
}

impl TrainErr {
    /// Whether this error belongs to the configuration family, which is always raised
    /// before a single epoch runs.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            TrainErr::InvalidConfig(_) | TrainErr::InsufficientData { .. }
        )
    }
}
