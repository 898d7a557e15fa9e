mod expander;

pub use expander::{FeatureExpander, FeatureVector, expand, feature_count};
