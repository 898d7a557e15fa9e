mod dataset;
mod point;
mod splitter;

pub use dataset::Dataset;
pub use point::{Bounds, LabeledPoint, Point, RawDataset};
pub use splitter::split;
