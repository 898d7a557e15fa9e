use crate::error::{Result, TrainErr};

/// A raw two dimensional input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x0: f64,
    pub x1: f64,
}

impl Point {
    pub fn new(x0: f64, x1: f64) -> Self {
        Self { x0, x1 }
    }
}

/// A point together with its binary class, `0` or `1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint {
    pub point: Point,
    pub label: u8,
}

impl LabeledPoint {
    pub fn new(x0: f64, x1: f64, label: u8) -> Self {
        Self {
            point: Point::new(x0, x1),
            label,
        }
    }
}

/// Coordinate-wise extent of the raw inputs.
///
/// The trainer never interprets these, they are handed through to whoever draws the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

/// What the data loading side hands to the trainer: the labeled points as read and the
/// bounds of their coordinates.
#[derive(Debug, Clone)]
pub struct RawDataset {
    points: Vec<LabeledPoint>,
    bounds: Bounds,
}

impl RawDataset {
    /// Creates a new `RawDataset`.
    ///
    /// # Arguments
    /// * `points` - The labeled points, in the order they were read.
    ///
    /// # Returns
    /// An `InsufficientData` error if `points` is empty, or an `InvalidConfig` error if a
    /// label isn't `0` or `1` or a coordinate isn't finite.
    pub fn new(points: Vec<LabeledPoint>) -> Result<Self> {
        let Some(first) = points.first() else {
            return Err(TrainErr::InsufficientData {
                got: 0,
                required: 1,
            });
        };

        let mut bounds = Bounds {
            min: first.point,
            max: first.point,
        };

        for (i, lp) in points.iter().enumerate() {
            if lp.label > 1 {
                return Err(TrainErr::InvalidConfig(format!(
                    "point {i} has label {}, labels must be 0 or 1",
                    lp.label
                )));
            }

            let Point { x0, x1 } = lp.point;
            if !(x0.is_finite() && x1.is_finite()) {
                return Err(TrainErr::InvalidConfig(format!(
                    "point {i} has a non finite coordinate ({x0}, {x1})"
                )));
            }

            bounds.min.x0 = bounds.min.x0.min(x0);
            bounds.min.x1 = bounds.min.x1.min(x1);
            bounds.max.x0 = bounds.max.x0.max(x0);
            bounds.max.x1 = bounds.max.x1.max(x1);
        }

        Ok(Self { points, bounds })
    }

    pub fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
