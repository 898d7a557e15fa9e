use ndarray::ArrayView1;

use crate::{
    data::Point,
    evaluation::THRESHOLD,
    features::FeatureExpander,
    model::{Model, sigmoid},
};

/// An immutable copy of the model as it was at the end of an epoch, together with how
/// well it did.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    model: Model,
    expander: FeatureExpander,
    accuracy: f64,
    cost: f64,
    epoch: usize,
}

impl Snapshot {
    /// Creates a new `Snapshot`.
    ///
    /// The model's length must match the expander's, `TrainingLoop::from_parts` rejects
    /// any other model.
    pub(crate) fn new(
        model: Model,
        expander: FeatureExpander,
        accuracy: f64,
        cost: f64,
        epoch: usize,
    ) -> Self {
        Self {
            model,
            expander,
            accuracy,
            cost,
            epoch,
        }
    }

    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.model.weights()
    }

    pub fn bias(&self) -> f64 {
        self.model.bias()
    }

    /// Test accuracy at the time of the snapshot.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Train cost at the time of the snapshot.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The amount of epochs run before the snapshot was taken.
    pub fn epoch(&self) -> usize {
        self.epoch
    }

    pub fn degree(&self) -> usize {
        self.expander.degree()
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// The probability of class `1` at a raw point, used to draw the decision field.
    pub fn probability(&self, point: Point) -> f64 {
        let z: f64 = self
            .expander
            .expand(point)
            .iter()
            .zip(self.model.weights())
            .map(|(x, w)| x * w)
            .sum();

        sigmoid(z + self.model.bias())
    }

    pub fn classify(&self, point: Point) -> u8 {
        u8::from(self.probability(point) >= THRESHOLD)
    }

    /// The endpoints of the line `w0·x0 + w1·x1 + b = 0` between `x_min` and `x_max`.
    ///
    /// Only linear models have a straight boundary, so this is `None` for degrees above
    /// `1` and when the line is vertical (`w1 == 0`).
    pub fn boundary_line(&self, x_min: f64, x_max: f64) -> Option<(Point, Point)> {
        if self.degree() != 1 {
            return None;
        }

        let w = self.model.weights();
        let (&w0, &w1) = (w.get(0)?, w.get(1)?);
        if w1 == 0. {
            return None;
        }

        let b = self.model.bias();

        let at = |x0: f64| Point::new(x0, -(w0 * x0 + b) / w1);
        Some((at(x_min), at(x_max)))
    }
}
