use ndarray::{Array1, Array2, ArrayView1, ArrayView2, Axis};

use super::RawDataset;
use crate::{
    error::{Result, TrainErr},
    features::{FeatureExpander, FeatureVector},
};

/// Expanded examples ready for training: one feature row and one `0.`/`1.` label per
/// example.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    features: Array2<f64>,
    labels: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `features` - A matrix holding one example per row.
    /// * `labels` - The class of each row.
    ///
    /// # Returns
    /// A `DimensionMismatch` error if the amount of rows and labels differ, or an
    /// `InvalidConfig` error if a label isn't `0.` or `1.`.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> Result<Self> {
        if features.nrows() != labels.len() {
            return Err(TrainErr::DimensionMismatch {
                what: "labels",
                got: labels.len(),
                expected: features.nrows(),
            });
        }

        if let Some(i) = labels.iter().position(|&y| y != 0. && y != 1.) {
            return Err(TrainErr::InvalidConfig(format!(
                "example {i} has label {}, labels must be 0 or 1",
                labels[i]
            )));
        }

        Ok(Self { features, labels })
    }

    /// Builds a dataset out of individual feature vectors.
    ///
    /// # Returns
    /// A `DimensionMismatch` error if a vector's length differs from the first one's.
    pub fn from_rows(rows: Vec<FeatureVector>, labels: Vec<u8>) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().find(|row| row.len() != dim) {
            return Err(TrainErr::DimensionMismatch {
                what: "feature vector",
                got: row.len(),
                expected: dim,
            });
        }

        let n = rows.len();
        let flat = rows.into_iter().flatten().collect();
        let features = Array2::from_shape_vec((n, dim), flat).map_err(|_| {
            TrainErr::DimensionMismatch {
                what: "feature matrix",
                got: n,
                expected: dim,
            }
        })?;

        let labels = labels.into_iter().map(f64::from).collect();
        Self::new(features, labels)
    }

    /// Expands every raw point with `expander`, keeping their order.
    pub fn from_raw(raw: &RawDataset, expander: &FeatureExpander) -> Self {
        let points = raw.points();
        let features = expander.expand_all(points.iter().map(|lp| lp.point));
        let labels = points.iter().map(|lp| f64::from(lp.label)).collect();

        Self { features, labels }
    }

    /// The amount of examples.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The length of every feature vector.
    pub fn dim(&self) -> usize {
        self.features.ncols()
    }

    pub fn features(&self) -> ArrayView2<'_, f64> {
        self.features.view()
    }

    pub fn labels(&self) -> ArrayView1<'_, f64> {
        self.labels.view()
    }

    /// Copies the examples at `indices`, in that order.
    ///
    /// # Panics
    /// If an index is out of bounds.
    pub fn select(&self, indices: &[usize]) -> Self {
        Self {
            features: self.features.select(Axis(0), indices),
            labels: self.labels.select(Axis(0), indices),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::LabeledPoint;
    use ndarray::array;

    #[test]
    fn rows_and_labels_must_agree() {
        let err = Dataset::new(array![[1., 2.], [3., 4.]], array![1.]).unwrap_err();
        assert!(matches!(
            err,
            TrainErr::DimensionMismatch {
                got: 1,
                expected: 2,
                ..
            }
        ));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = Dataset::from_rows(vec![vec![1., 2.], vec![1.]], vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            TrainErr::DimensionMismatch {
                what: "feature vector",
                got: 1,
                expected: 2,
            }
        ));
    }

    #[test]
    fn from_raw_expands_every_point() {
        let raw = RawDataset::new(vec![
            LabeledPoint::new(1., 2., 0),
            LabeledPoint::new(3., 4., 1),
        ])
        .unwrap();
        let expander = FeatureExpander::new(2).unwrap();
        let data = Dataset::from_raw(&raw, &expander);

        assert_eq!(data.len(), 2);
        assert_eq!(data.dim(), 5);
        assert_eq!(data.labels(), array![0., 1.]);
        assert_eq!(data.features().row(1).to_vec(), vec![3., 4., 9., 12., 16.]);
    }

    #[test]
    fn select_keeps_rows_and_labels_paired() {
        let data = Dataset::from_rows(
            vec![vec![0., 0.], vec![1., 1.], vec![2., 2.]],
            vec![0, 1, 0],
        )
        .unwrap();

        let picked = data.select(&[2, 1]);
        assert_eq!(picked.features(), array![[2., 2.], [1., 1.]]);
        assert_eq!(picked.labels(), array![0., 1.]);
    }
}
