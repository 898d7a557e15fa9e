use ndarray::{Array2, ArrayViewMut1};

use crate::{
    data::Point,
    error::{Result, TrainErr},
};

/// The features derived from a single point.
pub type FeatureVector = Vec<f64>;

/// Returns the amount of monomials `x0^i * x1^j` with `1 <= i + j <= degree`.
pub fn feature_count(degree: usize) -> usize {
    degree * (degree + 3) / 2
}

/// Expands `point` into every monomial of total degree between `1` and `degree`.
///
/// # Arguments
/// * `point` - The raw input.
/// * `degree` - The highest total degree to emit, must be at least `1`.
///
/// # Returns
/// The feature vector, or an `InvalidConfig` error if `degree` is `0`.
pub fn expand(point: Point, degree: usize) -> Result<FeatureVector> {
    Ok(FeatureExpander::new(degree)?.expand(point))
}

/// Maps raw points into polynomial feature vectors of a fixed degree.
///
/// Monomials are emitted grouped by total degree, lowest first, and within a group by
/// decreasing power of `x0`. For degree `2` that is `[x0, x1, x0², x0·x1, x1²]`, so the
/// first two features are always the raw coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureExpander {
    degree: usize,
}

impl FeatureExpander {
    /// Creates a new `FeatureExpander`.
    ///
    /// # Arguments
    /// * `degree` - The polynomial degree, must be at least `1`.
    ///
    /// # Returns
    /// An `InvalidConfig` error if `degree` is `0`.
    pub fn new(degree: usize) -> Result<Self> {
        if degree < 1 {
            return Err(TrainErr::InvalidConfig(format!(
                "polynomial degree must be at least 1, got {degree}"
            )));
        }

        Ok(Self { degree })
    }

    pub fn degree(&self) -> usize {
        self.degree
    }

    /// The length of every vector this expander produces.
    pub fn len(&self) -> usize {
        feature_count(self.degree)
    }

    pub fn expand(&self, point: Point) -> FeatureVector {
        self.exponents()
            .map(|(i, j)| monomial(point, i, j))
            .collect()
    }

    /// Expands every point into one row of a feature matrix.
    pub fn expand_all<I>(&self, points: I) -> Array2<f64>
    where
        I: ExactSizeIterator<Item = Point>,
    {
        let mut features = Array2::zeros((points.len(), self.len()));

        features
            .rows_mut()
            .into_iter()
            .zip(points)
            .for_each(|(row, point)| self.expand_into(point, row));

        features
    }

    fn expand_into(&self, point: Point, mut out: ArrayViewMut1<f64>) {
        out.iter_mut()
            .zip(self.exponents())
            .for_each(|(f, (i, j))| *f = monomial(point, i, j));
    }

    fn exponents(&self) -> impl Iterator<Item = (i32, i32)> {
        let degree = self.degree as i32;
        (1..=degree).flat_map(|total| (0..=total).rev().map(move |i| (i, total - i)))
    }
}

fn monomial(point: Point, i: i32, j: i32) -> f64 {
    point.x0.powi(i) * point.x1.powi(j)
}
