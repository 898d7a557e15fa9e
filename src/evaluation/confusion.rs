use crate::{
    data::Dataset,
    error::{Result, TrainErr},
    model::Model,
};

/// Probabilities at or above this value predict class `1`.
pub const THRESHOLD: f64 = 0.5;

/// Counts of predictions against ground truth.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Confusion {
    pub true_pos: usize,
    pub true_neg: usize,
    pub false_pos: usize,
    pub false_neg: usize,
}

impl Confusion {
    /// Adds one prediction to the counts.
    pub fn record(&mut self, predicted: bool, actual: bool) {
        match (predicted, actual) {
            (true, true) => self.true_pos += 1,
            (false, false) => self.true_neg += 1,
            (true, false) => self.false_pos += 1,
            (false, true) => self.false_neg += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.true_pos + self.true_neg + self.false_pos + self.false_neg
    }

    pub fn correct(&self) -> usize {
        self.true_pos + self.true_neg
    }

    /// `(TP + TN) / (TP + TN + FP + FN)`.
    ///
    /// # Errors
    /// `NumericDegeneracy` if nothing was recorded.
    pub fn accuracy(&self) -> Result<f64> {
        match self.total() {
            0 => Err(TrainErr::NumericDegeneracy(
                "accuracy of an empty set is undefined",
            )),
            total => Ok(self.correct() as f64 / total as f64),
        }
    }
}

/// Classifies every example of `test` and counts the outcomes.
///
/// # Returns
/// A `NumericDegeneracy` error if `test` is empty, or a `DimensionMismatch` error if its
/// feature vectors don't fit the model.
pub fn evaluate(model: &Model, test: &Dataset) -> Result<Confusion> {
    if test.is_empty() {
        return Err(TrainErr::NumericDegeneracy("the test set is empty"));
    }

    let probabilities = model.predict(test.features())?;
    let mut confusion = Confusion::default();

    probabilities
        .iter()
        .zip(test.labels())
        .for_each(|(&p, &y)| confusion.record(p >= THRESHOLD, y == 1.));

    Ok(confusion)
}

/// The share of correctly classified examples of `test`, in `[0, 1]`.
///
/// # Errors
/// The same as `evaluate`.
pub fn accuracy(model: &Model, test: &Dataset) -> Result<f64> {
    evaluate(model, test)?.accuracy()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn one_dim() -> Dataset {
        Dataset::from_rows(
            vec![vec![-2.], vec![-1.], vec![1.], vec![2.], vec![3.]],
            vec![0, 0, 1, 1, 1],
        )
        .unwrap()
    }

    #[test]
    fn perfect_model() {
        let model = Model::new(array![1.], 0.);
        let confusion = evaluate(&model, &one_dim()).unwrap();

        assert_eq!(
            confusion,
            Confusion {
                true_pos: 3,
                true_neg: 2,
                false_pos: 0,
                false_neg: 0,
            }
        );
        assert_eq!(confusion.accuracy().unwrap(), 1.);
    }

    #[test]
    fn inverted_model() {
        let model = Model::new(array![-1.], 0.);
        let confusion = evaluate(&model, &one_dim()).unwrap();

        assert_eq!(confusion.false_pos, 2);
        assert_eq!(confusion.false_neg, 3);
        assert_eq!(accuracy(&model, &one_dim()).unwrap(), 0.);
    }

    #[test]
    fn threshold_is_inclusive() {
        let data = Dataset::from_rows(vec![vec![0.]], vec![1]).unwrap();
        let model = Model::zeros(1);

        assert_eq!(evaluate(&model, &data).unwrap().true_pos, 1);
    }

    #[test]
    fn mixed_counts() {
        let model = Model::new(array![1.], -1.5);
        let confusion = evaluate(&model, &one_dim()).unwrap();

        // Only 2 and 3 clear the threshold, 1 is a false negative.
        assert_eq!(confusion.true_pos, 2);
        assert_eq!(confusion.false_neg, 1);
        assert_eq!(confusion.true_neg, 2);
        assert_eq!(confusion.accuracy().unwrap(), 0.8);
    }

    #[test]
    fn empty_test_set_is_degenerate() {
        let empty = Dataset::from_rows(vec![], vec![]).unwrap();
        let err = accuracy(&Model::zeros(0), &empty).unwrap_err();
        assert!(matches!(err, TrainErr::NumericDegeneracy(_)));

        assert!(Confusion::default().accuracy().is_err());
    }
}
