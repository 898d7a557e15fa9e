use crate::{
    data::Dataset,
    error::{Result, TrainErr},
    model::Model,
};

const CLAMP: f64 = 1e-15;

/// The average binary cross-entropy of `model` over `data`.
///
/// Probabilities are clamped to `[1e-15, 1 - 1e-15]` so a saturated model reports a large
/// but finite cost.
///
/// # Errors
/// `NumericDegeneracy` if `data` is empty, `DimensionMismatch` if it doesn't fit the
/// model.
pub fn log_loss(model: &Model, data: &Dataset) -> Result<f64> {
    if data.is_empty() {
        return Err(TrainErr::NumericDegeneracy("the loss of an empty set is undefined"));
    }

    let probabilities = model.predict(data.features())?;
    let total: f64 = probabilities
        .iter()
        .zip(data.labels())
        .map(|(&p, &y)| {
            let p = p.clamp(CLAMP, 1. - CLAMP);
            -(y * p.ln() + (1. - y) * (1. - p).ln())
        })
        .sum();

    Ok(total / data.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn undecided_model_costs_ln_2() {
        let data = Dataset::from_rows(vec![vec![1.], vec![-3.]], vec![1, 0]).unwrap();
        let cost = log_loss(&Model::zeros(1), &data).unwrap();
        assert!((cost - std::f64::consts::LN_2).abs() < 1e-12);
    }

    #[test]
    fn saturated_mistakes_stay_finite() {
        let data = Dataset::from_rows(vec![vec![1.]], vec![0]).unwrap();
        let cost = log_loss(&Model::new(array![1e6], 0.), &data).unwrap();

        assert!(cost.is_finite());
        assert!(cost > 30.);
    }

    #[test]
    fn empty_is_degenerate() {
        let data = Dataset::from_rows(vec![], vec![]).unwrap();
        assert!(log_loss(&Model::zeros(0), &data).is_err());
    }
}
