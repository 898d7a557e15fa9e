use log::debug;
use rand::{SeedableRng, rngs::StdRng, seq::index};

use super::Dataset;
use crate::error::{Result, TrainErr};

/// Partitions `data` into a train and a test set.
///
/// `round(train_fraction * N)` examples are sampled without replacement for the train
/// set, clamped so that both sides keep at least one example, and the rest form the test
/// set. Both sides keep the original relative order of their examples.
///
/// # Arguments
/// * `data` - The dataset to split.
/// * `train_fraction` - The share of examples used for training, in `(0, 1)`.
/// * `seed` - Seeds the sampling, the same seed always produces the same split.
///
/// # Returns
/// The `(train, test)` pair, an `InsufficientData` error if `data` has less than two
/// examples or an `InvalidConfig` error if `train_fraction` is outside `(0, 1)`.
pub fn split(data: &Dataset, train_fraction: f64, seed: u64) -> Result<(Dataset, Dataset)> {
    if !(train_fraction > 0. && train_fraction < 1.) {
        return Err(TrainErr::InvalidConfig(format!(
            "train fraction must be in (0, 1), got {train_fraction}"
        )));
    }

    let n = data.len();
    if n < 2 {
        return Err(TrainErr::InsufficientData {
            got: n,
            required: 2,
        });
    }

    let amount = ((train_fraction * n as f64).round() as usize).clamp(1, n - 1);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut in_train = vec![false; n];
    for i in index::sample(&mut rng, n, amount) {
        in_train[i] = true;
    }

    let (train_idx, test_idx): (Vec<usize>, Vec<usize>) = (0..n).partition(|&i| in_train[i]);
    debug!("split {n} examples into {} train and {} test", train_idx.len(), test_idx.len());

    Ok((data.select(&train_idx), data.select(&test_idx)))
}
