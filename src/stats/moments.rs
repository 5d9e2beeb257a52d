//! Mean, variance, standard deviation and z-scores of a flat sample.

use num_traits::Float;

use crate::config::Normalization;
use crate::error::{KError, KResult};
use crate::stats::welford::Welford;

fn accumulate<T: Float>(xs: &[T], op: &'static str) -> KResult<Welford<T>> {
    if xs.is_empty() {
        return Err(KError::EmptyInput(op));
    }
    Ok(xs.iter().collect())
}

pub fn mean<T: Float>(xs: &[T]) -> KResult<T> {
    let acc = accumulate(xs, "mean")?;
    acc.mean().ok_or(KError::EmptyInput("mean"))
}

pub fn variance<T: Float>(xs: &[T], norm: Normalization) -> KResult<T> {
    let acc = accumulate(xs, "variance")?;
    acc.variance(norm).ok_or(KError::EmptyInput("variance"))
}

pub fn std_dev<T: Float>(xs: &[T], norm: Normalization) -> KResult<T> {
    let acc = accumulate(xs, "std")?;
    acc.std_dev(norm).ok_or(KError::EmptyInput("std"))
}

/// `(x − μ) / σ` for every sample.
///
/// Constant data (`σ == 0`) gives all zeros. A single sample under
/// [`Normalization::Sample`] has `σ = NaN`, which propagates.
pub fn zscore<T: Float>(xs: &[T], norm: Normalization) -> KResult<Vec<T>> {
    let acc = accumulate(xs, "zscore")?;
    let (mu, sigma) = match (acc.mean(), acc.std_dev(norm)) {
        (Some(mu), Some(sigma)) => (mu, sigma),
        _ => return Err(KError::EmptyInput("zscore")),
    };
    if sigma == T::zero() {
        return Ok(vec![T::zero(); xs.len()]);
    }
    Ok(xs.iter().map(|&x| (x - mu) / sigma).collect())
}
