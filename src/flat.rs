//! Flat `f64` boundary.
//!
//! Thin adapters for callers holding plain row-major buffers with explicit
//! dimensions and raw `u8` normalization flags (`0` population, `1`
//! sample). Every buffer length is checked against its dimensions before
//! the typed routines run.

use crate::config::{LinalgOptions, Normalization, SingularPolicy};
use crate::error::KResult;
use crate::linalg::{self, LuFactor};
use crate::matrix::MatView;
use crate::stats;

/// Row-major `rows_a x cols_b` product of `a (rows_a x cols_a)` and `b (cols_a x cols_b)`.
pub fn multiply(a: &[f64], b: &[f64], rows_a: usize, cols_a: usize, cols_b: usize) -> KResult<Vec<f64>> {
    let a = MatView::new(a, rows_a, cols_a)?;
    let b = MatView::new(b, cols_a, cols_b)?;
    Ok(linalg::matmul(a, b)?.into_vec())
}

pub fn mean(xs: &[f64]) -> KResult<f64> {
    stats::mean(xs)
}

pub fn variance(xs: &[f64], flag: u8) -> KResult<f64> {
    stats::variance(xs, Normalization::from_flag(flag)?)
}

pub fn std_dev(xs: &[f64], flag: u8) -> KResult<f64> {
    stats::std_dev(xs, Normalization::from_flag(flag)?)
}

pub fn zscore(xs: &[f64], flag: u8) -> KResult<Vec<f64>> {
    stats::zscore(xs, Normalization::from_flag(flag)?)
}

pub fn lu(a: &[f64], rows: usize, cols: usize) -> KResult<LuFactor<f64>> {
    Ok(linalg::lu(MatView::new(a, rows, cols)?))
}

/// Inverse of an `n x n` matrix; singular input is an error.
pub fn inverse(a: &[f64], n: usize) -> KResult<Vec<f64>> {
    Ok(linalg::inverse(MatView::new(a, n, n)?)?.into_vec())
}

/// Inverse of an `n x n` matrix; singular input yields `n * n` NaNs.
pub fn inverse_or_nan(a: &[f64], n: usize) -> KResult<Vec<f64>> {
    let opts = LinalgOptions::default().with_singular(SingularPolicy::NanFill);
    Ok(linalg::inverse_with(MatView::new(a, n, n)?, &opts)?.into_vec())
}

pub fn determinant(a: &[f64], n: usize) -> KResult<f64> {
    linalg::determinant(MatView::new(a, n, n)?)
}

/// `cols x cols` covariance of a `rows x cols` observation matrix.
pub fn covariance(data: &[f64], rows: usize, cols: usize, flag: u8) -> KResult<Vec<f64>> {
    let norm = Normalization::from_flag(flag)?;
    Ok(stats::covariance(MatView::new(data, rows, cols)?, norm)?.into_vec())
}
