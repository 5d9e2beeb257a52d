//! Covariance and correlation of column variables.
//!
//! Input rows are observations and columns are variables. The result is a
//! symmetric `cols x cols` matrix: only the upper triangle is accumulated,
//! then mirrored.

use num_traits::Float;

use crate::config::{LinalgOptions, Normalization};
use crate::error::{KError, KResult};
use crate::matrix::{DenseMat, MatView};
use crate::parallel;
use crate::stats::welford::{count_as, Welford};

/// Covariance matrix with default options.
pub fn covariance<T>(data: MatView<'_, T>, norm: Normalization) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    covariance_with(data, norm, &LinalgOptions::default())
}

pub fn covariance_with<T>(data: MatView<'_, T>, norm: Normalization, opts: &LinalgOptions) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    let (rows, cols) = (data.rows(), data.cols());
    if rows == 0 {
        return Err(KError::EmptyInput("covariance"));
    }

    let mut acc = vec![Welford::new(); cols];
    for i in 0..rows {
        for (w, &x) in acc.iter_mut().zip(data.row(i)) {
            w.push(x);
        }
    }
    let means: Vec<T> = acc.iter().map(|w| w.mean().unwrap_or_else(T::nan)).collect();
    let denom: T = count_as(rows - norm.ddof());

    let mut out = vec![T::zero(); cols * cols];
    if cols == 0 {
        return Ok(DenseMat::from_parts(0, 0, out));
    }

    let work = rows * cols * cols;
    if parallel::should_parallelize(work, opts) {
        #[cfg(feature = "rayon")]
        {
            use rayon::prelude::*;
            log::debug!("covariance: {rows}x{cols} on {} threads", rayon::current_num_threads());
            out.par_chunks_mut(cols)
                .enumerate()
                .for_each(|(p, row)| upper_row(data, &means, denom, p, row));
            return Ok(mirror_upper(cols, out));
        }
    }

    for (p, row) in out.chunks_mut(cols).enumerate() {
        upper_row(data, &means, denom, p, row);
    }
    Ok(mirror_upper(cols, out))
}

fn mirror_upper<T: Copy>(n: usize, mut out: Vec<T>) -> DenseMat<T> {
    for p in 1..n {
        for q in 0..p {
            out[p * n + q] = out[q * n + p];
        }
    }
    DenseMat::from_parts(n, n, out)
}

/// Fill entries `q >= p` of covariance row `p`.
fn upper_row<T: Float>(data: MatView<'_, T>, means: &[T], denom: T, p: usize, out: &mut [T]) {
    for q in p..means.len() {
        let mut sum = T::zero();
        for i in 0..data.rows() {
            let r = data.row(i);
            sum = sum + (r[p] - means[p]) * (r[q] - means[q]);
        }
        out[q] = sum / denom;
    }
}

/// `2 x 2` covariance of two equally long samples.
pub fn cov_pair<T>(x: &[T], y: &[T], norm: Normalization) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    if x.len() != y.len() {
        return Err(KError::ShapeMismatch(format!(
            "cov of samples with lengths {} and {}",
            x.len(),
            y.len()
        )));
    }
    let stacked: Vec<T> = x.iter().zip(y).flat_map(|(&a, &b)| [a, b]).collect();
    covariance(MatView::from_parts(&stacked, x.len(), 2), norm)
}

/// Pearson correlation coefficients of the columns of `data`.
///
/// Entries are clamped to `[-1, 1]`. A constant column has zero variance
/// and yields `NaN` in its row and column. The normalization cancels out,
/// so none is taken.
pub fn corrcoef<T>(data: MatView<'_, T>) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    Ok(scale_to_correlation(covariance(data, Normalization::Sample)?))
}

/// `2 x 2` correlation of two equally long samples.
pub fn corrcoef_pair<T>(x: &[T], y: &[T]) -> KResult<DenseMat<T>>
where
    T: Float + Send + Sync,
{
    Ok(scale_to_correlation(cov_pair(x, y, Normalization::Sample)?))
}

fn scale_to_correlation<T: Float>(mut c: DenseMat<T>) -> DenseMat<T> {
    let n = c.cols();
    let sd: Vec<T> = (0..n).map(|i| c[(i, i)].sqrt()).collect();
    let one = T::one();
    for i in 0..n {
        for j in 0..n {
            let r = c[(i, j)] / (sd[i] * sd[j]);
            c[(i, j)] = if r > one {
                one
            } else if r < -one {
                -one
            } else {
                r
            };
        }
    }
    c
}
