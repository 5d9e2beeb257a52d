//! Linear systems and matrix division on top of LU.
//!
//! - [`solve`]: `A x = b` for a single right-hand side.
//! - [`solve_matrix`] / [`left_divide`]: `A X = B`, i.e. `A \ B`.
//! - [`right_divide`]: `X A = B`, i.e. `B / A`.
//!
//! Unlike [`inverse_with`](crate::linalg::inverse::inverse_with), there is no
//! NaN policy here: a zero on the diagonal of `U` is always
//! [`KError::Singular`].

use num_traits::Float;

use crate::core::traits::MatShape;
use crate::error::{KError, KResult};
use crate::linalg::lu::{lu, LuFactor};
use crate::matrix::{DenseMat, MatView};

/// Factor a square matrix and reject exact zero pivots.
pub(crate) fn factor_nonsingular<T: Float>(a: MatView<'_, T>, op: &str) -> KResult<LuFactor<T>> {
    a.require_square(op)?;
    let factor = lu(a);
    if factor.diagonal().iter().any(|d| *d == T::zero()) {
        log::warn!("{op}: {}x{} matrix is singular", a.rows(), a.cols());
        return Err(KError::Singular);
    }
    Ok(factor)
}

/// Solve `A x = b`.
pub fn solve<T: Float>(a: MatView<'_, T>, b: &[T]) -> KResult<Vec<T>> {
    if a.rows() != b.len() {
        return Err(KError::ShapeMismatch(format!(
            "matrix has {} rows but right-hand side has length {}",
            a.rows(),
            b.len()
        )));
    }
    let factor = factor_nonsingular(a, "solve")?;
    let mut x = b.to_vec();
    factor.solve_in_place(&mut x)?;
    Ok(x)
}

/// Solve `A X = B` column by column.
pub fn solve_matrix<T: Float>(a: MatView<'_, T>, b: MatView<'_, T>) -> KResult<DenseMat<T>> {
    if a.rows() != b.rows() {
        return Err(KError::ShapeMismatch(format!(
            "matrix has {} rows but right-hand side has {}",
            a.rows(),
            b.rows()
        )));
    }
    let factor = factor_nonsingular(a, "solve")?;
    let mut out = DenseMat::zeros(b.rows(), b.cols());
    for j in 0..b.cols() {
        let mut col = b.column(j);
        factor.solve_in_place(&mut col)?;
        for (i, v) in col.into_iter().enumerate() {
            out[(i, j)] = v;
        }
    }
    Ok(out)
}

/// `A \ B`: the `X` with `A X = B`.
pub fn left_divide<T: Float>(a: MatView<'_, T>, b: MatView<'_, T>) -> KResult<DenseMat<T>> {
    solve_matrix(a, b)
}

/// `B / A`: the `X` with `X A = B`, solved as `Aᵀ Xᵀ = Bᵀ`.
pub fn right_divide<T: Float>(b: MatView<'_, T>, a: MatView<'_, T>) -> KResult<DenseMat<T>> {
    if b.cols() != a.rows() {
        return Err(KError::ShapeMismatch(format!(
            "cannot divide {}x{} by {}x{}: column counts differ",
            b.rows(),
            b.cols(),
            a.rows(),
            a.cols()
        )));
    }
    let at = a.transpose();
    let bt = b.transpose();
    Ok(solve_matrix(at.view(), bt.view())?.transpose())
}
