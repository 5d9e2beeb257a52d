//! Matrix inverse by LU and column-wise substitution.
//!
//! Column `j` of `A⁻¹` solves `A x = e_j`: the basis vector is permuted by
//! the pivot sequence, forward-substituted through unit-lower `L`, then
//! back-substituted through `U`.
//!
//! With the default `singular_tol` of zero a matrix is singular when `U`
//! has an exact zero on its diagonal, the same test the solvers use, so a
//! determinant that merely underflows does not count. A positive tolerance
//! instead compares `|det| <= singular_tol`. What happens next is the caller's choice
//! through [`SingularPolicy`]: an explicit [`KError::Singular`], or a
//! `NaN`-filled matrix for callers that rely on sentinel propagation.

use num_traits::{Float, NumCast};

use crate::config::{LinalgOptions, SingularPolicy};
use crate::core::traits::MatShape;
use crate::error::{KError, KResult};
use crate::linalg::lu::{lu, LuFactor};
use crate::matrix::{DenseMat, MatView};

/// Inverse with default options (singular matrices are an error).
pub fn inverse<T: Float>(a: MatView<'_, T>) -> KResult<DenseMat<T>> {
    inverse_with(a, &LinalgOptions::default())
}

pub fn inverse_with<T: Float>(a: MatView<'_, T>, opts: &LinalgOptions) -> KResult<DenseMat<T>> {
    let n = a.require_square("inverse")?;
    let factor = lu(a);
    let det = factor.determinant()?;
    let singular = if opts.singular_tol > 0.0 {
        let tol = <T as NumCast>::from(opts.singular_tol).unwrap_or_else(T::zero);
        det.abs() <= tol
    } else {
        factor.diagonal().iter().any(|d| *d == T::zero())
    };

    if singular {
        log::warn!("inverse: {n}x{n} matrix is singular (det = {:?})", det.to_f64());
        return match opts.singular {
            SingularPolicy::Error => Err(KError::Singular),
            SingularPolicy::NanFill => Ok(DenseMat::filled(n, n, T::nan())),
        };
    }

    Ok(invert_factor(&factor))
}

/// Assemble `A⁻¹` from a square factor with a nonzero `U` diagonal.
pub(crate) fn invert_factor<T: Float>(factor: &LuFactor<T>) -> DenseMat<T> {
    let n = factor.rows();
    let mut out = DenseMat::zeros(n, n);
    let mut x = vec![T::zero(); n];
    for j in 0..n {
        for (xi, &src) in x.iter_mut().zip(factor.pivot()) {
            *xi = if src == j { T::one() } else { T::zero() };
        }
        factor.substitute(&mut x);
        for (i, &xi) in x.iter().enumerate() {
            out[(i, j)] = xi;
        }
    }
    out
}
