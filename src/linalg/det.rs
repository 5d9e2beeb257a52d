//! Determinant via LU.

use num_traits::Float;

use crate::core::traits::MatShape;
use crate::error::KResult;
use crate::linalg::lu::lu;
use crate::matrix::MatView;

/// `det(A) = sign × Π diag(U)`. The empty `0 x 0` matrix has determinant 1.
///
/// No tolerance is applied: a singular matrix whose elimination leaves a
/// tiny rounding residue on the diagonal reports that residue.
pub fn determinant<T: Float>(a: MatView<'_, T>) -> KResult<T> {
    a.require_square("determinant")?;
    lu(a).determinant()
}
