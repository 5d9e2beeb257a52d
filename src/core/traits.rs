//! Core shape traits for numkern.

use crate::error::{KError, KResult};

/// Anything with a row and column count.
pub trait MatShape {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;

    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }

    /// Fail with `ShapeMismatch` unless square; returns the order.
    fn require_square(&self, op: &str) -> KResult<usize> {
        if self.is_square() {
            Ok(self.nrows())
        } else {
            Err(KError::ShapeMismatch(format!(
                "{op} requires a square matrix, got {}x{}",
                self.nrows(),
                self.ncols()
            )))
        }
    }
}
