//! Conversions between numkern's row-major matrices and `faer` matrices.
//!
//! The kernel stores everything row-major in flat buffers, while `faer::Mat`
//! owns its own (column-major) storage. These conversions copy element by
//! element through `(i, j)` indexing, so layout differences never leak out.
//! They let kernel results feed into faer-based solvers, and let tests and
//! benchmarks cross-check the kernel against faer's factorizations.
//!
//! # References
//! - [faer crate documentation](https://docs.rs/faer)

use faer::{Mat, MatRef};
use num_traits::Float;

use crate::matrix::{DenseMat, MatView};

impl<T: Float> MatView<'_, T> {
    /// Copy into a freshly allocated `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        Mat::from_fn(self.rows(), self.cols(), |i, j| self.get(i, j))
    }
}

impl<T: Float> DenseMat<T> {
    /// Copy into a freshly allocated `faer::Mat`.
    pub fn to_faer(&self) -> Mat<T> {
        self.view().to_faer()
    }

    /// Copy a faer matrix (any layout) into row-major storage.
    pub fn from_faer(m: MatRef<'_, T>) -> Self {
        let (rows, cols) = (m.nrows(), m.ncols());
        let mut out = DenseMat::zeros(rows, cols);
        for i in 0..rows {
            for j in 0..cols {
                out[(i, j)] = m[(i, j)];
            }
        }
        out
    }
}
