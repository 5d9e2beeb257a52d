//! Matrix module: borrowed and owned row-major dense matrices.

pub mod dense;
pub use dense::{DenseMat, MatView};
