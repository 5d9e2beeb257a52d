//! numkern: dense linear algebra and descriptive statistics kernel
//!
//! This crate provides LU decomposition with partial pivoting, determinants,
//! inverses, matrix products and LU-based solves, together with Welford
//! mean/variance, z-scores, covariance and correlation. Matrices are
//! row-major buffers with explicit dimensions; the `flat` module adapts the
//! kernel to plain `f64` slices and raw normalization flags.

pub mod parallel;

pub mod config;
pub mod core;
pub mod error;
pub mod flat;
pub mod linalg;
pub mod matrix;
pub mod solver;
pub mod stats;

// Re-exports for convenience
pub use crate::core::{MatShape, Operand, Value};
pub use config::{Dim, LinalgOptions, Normalization, SingularPolicy, StatsOptions};
pub use error::{KError, KResult};
pub use linalg::{
    determinant, inverse, inverse_with, left_divide, lu, matmul, matmul_with, right_divide, solve, solve_matrix,
    FactorFlags, LuFactor,
};
pub use matrix::{DenseMat, MatView};
pub use solver::{LinearSolver, LuSolver, SolveStats};
pub use stats::{
    corrcoef, corrcoef_pair, cov_pair, covariance, covariance_with, mean, mean_of, std_dev, std_of, variance, variance_of, zscore,
    zscore_of, Welford,
};
