//! Dense linear algebra: LU with partial pivoting, determinant, inverse,
//! matrix product and LU-based solves.
//!
//! LU is the dependency root: [`det`], [`inverse`] and [`solve`] all factor
//! through [`lu::lu`] and never touch the caller's buffer.

pub mod det;
pub mod inverse;
pub mod lu;
pub mod matmul;
pub mod solve;

pub use det::determinant;
pub use inverse::{inverse, inverse_with};
pub use lu::{lu, FactorFlags, LuFactor};
pub use matmul::{matmul, matmul_with};
pub use solve::{left_divide, right_divide, solve, solve_matrix};
