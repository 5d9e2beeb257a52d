//! Solver interfaces.

/// Outcome of a solve.
#[derive(Clone, Debug, PartialEq)]
pub struct SolveStats<T> {
    pub iterations: usize,
    /// Max-norm of `b − A·x` for the returned `x`.
    pub final_residual: T,
    pub converged: bool,
}

/// Common interface for direct solvers.
pub trait LinearSolver<M, V> {
    type Error;
    type Scalar: Copy;
    /// Solve A·x = b, writing result into `x`.
    fn solve(&mut self, a: &M, b: &V, x: &mut V) -> Result<SolveStats<Self::Scalar>, Self::Error>;
}

pub mod direct_lu;
pub use direct_lu::LuSolver;
