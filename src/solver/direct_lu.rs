//! Direct dense solver on the kernel's partial-pivoting LU.
//!
//! `LuSolver` keeps the last factorization so that many right-hand sides
//! can be solved against the same matrix without refactoring. Calling
//! [`LinearSolver::solve`] always refactors; [`LuSolver::factor`] followed
//! by [`LuSolver::solve_cached`] reuses the cached factor.

use num_traits::Float;

use crate::error::{KError, KResult};
use crate::linalg::lu::LuFactor;
use crate::linalg::solve::factor_nonsingular;
use crate::matrix::{DenseMat, MatView};
use crate::solver::{LinearSolver, SolveStats};

/// LU solver with a cached factorization.
#[derive(Debug, Clone)]
pub struct LuSolver<T> {
    factor: Option<LuFactor<T>>,
}

impl<T: Float> LuSolver<T> {
    /// Create a new LU solver (no factorization yet).
    pub fn new() -> Self {
        LuSolver { factor: None }
    }

    /// Factor `a` and cache the result, replacing any previous factor.
    ///
    /// Fails with [`KError::Singular`] if `U` has a zero on its diagonal.
    pub fn factor(&mut self, a: MatView<'_, T>) -> KResult<()> {
        self.factor = Some(factor_nonsingular(a, "LuSolver")?);
        Ok(())
    }

    pub fn factorization(&self) -> Option<&LuFactor<T>> {
        self.factor.as_ref()
    }

    /// Solve using the cached LU factorization.
    pub fn solve_cached(&self, b: &[T], x: &mut [T]) -> KResult<()> {
        let factor = self
            .factor
            .as_ref()
            .ok_or_else(|| KError::SolveError("solve_cached called before factorization".into()))?;
        if x.len() != b.len() {
            return Err(KError::ShapeMismatch(format!(
                "solution buffer has length {} but right-hand side has {}",
                x.len(),
                b.len()
            )));
        }
        x.copy_from_slice(b);
        factor.solve_in_place(x)
    }
}

impl<T: Float> Default for LuSolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn residual_max<T: Float>(a: MatView<'_, T>, b: &[T], x: &[T]) -> T {
    (0..a.rows()).fold(T::zero(), |acc, i| {
        let ax = a.row(i).iter().zip(x).fold(T::zero(), |s, (&aij, &xj)| s + aij * xj);
        acc.max((b[i] - ax).abs())
    })
}

impl<T: Float> LinearSolver<DenseMat<T>, Vec<T>> for LuSolver<T> {
    type Error = KError;
    type Scalar = T;

    /// Factor `a`, solve `A·x = b` and report the residual.
    fn solve(&mut self, a: &DenseMat<T>, b: &Vec<T>, x: &mut Vec<T>) -> KResult<SolveStats<T>> {
        if a.rows() != b.len() {
            return Err(KError::ShapeMismatch(format!(
                "matrix has {} rows but right-hand side has length {}",
                a.rows(),
                b.len()
            )));
        }
        self.factor(a.view())?;
        x.resize(b.len(), T::zero());
        self.solve_cached(b, x)?;
        Ok(SolveStats {
            iterations: 1,
            final_residual: residual_max(a.view(), b, x),
            converged: true,
        })
    }
}
