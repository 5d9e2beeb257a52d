//! Call-boundary options for the statistics and linear-algebra routines.
//!
//! Every optional parameter the kernel understands lives here with its
//! documented default, so a caller resolves them once and passes a single
//! struct down. The raw `u8` flags used at the flat boundary are converted
//! through [`Normalization::from_flag`] and [`Dim::from_flag`].

use crate::error::{KError, KResult};

/// Divisor applied to a sum of squared deviations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Normalization {
    /// Divide by `n` (flag `0`).
    Population,
    /// Divide by `n - 1`, Bessel's correction (flag `1`).
    #[default]
    Sample,
}

impl Normalization {
    /// Convert a raw flag: `0` is population, `1` is sample.
    pub fn from_flag(flag: u8) -> KResult<Self> {
        match flag {
            0 => Ok(Normalization::Population),
            1 => Ok(Normalization::Sample),
            other => Err(KError::InvalidFlag(other)),
        }
    }

    /// Number of degrees of freedom removed from the observation count.
    pub fn ddof(self) -> usize {
        match self {
            Normalization::Population => 0,
            Normalization::Sample => 1,
        }
    }
}

/// Direction along which a grid is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dim {
    /// One result per row, reducing across the columns (flag `0`).
    #[default]
    Rows,
    /// One result per column, reducing down the rows (flag `1`).
    Columns,
}

impl Dim {
    pub fn from_flag(flag: u8) -> KResult<Self> {
        match flag {
            0 => Ok(Dim::Rows),
            1 => Ok(Dim::Columns),
            other => Err(KError::InvalidDim(other)),
        }
    }
}

/// Statistics options.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsOptions {
    /// Population or sample normalization (default: sample)
    pub norm: Normalization,

    /// Reduction direction for grids (default: columns)
    pub dim: Dim,
}

impl StatsOptions {
    pub fn with_norm(mut self, norm: Normalization) -> Self {
        self.norm = norm;
        self
    }

    pub fn with_dim(mut self, dim: Dim) -> Self {
        self.dim = dim;
        self
    }
}

/// What `inverse` does when the determinant is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SingularPolicy {
    /// Return `KError::Singular`.
    #[default]
    Error,
    /// Return a matrix filled with `NaN`.
    NanFill,
}

/// Linear-algebra options.
#[derive(Debug, Clone, Copy)]
pub struct LinalgOptions {
    /// Reaction to a singular matrix in `inverse` (default: error)
    pub singular: SingularPolicy,

    /// A matrix is singular when `|det| <= singular_tol` (default: 0.0, exact)
    pub singular_tol: f64,

    /// Minimum multiply-add count before loops go parallel
    pub parallel_threshold: usize,
}

impl Default for LinalgOptions {
    fn default() -> Self {
        Self {
            singular: SingularPolicy::Error,
            singular_tol: 0.0,
            parallel_threshold: 64 * 64 * 64,
        }
    }
}

impl LinalgOptions {
    pub fn with_singular(mut self, policy: SingularPolicy) -> Self {
        self.singular = policy;
        self
    }

    pub fn with_singular_tol(mut self, tol: f64) -> Self {
        self.singular_tol = tol;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }
}
