use thiserror::Error;

// Unified error type for numkern

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("singular matrix (determinant is zero)")]
    Singular,
    #[error("solve error: {0}")]
    SolveError(String),
    #[error("zero pivot at row {0}")]
    ZeroPivot(usize),
    #[error("empty input: {0}")]
    EmptyInput(&'static str),
    #[error("invalid normalization flag {0}, expected 0 (population) or 1 (sample)")]
    InvalidFlag(u8),
    #[error("invalid dimension {0}, expected 0 (columns) or 1 (rows)")]
    InvalidDim(u8),
}

pub type KResult<T> = Result<T, KError>;
