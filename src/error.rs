use thiserror::Error;

// Unified error type for linop

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpError {
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),
    #[error("cannot infer action: {0}")]
    InferenceError(String),
    #[error("construction error: {0}")]
    ConstructionError(String),
    #[error("factorization error: {0}")]
    FactorError(String),
    #[error("solve error: {0}")]
    SolveError(String),
    #[error("invalid dimension {0} (operators are two-dimensional)")]
    InvalidDimension(usize),
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),
}

impl OpError {
    pub(crate) fn length(context: &str, expected: usize, found: usize) -> Self {
        OpError::ShapeMismatch(format!(
            "{context}: expected vector of length {expected}, got {found}"
        ))
    }
}
