use thiserror::Error;

// Unified error type for sparseblas

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),
    #[error("index {index} out of bounds (bound {bound})")]
    IndexOutOfBounds { index: usize, bound: usize },
    #[error("no value stored at the requested position")]
    NoValue,
}
