//! sparseblas: GraphBLAS-style sparse kernels over arbitrary semirings
//!
//! This crate provides sparse matrix-vector multiply, extraction and
//! element-wise operations that all commit through one masked,
//! accumulating write pipeline.

pub mod parallel;

pub mod algebra;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod matrix;
pub mod operation;
pub mod utils;

// Re-exports for convenience
pub use algebra::*;
pub use config::*;
pub use self::core::*;
pub use error::*;
pub use matrix::*;
pub use operation::*;
pub use utils::IndexList;
