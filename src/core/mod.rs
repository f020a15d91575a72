//! Core sparse storage abstractions shared by every kernel.
//!
//! - [`sequence`]: the owned, index-ordered `(index, value)` buffer and its read-only view.
//! - [`traits`]: the storage interface the kernels read matrices and vectors through.

pub mod sequence;
pub mod traits;

pub use sequence::{SparseSequence, SparseView};
pub use traits::{MatrixStorage, VectorStorage};
