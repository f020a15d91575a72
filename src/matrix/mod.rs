//! Matrix module: sparse matrix and vector containers.
//!
//! These are the storage collaborators the kernels read from and commit into.
//! Construction helpers (dense, triples, faer interop) live here too.

pub mod dense;
pub mod sparse;
pub mod vector;

pub use sparse::Matrix;
pub use vector::Vector;
