//! Utility modules: precondition checks and index list handling.

pub mod check;
pub mod index;

pub use index::IndexList;
