//! GraphBLAS operations.
//!
//! Every operation validates shapes, computes a sparse intermediate and
//! commits it through [`crate::engine::write`]. They share the same mask,
//! accumulate and replace semantics.

pub mod ewise;
pub mod extract;
pub mod mxv;
pub mod vxm;

pub use ewise::{
    ewise_add_matrix, ewise_add_matrix_with, ewise_add_vector, ewise_mult_matrix,
    ewise_mult_matrix_with, ewise_mult_vector,
};
pub use extract::{
    extract_column, extract_matrix, extract_matrix_with, extract_row, extract_vector,
};
pub use mxv::{mxv, mxv_with};
pub use vxm::vxm;
