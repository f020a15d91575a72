//! Execution options for the sparse kernels.

pub mod options;
pub use options::ExecOptions;
