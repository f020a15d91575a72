//! API options for kernel execution.
//!
//! This module provides the `ExecOptions` struct, which controls how the
//! row-oriented kernels (mxv, vxm, matrix extraction, element-wise matrix
//! operations) schedule their work. Options never change the result of an
//! operation, only how it is computed.

/// Kernel scheduling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecOptions {
    /// Evaluate output rows in parallel (requires the `rayon` feature)
    pub parallel_rows: bool,

    /// Row count below which the serial path is always taken
    pub min_parallel_rows: usize,
}

impl Default for ExecOptions {
    fn default() -> Self {
        Self {
            parallel_rows: cfg!(feature = "rayon"),
            min_parallel_rows: 1024,
        }
    }
}

impl ExecOptions {
    /// Options forcing the single-threaded reference path.
    pub fn serial() -> Self {
        Self { parallel_rows: false, ..Self::default() }
    }

    /// Whether a kernel over `nrows` output rows should fan out across threads.
    pub fn use_parallel(&self, nrows: usize) -> bool {
        cfg!(feature = "rayon") && self.parallel_rows && nrows >= self.min_parallel_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_never_parallel() {
        let opts = ExecOptions::serial();
        assert!(!opts.use_parallel(1 << 20));
    }

    #[test]
    fn threshold_respected() {
        let opts = ExecOptions { parallel_rows: true, min_parallel_rows: 10 };
        assert!(!opts.use_parallel(9));
        assert_eq!(opts.use_parallel(10), cfg!(feature = "rayon"));
    }
}
