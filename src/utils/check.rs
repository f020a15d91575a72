//! Structural precondition checks.
//!
//! All checks compare sizes only and run before a kernel touches its output,
//! so a failed call leaves the output unmodified.

use crate::error::GraphError;
use crate::matrix::{Matrix, Vector};

pub fn check_index(index: usize, bound: usize) -> Result<(), GraphError> {
    if index < bound {
        Ok(())
    } else {
        log::debug!("index {} rejected, bound is {}", index, bound);
        Err(GraphError::IndexOutOfBounds { index, bound })
    }
}

/// `DimensionMismatch(msg)` unless `lhs == rhs`.
pub fn check_dimension(lhs: usize, rhs: usize, msg: &str) -> Result<(), GraphError> {
    if lhs == rhs {
        Ok(())
    } else {
        log::debug!("{} ({} != {})", msg, lhs, rhs);
        Err(GraphError::DimensionMismatch(msg.to_string()))
    }
}

pub fn check_vector_mask<T>(
    w: &Vector<T>,
    mask: Option<&Vector<bool>>,
    msg: &str,
) -> Result<(), GraphError> {
    match mask {
        Some(m) => check_dimension(w.size(), m.size(), msg),
        None => Ok(()),
    }
}

pub fn check_matrix_mask<T>(
    c: &Matrix<T>,
    mask: Option<&Matrix<bool>>,
    msg: &str,
) -> Result<(), GraphError> {
    match mask {
        Some(m) => {
            check_dimension(c.nrows(), m.nrows(), msg)?;
            check_dimension(c.ncols(), m.ncols(), msg)
        }
        None => Ok(()),
    }
}
