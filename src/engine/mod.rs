//! Shared kernel engines.
//!
//! - [`dot`]: semiring inner product of two sparse sequences.
//! - [`write`]: the masked-accumulate-write pipeline every operation commits through.

pub mod dot;
pub mod write;

pub use dot::{dot, dot_into};
pub use write::{ewise_or_opt_accum, write_matrix, write_vector, write_with_opt_mask};
