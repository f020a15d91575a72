//! Accumulate operators for the write stage.
//!
//! An accumulator merges a freshly computed value into the value already
//! stored in the output. [`NoAccumulate`] is the sentinel meaning "the new
//! value replaces the old one", and turns the merge into a plain copy of the
//! intermediate result.

use crate::algebra::ops::{
    BinaryOp, First, LogicalAnd, LogicalOr, LogicalXor, Max, Min, Minus, Plus, Second, Times,
};

/// Combines an existing output value with a new one.
pub trait Accumulator<T> {
    /// `false` only for the no-accumulate sentinel.
    const ACCUMULATES: bool = true;

    fn accumulate(&self, existing: T, new: T) -> T;
}

/// No accumulation: the intermediate result is taken as-is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoAccumulate;

impl<T> Accumulator<T> for NoAccumulate {
    const ACCUMULATES: bool = false;

    fn accumulate(&self, _existing: T, new: T) -> T {
        new
    }
}

macro_rules! accumulate_with {
    ($($op:ident),* $(,)?) => {
        $(
            impl<T> Accumulator<T> for $op
            where
                $op: BinaryOp<T>,
            {
                fn accumulate(&self, existing: T, new: T) -> T {
                    self.apply(existing, new)
                }
            }
        )*
    };
}

accumulate_with!(Plus, Minus, Times, Min, Max, First, Second, LogicalOr, LogicalAnd, LogicalXor);
