//! Algebraic building blocks: binary operators, accumulators, semirings and mask truthiness.
//!
//! Everything here is a zero-sized, stateless value resolved at compile time,
//! so kernels are monomorphized per operator and pay no dispatch cost.

pub mod accum;
pub mod mask;
pub mod ops;
pub mod semiring;

pub use accum::{Accumulator, NoAccumulate};
pub use mask::MaskValue;
pub use ops::{
    BinaryOp, First, LogicalAnd, LogicalOr, LogicalXor, Max, Min, Minus, Plus, Second, Times,
};
pub use semiring::{
    ArithmeticSemiring, LogicalSemiring, MaxPlusSemiring, MaxTimesSemiring, MinPlusSemiring,
    MinSelect2ndSemiring, Semiring,
};
