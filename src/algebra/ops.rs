//! Binary operators over a single domain.

use std::ops::{Add, Mul, Sub};

/// A binary operator `T × T → T`.
pub trait BinaryOp<T> {
    fn apply(&self, a: T, b: T) -> T;
}

/// `a + b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Plus;

/// `a - b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minus;

/// `a * b`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Times;

/// Smaller of the two; `a` on ties or when unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

/// Larger of the two; `a` on ties or when unordered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

/// Returns `a`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

/// Returns `b`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Second;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalOr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalAnd;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalXor;

impl<T: Add<Output = T>> BinaryOp<T> for Plus {
    fn apply(&self, a: T, b: T) -> T {
        a + b
    }
}

impl<T: Sub<Output = T>> BinaryOp<T> for Minus {
    fn apply(&self, a: T, b: T) -> T {
        a - b
    }
}

impl<T: Mul<Output = T>> BinaryOp<T> for Times {
    fn apply(&self, a: T, b: T) -> T {
        a * b
    }
}

impl<T: PartialOrd> BinaryOp<T> for Min {
    fn apply(&self, a: T, b: T) -> T {
        if b < a { b } else { a }
    }
}

impl<T: PartialOrd> BinaryOp<T> for Max {
    fn apply(&self, a: T, b: T) -> T {
        if b > a { b } else { a }
    }
}

impl<T> BinaryOp<T> for First {
    fn apply(&self, a: T, _b: T) -> T {
        a
    }
}

impl<T> BinaryOp<T> for Second {
    fn apply(&self, _a: T, b: T) -> T {
        b
    }
}

impl BinaryOp<bool> for LogicalOr {
    fn apply(&self, a: bool, b: bool) -> bool {
        a || b
    }
}

impl BinaryOp<bool> for LogicalAnd {
    fn apply(&self, a: bool, b: bool) -> bool {
        a && b
    }
}

impl BinaryOp<bool> for LogicalXor {
    fn apply(&self, a: bool, b: bool) -> bool {
        a != b
    }
}
