//! Semirings for the dot-product engine.
//!
//! A semiring swaps the ordinary (+, ×) of matrix-vector multiply for another
//! pair of operations:
//!
//! | Type | ⊕ (add) | ⊗ (multiply) | Zero | Use case |
//! |------|---------|--------------|------|----------|
//! | [`ArithmeticSemiring`] | + | × | 0 | numeric linear algebra |
//! | [`LogicalSemiring`] | or | and | false | reachability |
//! | [`MinPlusSemiring`] | min | + | +max | shortest paths |
//! | [`MaxPlusSemiring`] | max | + | -max | longest / critical paths |
//! | [`MaxTimesSemiring`] | max | × | 0 | most reliable path |
//! | [`MinSelect2ndSemiring`] | min | second | +max | BFS parent selection |
//!
//! The zero is the additive identity. The dot-product engine never seeds its
//! fold with it: a row with no overlap yields no value rather than the zero.

use num_traits::{Bounded, Zero};
use std::ops::{Add, Mul};

/// A semiring over operands `A` (matrix side) and `B` (vector side).
pub trait Semiring<A, B = A> {
    /// Result domain of ⊗ and ⊕.
    type Output;

    /// Additive identity.
    fn zero(&self) -> Self::Output;

    /// ⊗
    fn multiply(&self, a: &A, b: &B) -> Self::Output;

    /// ⊕
    fn add(&self, x: Self::Output, y: Self::Output) -> Self::Output;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArithmeticSemiring;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogicalSemiring;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinPlusSemiring;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxPlusSemiring;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxTimesSemiring;

/// Min over the vector-side operand of each matching pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinSelect2ndSemiring;

fn min<T: PartialOrd>(x: T, y: T) -> T {
    if y < x { y } else { x }
}

fn max<T: PartialOrd>(x: T, y: T) -> T {
    if y > x { y } else { x }
}

impl<T> Semiring<T> for ArithmeticSemiring
where
    T: Copy + Zero + Add<Output = T> + Mul<Output = T>,
{
    type Output = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn multiply(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    fn add(&self, x: T, y: T) -> T {
        x + y
    }
}

impl Semiring<bool> for LogicalSemiring {
    type Output = bool;

    fn zero(&self) -> bool {
        false
    }

    fn multiply(&self, a: &bool, b: &bool) -> bool {
        *a && *b
    }

    fn add(&self, x: bool, y: bool) -> bool {
        x || y
    }
}

impl<T> Semiring<T> for MinPlusSemiring
where
    T: Copy + Bounded + PartialOrd + Add<Output = T>,
{
    type Output = T;

    fn zero(&self) -> T {
        T::max_value()
    }

    fn multiply(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    fn add(&self, x: T, y: T) -> T {
        min(x, y)
    }
}

impl<T> Semiring<T> for MaxPlusSemiring
where
    T: Copy + Bounded + PartialOrd + Add<Output = T>,
{
    type Output = T;

    fn zero(&self) -> T {
        T::min_value()
    }

    fn multiply(&self, a: &T, b: &T) -> T {
        *a + *b
    }

    fn add(&self, x: T, y: T) -> T {
        max(x, y)
    }
}

impl<T> Semiring<T> for MaxTimesSemiring
where
    T: Copy + Zero + PartialOrd + Mul<Output = T>,
{
    type Output = T;

    fn zero(&self) -> T {
        T::zero()
    }

    fn multiply(&self, a: &T, b: &T) -> T {
        *a * *b
    }

    fn add(&self, x: T, y: T) -> T {
        max(x, y)
    }
}

impl<A, T> Semiring<A, T> for MinSelect2ndSemiring
where
    T: Copy + Bounded + PartialOrd,
{
    type Output = T;

    fn zero(&self) -> T {
        T::max_value()
    }

    fn multiply(&self, _a: &A, b: &T) -> T {
        *b
    }

    fn add(&self, x: T, y: T) -> T {
        min(x, y)
    }
}
