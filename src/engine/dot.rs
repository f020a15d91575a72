//! Semiring dot product over sparse sequences.
//!
//! Two-pointer intersection of two ascending, index-unique sequences. Only
//! matching indices contribute; the fold starts from the first product, not
//! from the semiring zero, so "no overlap" and "evaluated to zero" stay
//! distinguishable.

use std::cmp::Ordering;

use crate::algebra::Semiring;
use crate::core::sequence::SparseView;

/// `⊕_k a[k] ⊗ u[k]` over the indices present in both, or `None` when the
/// sequences share no index.
pub fn dot<A, U, S>(a: SparseView<'_, A>, u: SparseView<'_, U>, semiring: &S) -> Option<S::Output>
where
    S: Semiring<A, U>,
{
    let (a_idx, a_val) = (a.indices(), a.values());
    let (u_idx, u_val) = (u.indices(), u.values());
    let (mut i, mut j) = (0, 0);
    let mut acc: Option<S::Output> = None;

    while i < a_idx.len() && j < u_idx.len() {
        match a_idx[i].cmp(&u_idx[j]) {
            Ordering::Less => i += 1,
            Ordering::Greater => j += 1,
            Ordering::Equal => {
                let term = semiring.multiply(&a_val[i], &u_val[j]);
                acc = Some(match acc {
                    Some(sum) => semiring.add(sum, term),
                    None => term,
                });
                i += 1;
                j += 1;
            }
        }
    }
    acc
}

/// Out-parameter form of [`dot`]: writes into `out` and returns `true` iff a
/// term was produced; `out` is untouched otherwise.
pub fn dot_into<A, U, S>(
    out: &mut S::Output,
    a: SparseView<'_, A>,
    u: SparseView<'_, U>,
    semiring: &S,
) -> bool
where
    S: Semiring<A, U>,
{
    match dot(a, u, semiring) {
        Some(v) => {
            *out = v;
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{ArithmeticSemiring, MinPlusSemiring};
    use crate::core::sequence::SparseSequence;

    fn seq(pairs: &[(usize, f64)]) -> SparseSequence<f64> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn overlapping_indices_only() {
        let a = seq(&[(0, 2.0), (3, 4.0), (5, 1.0)]);
        let u = seq(&[(1, 10.0), (3, 0.5), (5, 3.0), (9, 7.0)]);
        assert_eq!(dot(a.view(), u.view(), &ArithmeticSemiring), Some(5.0));
    }

    #[test]
    fn no_overlap_yields_no_value() {
        let a = seq(&[(0, 2.0), (2, 4.0)]);
        let u = seq(&[(1, 10.0), (3, 0.5)]);
        assert_eq!(dot(a.view(), u.view(), &ArithmeticSemiring), None);
        let mut out = -1.0;
        assert!(!dot_into(&mut out, a.view(), u.view(), &ArithmeticSemiring));
        assert_eq!(out, -1.0);
    }

    #[test]
    fn evaluated_zero_is_a_value() {
        let a = seq(&[(1, 2.0), (2, -2.0)]);
        let u = seq(&[(1, 1.0), (2, 1.0)]);
        let mut out = -1.0;
        assert!(dot_into(&mut out, a.view(), u.view(), &ArithmeticSemiring));
        assert_eq!(out, 0.0);
    }

    #[test]
    fn empty_operand() {
        let a = seq(&[]);
        let u = seq(&[(0, 1.0)]);
        assert_eq!(dot(a.view(), u.view(), &ArithmeticSemiring), None);
        assert_eq!(dot(u.view(), a.view(), &ArithmeticSemiring), None);
    }

    #[test]
    fn min_plus_path_relaxation() {
        let a = seq(&[(0, 1.0), (1, 5.0), (2, 2.0)]);
        let u = seq(&[(0, 10.0), (1, 1.0), (2, 3.0)]);
        assert_eq!(dot(a.view(), u.view(), &MinPlusSemiring), Some(5.0));
    }
}
