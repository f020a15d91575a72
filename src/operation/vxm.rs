//! Vector-matrix multiply over a semiring: `w<mask> ⊙= u ⊕.⊗ A`.
//!
//! Computed by scattering: each stored `u[i]` scales row `i` of `A` into a
//! dense accumulator indexed by column. Terms are folded in ascending `i`, and
//! the accumulator is swept in column order, so `t` comes out ascending.

use crate::algebra::{Accumulator, Semiring};
use crate::core::sequence::SparseSequence;
use crate::core::traits::{MatrixStorage, VectorStorage};
use crate::engine::write_vector;
use crate::error::GraphError;
use crate::matrix::Vector;
use crate::utils::check::{check_dimension, check_vector_mask};

/// `w<mask> ⊙= u ⊕.⊗ A`.
///
/// # Errors
/// `DimensionMismatch` unless `size(w) == size(mask)`, `size(w) == ncols(A)`
/// and `size(u) == nrows(A)`.
pub fn vxm<T, U, A, S, Acc, UV, AM>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    semiring: &S,
    u: &UV,
    a: &AM,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    S: Semiring<U, A, Output = T>,
    Acc: Accumulator<T>,
    UV: VectorStorage<U>,
    AM: MatrixStorage<A>,
{
    check_vector_mask(w, mask, "vxm: failed size(w) == size(mask) check")?;
    check_dimension(w.size(), a.ncols(), "vxm: failed size(w) == ncols(A) check")?;
    check_dimension(u.size(), a.nrows(), "vxm: failed size(u) == nrows(A) check")?;

    let mut t = SparseSequence::new();
    if a.nvals() > 0 && u.nvals() > 0 {
        let mut scratch: Vec<Option<T>> = (0..a.ncols()).map(|_| None).collect();
        for (i, ui) in u.contents().iter() {
            for (j, aij) in a.row(i).iter() {
                let term = semiring.multiply(ui, aij);
                scratch[j] = Some(match scratch[j].take() {
                    Some(sum) => semiring.add(sum, term),
                    None => term,
                });
            }
        }
        t = scratch
            .into_iter()
            .enumerate()
            .filter_map(|(j, v)| v.map(|v| (j, v)))
            .collect();
    }

    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}
