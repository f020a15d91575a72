//! Matrix-vector multiply over a semiring: `w<mask> ⊙= A ⊕.⊗ u`.
//!
//! Row-oriented, sparse times sparse: each non-empty row of `A` is intersected
//! with the stored entries of `u` by the dot-product engine. Rows whose dot
//! product produces no term contribute nothing to the intermediate `t`.

use crate::algebra::{Accumulator, Semiring};
use crate::config::ExecOptions;
use crate::core::sequence::SparseSequence;
use crate::core::traits::{MatrixStorage, VectorStorage};
use crate::engine::{dot, write_vector};
use crate::error::GraphError;
use crate::matrix::Vector;
use crate::parallel::map_rows;
use crate::utils::check::{check_dimension, check_vector_mask};

/// `w<mask> ⊙= A ⊕.⊗ u` with default execution options.
///
/// # Errors
/// `DimensionMismatch` unless `size(w) == size(mask)`, `size(w) == nrows(A)`
/// and `ncols(A) == size(u)`. `w` is untouched on error.
pub fn mxv<T, A, U, S, Acc, AM, UV>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    semiring: &S,
    a: &AM,
    u: &UV,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone + Send,
    A: Sync,
    U: Sync,
    S: Semiring<A, U, Output = T> + Sync,
    Acc: Accumulator<T>,
    AM: MatrixStorage<A> + Sync,
    UV: VectorStorage<U>,
{
    mxv_with(w, mask, accum, semiring, a, u, replace_flag, &ExecOptions::default())
}

/// [`mxv`] with explicit execution options.
#[allow(clippy::too_many_arguments)]
pub fn mxv_with<T, A, U, S, Acc, AM, UV>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    semiring: &S,
    a: &AM,
    u: &UV,
    replace_flag: bool,
    opts: &ExecOptions,
) -> Result<(), GraphError>
where
    T: Clone + Send,
    A: Sync,
    U: Sync,
    S: Semiring<A, U, Output = T> + Sync,
    Acc: Accumulator<T>,
    AM: MatrixStorage<A> + Sync,
    UV: VectorStorage<U>,
{
    check_vector_mask(w, mask, "mxv: failed size(w) == size(mask) check")?;
    check_dimension(w.size(), a.nrows(), "mxv: failed size(w) == nrows(A) check")?;
    check_dimension(a.ncols(), u.size(), "mxv: failed ncols(A) == size(u) check")?;

    let mut t = SparseSequence::new();
    if a.nvals() > 0 && u.nvals() > 0 {
        let u_contents = u.contents();
        let products = map_rows(a.nrows(), opts, |r| {
            let row = a.row(r);
            if row.is_empty() { None } else { dot(row, u_contents, semiring) }
        });
        t = products
            .into_iter()
            .enumerate()
            .filter_map(|(r, v)| v.map(|v| (r, v)))
            .collect();
    }

    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}
