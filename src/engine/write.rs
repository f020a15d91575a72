//! Masked-accumulate-write pipeline.
//!
//! Every operation computes a sparse intermediate `t` and hands it here:
//!
//! 1. [`ewise_or_opt_accum`] merges `t` with the current output `w` through
//!    the accumulator, giving `z`.
//! 2. [`write_with_opt_mask`] decides the committed contents from `w`, `z`,
//!    the mask and the replace flag.
//!
//! With a mask and `replace_flag == false`, a masked-out position keeps its
//! old value while a masked-in position takes `z` (and is cleared when `z`
//! has no entry there). With `replace_flag == true` everything outside the
//! mask is cleared.
//!
//! [`write_vector`] and [`write_matrix`] run both stages and commit the
//! result only once it is complete.

use crate::algebra::Accumulator;
use crate::core::sequence::{SparseSequence, SparseView};
use crate::matrix::{Matrix, Vector};

/// Stage 1: `z = w ⊙ t` over the union of indices, or `z = t` for [`NoAccumulate`].
///
/// [`NoAccumulate`]: crate::algebra::NoAccumulate
pub fn ewise_or_opt_accum<T, Acc>(
    w: SparseView<'_, T>,
    t: SparseSequence<T>,
    accum: &Acc,
) -> SparseSequence<T>
where
    T: Clone,
    Acc: Accumulator<T>,
{
    if !Acc::ACCUMULATES {
        return t;
    }

    let (w_idx, w_val) = (w.indices(), w.values());
    let mut z = SparseSequence::with_capacity(w_idx.len() + t.len());
    let mut k = 0;

    for (i, new) in t {
        while k < w_idx.len() && w_idx[k] < i {
            z.push(w_idx[k], w_val[k].clone());
            k += 1;
        }
        if k < w_idx.len() && w_idx[k] == i {
            z.push(i, accum.accumulate(w_val[k].clone(), new));
            k += 1;
        } else {
            z.push(i, new);
        }
    }
    for (&i, v) in w_idx[k..].iter().zip(&w_val[k..]) {
        z.push(i, v.clone());
    }
    z
}

/// Walks a mask in ascending index order.
struct MaskCursor<'a> {
    mask: SparseView<'a, bool>,
    pos: usize,
}

impl<'a> MaskCursor<'a> {
    fn new(mask: SparseView<'a, bool>) -> Self {
        Self { mask, pos: 0 }
    }

    /// Whether `index` is structurally true. Queries must be non-decreasing.
    fn allows(&mut self, index: usize) -> bool {
        let idx = self.mask.indices();
        while self.pos < idx.len() && idx[self.pos] < index {
            self.pos += 1;
        }
        self.pos < idx.len() && idx[self.pos] == index && self.mask.values()[self.pos]
    }
}

/// Stage 2: the contents to commit given `w`, `z`, an optional mask and the replace flag.
pub fn write_with_opt_mask<T>(
    w: SparseView<'_, T>,
    z: SparseSequence<T>,
    mask: Option<SparseView<'_, bool>>,
    replace_flag: bool,
) -> SparseSequence<T>
where
    T: Clone,
{
    let Some(mask) = mask else {
        return z;
    };

    let mut cursor = MaskCursor::new(mask);
    let (w_idx, w_val) = (w.indices(), w.values());
    let mut out = SparseSequence::with_capacity(w_idx.len().max(z.len()));
    let mut k = 0;

    for (i, new) in z {
        // positions held only by w
        while k < w_idx.len() && w_idx[k] < i {
            if !replace_flag && !cursor.allows(w_idx[k]) {
                out.push(w_idx[k], w_val[k].clone());
            }
            k += 1;
        }
        let old = if k < w_idx.len() && w_idx[k] == i {
            k += 1;
            Some(&w_val[k - 1])
        } else {
            None
        };
        if cursor.allows(i) {
            out.push(i, new);
        } else if let (false, Some(old)) = (replace_flag, old) {
            out.push(i, old.clone());
        }
    }
    for (&i, v) in w_idx[k..].iter().zip(&w_val[k..]) {
        if !replace_flag && !cursor.allows(i) {
            out.push(i, v.clone());
        }
    }
    out
}

/// Run both stages against a vector output and commit.
pub fn write_vector<T, Acc>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    t: SparseSequence<T>,
    replace_flag: bool,
) where
    T: Clone,
    Acc: Accumulator<T>,
{
    log::trace!(
        "write_vector: size={} nvals(t)={} masked={} accumulate={} replace={}",
        w.size(),
        t.len(),
        mask.is_some(),
        Acc::ACCUMULATES,
        replace_flag
    );
    let z = ewise_or_opt_accum(w.contents(), t, accum);
    let result = write_with_opt_mask(w.contents(), z, mask.map(Vector::contents), replace_flag);
    w.commit(result);
}

/// Run both stages row by row against a matrix output; rows are committed together
/// after every row has been computed. `t` holds one sequence per output row.
pub fn write_matrix<T, Acc>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    t: Vec<SparseSequence<T>>,
    replace_flag: bool,
) where
    T: Clone,
    Acc: Accumulator<T>,
{
    debug_assert_eq!(t.len(), c.nrows());
    log::trace!(
        "write_matrix: {}x{} nvals(t)={} masked={} accumulate={} replace={}",
        c.nrows(),
        c.ncols(),
        t.iter().map(SparseSequence::len).sum::<usize>(),
        mask.is_some(),
        Acc::ACCUMULATES,
        replace_flag
    );
    let rows: Vec<SparseSequence<T>> = t
        .into_iter()
        .enumerate()
        .map(|(r, t_row)| {
            let z = ewise_or_opt_accum(c.row(r), t_row, accum);
            write_with_opt_mask(c.row(r), z, mask.map(|m| m.row(r)), replace_flag)
        })
        .collect();
    c.commit(rows);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::{NoAccumulate, Plus};

    fn seq(pairs: &[(usize, i32)]) -> SparseSequence<i32> {
        pairs.iter().copied().collect()
    }

    fn mask(pairs: &[(usize, bool)]) -> SparseSequence<bool> {
        pairs.iter().copied().collect()
    }

    #[test]
    fn no_accumulate_is_t() {
        let w = seq(&[(0, 1), (2, 2)]);
        let t = seq(&[(1, 10), (2, 20)]);
        let z = ewise_or_opt_accum(w.view(), t.clone(), &NoAccumulate);
        assert_eq!(z, t);
    }

    #[test]
    fn accumulate_over_union() {
        let w = seq(&[(0, 1), (2, 2), (5, 5)]);
        let t = seq(&[(1, 10), (2, 20), (7, 70)]);
        let z = ewise_or_opt_accum(w.view(), t, &Plus);
        assert_eq!(z, seq(&[(0, 1), (1, 10), (2, 22), (5, 5), (7, 70)]));
    }

    #[test]
    fn no_mask_overwrites() {
        let w = seq(&[(0, 1), (3, 3)]);
        let z = seq(&[(1, 9)]);
        assert_eq!(write_with_opt_mask(w.view(), z.clone(), None, false), z);
        assert_eq!(write_with_opt_mask(w.view(), z.clone(), None, true), z);
    }

    #[test]
    fn merge_keeps_masked_out_and_clears_masked_in_without_z() {
        // 0: in-mask w+z, 1: in-mask w only, 2: out-of-mask w+z,
        // 3: out-of-mask w only, 4: in-mask z only
        let w = seq(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let z = seq(&[(0, 10), (2, 30), (4, 50)]);
        let m = mask(&[(0, true), (1, true), (2, false), (4, true)]);
        let out = write_with_opt_mask(w.view(), z, Some(m.view()), false);
        assert_eq!(out, seq(&[(0, 10), (2, 3), (3, 4), (4, 50)]));
    }

    #[test]
    fn replace_wipes_outside_mask() {
        let w = seq(&[(0, 1), (1, 2), (2, 3), (3, 4)]);
        let z = seq(&[(0, 10), (2, 30), (4, 50)]);
        let m = mask(&[(0, true), (1, true), (2, false), (4, true)]);
        let out = write_with_opt_mask(w.view(), z, Some(m.view()), true);
        assert_eq!(out, seq(&[(0, 10), (4, 50)]));
    }

    #[test]
    fn empty_mask_blocks_every_write() {
        let w = seq(&[(1, 2)]);
        let z = seq(&[(0, 10), (1, 20)]);
        let m = mask(&[]);
        assert_eq!(write_with_opt_mask(w.view(), z.clone(), Some(m.view()), false), seq(&[(1, 2)]));
        assert!(write_with_opt_mask(w.view(), z, Some(m.view()), true).is_empty());
    }

    #[test]
    fn vector_commit_through_pipeline() {
        let mut w = Vector::from_pairs(4, vec![(0, 20), (1, 20), (3, 20)]).unwrap();
        let m = Vector::from_pairs(4, vec![(0, true), (1, true), (2, true)]).unwrap();
        write_vector(&mut w, Some(&m), &Plus, seq(&[(0, 1), (2, 5)]), false);
        // 0: 20+1, 1: masked-in, z keeps 20, 2: new 5, 3: masked-out kept
        assert_eq!(w.to_dense(0), vec![21, 20, 5, 20]);
    }
}
