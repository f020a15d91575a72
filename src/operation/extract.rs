//! Extraction: gather a sub-vector or sub-matrix selected by index lists.
//!
//! Output position `i` reads source position `indices[i]`, so index lists may
//! repeat (the source value is replicated) or permute (the output is
//! reordered). [`IndexList::All`] selects every source index in order. The
//! gathered result then goes through the same masked-accumulate-write
//! pipeline as every other operation.

use std::cmp::Ordering;

use crate::algebra::Accumulator;
use crate::config::ExecOptions;
use crate::core::sequence::{SparseSequence, SparseView};
use crate::core::traits::{MatrixStorage, VectorStorage};
use crate::engine::{write_matrix, write_vector};
use crate::error::GraphError;
use crate::matrix::{Matrix, Vector};
use crate::parallel::map_rows;
use crate::utils::check::{check_dimension, check_index, check_matrix_mask, check_vector_mask};
use crate::utils::index::IndexList;

/// Maps source columns to the output positions that read them.
///
/// Pairs are `(source column, output position)` sorted by source column, so a
/// single merge pass over an ascending source row finds every match, including
/// repeated source columns.
struct ColumnSelector {
    pairs: Vec<(usize, usize)>,
}

impl ColumnSelector {
    /// `None` for [`IndexList::All`], where rows are copied unchanged.
    fn new(cols: IndexList<'_>) -> Option<Self> {
        match cols {
            IndexList::All => None,
            IndexList::Indices(ix) => {
                let mut pairs: Vec<(usize, usize)> =
                    ix.iter().enumerate().map(|(pos, &src)| (src, pos)).collect();
                pairs.sort_unstable();
                Some(Self { pairs })
            }
        }
    }

    fn gather<T: Clone>(&self, row: SparseView<'_, T>) -> SparseSequence<T> {
        let (idx, vals) = (row.indices(), row.values());
        let mut out = Vec::new();
        let (mut i, mut k) = (0, 0);
        while i < idx.len() && k < self.pairs.len() {
            let (src, pos) = self.pairs[k];
            match idx[i].cmp(&src) {
                Ordering::Less => i += 1,
                Ordering::Greater => k += 1,
                Ordering::Equal => {
                    out.push((pos, vals[i].clone()));
                    k += 1;
                }
            }
        }
        // gathered in source order; restore output order
        SparseSequence::from_unsorted(out)
    }
}

fn select_row<T: Clone>(
    selector: Option<&ColumnSelector>,
    row: SparseView<'_, T>,
) -> SparseSequence<T> {
    match selector {
        Some(s) => s.gather(row),
        None => row.to_sequence(),
    }
}

/// `w<mask> ⊙= u(indices)`
///
/// # Errors
/// `DimensionMismatch` unless `size(w) == size(mask)` and
/// `size(w) == len(indices)`; `IndexOutOfBounds` for an index `>= size(u)`.
pub fn extract_vector<T, Acc, UV>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    u: &UV,
    indices: IndexList<'_>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    Acc: Accumulator<T>,
    UV: VectorStorage<T>,
{
    check_vector_mask(w, mask, "extract: failed size(w) == size(mask) check")?;
    check_dimension(w.size(), indices.len(u.size()), "extract: failed size(w) == nindices check")?;
    indices.validate(u.size())?;

    let contents = u.contents();
    let t = match indices {
        IndexList::Indices(ix) if !indices.is_identity(u.size()) => ix
            .iter()
            .enumerate()
            .filter_map(|(pos, &src)| contents.get(src).map(|v| (pos, v.clone())))
            .collect(),
        _ => contents.to_sequence(),
    };

    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}

/// `C<mask> ⊙= A(rows, cols)` with default execution options.
///
/// # Errors
/// `DimensionMismatch` unless the mask matches `C`, `nrows(C) == len(rows)`
/// and `ncols(C) == len(cols)`; `IndexOutOfBounds` for an index outside `A`.
pub fn extract_matrix<T, Acc, AM>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    a: &AM,
    rows: IndexList<'_>,
    cols: IndexList<'_>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone + Send,
    Acc: Accumulator<T>,
    AM: MatrixStorage<T> + Sync,
{
    extract_matrix_with(c, mask, accum, a, rows, cols, replace_flag, &ExecOptions::default())
}

/// [`extract_matrix`] with explicit execution options.
#[allow(clippy::too_many_arguments)]
pub fn extract_matrix_with<T, Acc, AM>(
    c: &mut Matrix<T>,
    mask: Option<&Matrix<bool>>,
    accum: &Acc,
    a: &AM,
    rows: IndexList<'_>,
    cols: IndexList<'_>,
    replace_flag: bool,
    opts: &ExecOptions,
) -> Result<(), GraphError>
where
    T: Clone + Send,
    Acc: Accumulator<T>,
    AM: MatrixStorage<T> + Sync,
{
    check_matrix_mask(c, mask, "extract: failed size(C) == size(mask) check")?;
    check_dimension(
        c.nrows(),
        rows.len(a.nrows()),
        "extract: failed nrows(C) == nindices(rows) check",
    )?;
    check_dimension(
        c.ncols(),
        cols.len(a.ncols()),
        "extract: failed ncols(C) == nindices(cols) check",
    )?;
    rows.validate(a.nrows())?;
    cols.validate(a.ncols())?;

    let selector = ColumnSelector::new(cols);
    let t = map_rows(c.nrows(), opts, |i| {
        select_row(selector.as_ref(), a.row(rows.source_index(i)))
    });

    write_matrix(c, mask, accum, t, replace_flag);
    Ok(())
}

/// `w<mask> ⊙= A(rows, col)`: one source column, selected rows.
///
/// # Errors
/// `DimensionMismatch` unless `size(w) == size(mask)` and
/// `size(w) == len(rows)`; `IndexOutOfBounds` for `col >= ncols(A)` or a row
/// index outside `A`.
pub fn extract_column<T, Acc, AM>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    a: &AM,
    rows: IndexList<'_>,
    col: usize,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    Acc: Accumulator<T>,
    AM: MatrixStorage<T>,
{
    check_vector_mask(w, mask, "extract: failed size(w) == size(mask) check")?;
    check_dimension(
        w.size(),
        rows.len(a.nrows()),
        "extract: failed size(w) == nindices(rows) check",
    )?;
    check_index(col, a.ncols())?;
    rows.validate(a.nrows())?;

    let t = (0..w.size())
        .filter_map(|pos| {
            a.row(rows.source_index(pos))
                .get(col)
                .map(|v| (pos, v.clone()))
        })
        .collect();

    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}

/// `w<mask> ⊙= A(row, cols)`: one source row, selected columns.
///
/// # Errors
/// `DimensionMismatch` unless `size(w) == size(mask)` and
/// `size(w) == len(cols)`; `IndexOutOfBounds` for `row >= nrows(A)` or a
/// column index outside `A`.
pub fn extract_row<T, Acc, AM>(
    w: &mut Vector<T>,
    mask: Option<&Vector<bool>>,
    accum: &Acc,
    a: &AM,
    row: usize,
    cols: IndexList<'_>,
    replace_flag: bool,
) -> Result<(), GraphError>
where
    T: Clone,
    Acc: Accumulator<T>,
    AM: MatrixStorage<T>,
{
    check_vector_mask(w, mask, "extract: failed size(w) == size(mask) check")?;
    check_dimension(
        w.size(),
        cols.len(a.ncols()),
        "extract: failed size(w) == nindices(cols) check",
    )?;
    check_index(row, a.nrows())?;
    cols.validate(a.ncols())?;

    let selector = ColumnSelector::new(cols);
    let t = select_row(selector.as_ref(), a.row(row));

    write_vector(w, mask, accum, t, replace_flag);
    Ok(())
}
