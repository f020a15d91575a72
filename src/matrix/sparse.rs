//! Sparse matrix stored as a list of rows.
//!
//! Each row is an independent [`SparseSequence`] ordered by column. A row
//! with no stored entries is an empty sequence, so the matrix is
//! conceptually an ordered map from row index to sparse row.

use crate::algebra::MaskValue;
use crate::core::sequence::{is_strictly_ascending, SparseSequence, SparseView};
use crate::core::traits::MatrixStorage;
use crate::error::GraphError;
use crate::utils::check::check_index;

/// An `nrows × ncols` sparse matrix with row-wise storage.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    nrows: usize,
    ncols: usize,
    rows: Vec<SparseSequence<T>>,
}

impl<T> Matrix<T> {
    /// An empty matrix of the given shape.
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self {
            nrows,
            ncols,
            rows: (0..nrows).map(|_| SparseSequence::new()).collect(),
        }
    }

    /// Assemble from already ordered rows.
    pub(crate) fn from_rows(nrows: usize, ncols: usize, rows: Vec<SparseSequence<T>>) -> Self {
        debug_assert_eq!(rows.len(), nrows);
        Self { nrows, ncols, rows }
    }

    /// Build from `(row, col, value)` triples in any order.
    ///
    /// A repeated position keeps the last value.
    pub fn from_triples<I>(nrows: usize, ncols: usize, triples: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize, T)>,
    {
        let mut buckets: Vec<Vec<(usize, T)>> = (0..nrows).map(|_| Vec::new()).collect();
        for (r, c, v) in triples {
            check_index(r, nrows)?;
            check_index(c, ncols)?;
            buckets[r].push((c, v));
        }
        let rows: Vec<SparseSequence<T>> =
            buckets.into_iter().map(SparseSequence::from_unsorted).collect();
        Ok(Self { nrows, ncols, rows })
    }

    /// Build from dense rows, storing every element that differs from `implied_zero`.
    ///
    /// All rows must have the same length.
    pub fn from_dense_rows(dense: &[Vec<T>], implied_zero: T) -> Result<Self, GraphError>
    where
        T: Clone + PartialEq,
    {
        let nrows = dense.len();
        let ncols = dense.first().map_or(0, Vec::len);
        let mut rows: Vec<SparseSequence<T>> = Vec::with_capacity(nrows);
        for (r, row) in dense.iter().enumerate() {
            if row.len() != ncols {
                return Err(GraphError::DimensionMismatch(format!(
                    "from_dense_rows: row {} has {} columns, expected {}",
                    r,
                    row.len(),
                    ncols
                )));
            }
            rows.push(
                row.iter()
                    .enumerate()
                    .filter(|(_, v)| **v != implied_zero)
                    .map(|(c, v)| (c, v.clone()))
                    .collect(),
            );
        }
        Ok(Self { nrows, ncols, rows })
    }

    pub fn nrows(&self) -> usize {
        self.nrows
    }

    pub fn ncols(&self) -> usize {
        self.ncols
    }

    pub fn nvals(&self) -> usize {
        self.rows.iter().map(SparseSequence::len).sum()
    }

    /// Stored entries of row `i`. Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> SparseView<'_, T> {
        self.rows[i].view()
    }

    pub fn set_element(&mut self, row: usize, col: usize, value: T) -> Result<(), GraphError> {
        check_index(row, self.nrows)?;
        check_index(col, self.ncols)?;
        self.rows[row].set(col, value);
        Ok(())
    }

    /// Stored value at `(row, col)`, or `NoValue` when the position is empty.
    pub fn extract_element(&self, row: usize, col: usize) -> Result<&T, GraphError> {
        check_index(row, self.nrows)?;
        check_index(col, self.ncols)?;
        self.rows[row].get(col).ok_or(GraphError::NoValue)
    }

    pub fn remove_element(&mut self, row: usize, col: usize) -> Result<Option<T>, GraphError> {
        check_index(row, self.nrows)?;
        check_index(col, self.ncols)?;
        Ok(self.rows[row].remove(col))
    }

    pub fn clear(&mut self) {
        self.rows.iter_mut().for_each(SparseSequence::clear);
    }

    /// Stored entries as `(row, col, &value)`, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(r, row)| row.iter().map(move |(c, v)| (r, c, v)))
    }

    /// Boolean mask with `true` wherever a truthy entry is stored.
    pub fn to_mask(&self) -> Matrix<bool>
    where
        T: MaskValue,
    {
        let rows: Vec<SparseSequence<bool>> = self
            .rows
            .iter()
            .map(|row| {
                row.iter()
                    .filter(|(_, v)| v.is_truthy())
                    .map(|(c, _)| (c, true))
                    .collect::<SparseSequence<bool>>()
            })
            .collect();
        Matrix { nrows: self.nrows, ncols: self.ncols, rows }
    }

    /// Replace every row in one move. Used at the commit boundary of a kernel.
    pub(crate) fn commit(&mut self, rows: Vec<SparseSequence<T>>) {
        debug_assert_eq!(rows.len(), self.nrows);
        debug_assert!(rows.iter().all(|row| {
            is_strictly_ascending(row.indices())
                && row.indices().last().is_none_or(|&c| c < self.ncols)
        }));
        self.rows = rows;
    }
}

impl<T> MatrixStorage<T> for Matrix<T> {
    fn nrows(&self) -> usize {
        self.nrows
    }

    fn ncols(&self) -> usize {
        self.ncols
    }

    fn nvals(&self) -> usize {
        Matrix::nvals(self)
    }

    fn row(&self, i: usize) -> SparseView<'_, T> {
        self.rows.get(i).map_or_else(SparseView::empty, SparseSequence::view)
    }
}
