//! Core storage traits for sparseblas.
//!
//! Kernels never touch a container's internals; they read through these
//! interfaces, which hand out ascending, index-unique [`SparseView`]s.

use crate::core::sequence::SparseView;

/// Read access to a sparse vector.
pub trait VectorStorage<T> {
    /// Logical length.
    fn size(&self) -> usize;
    /// Number of stored entries.
    fn nvals(&self) -> usize;
    /// Stored entries, ascending by index.
    fn contents(&self) -> SparseView<'_, T>;
}

/// Row-wise read access to a sparse matrix.
pub trait MatrixStorage<T> {
    /// Number of rows.
    fn nrows(&self) -> usize;
    /// Number of columns.
    fn ncols(&self) -> usize;
    /// Number of stored entries.
    fn nvals(&self) -> usize;
    /// Stored entries of row `i`, ascending by column. Empty for an absent row.
    fn row(&self, i: usize) -> SparseView<'_, T>;
}
