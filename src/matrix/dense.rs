//! Dense interop on top of Faer.
//!
//! Converts between [`Matrix`] and `faer::Mat<T>` so sparse results can be
//! checked against, or seeded from, dense linear algebra.

use crate::core::sequence::SparseSequence;
use crate::matrix::sparse::Matrix;
use faer::Mat;
use faer::traits::ComplexField;

impl<T: ComplexField + Copy + PartialEq> Matrix<T> {
    /// Build from a faer matrix, storing every element that differs from `implied_zero`.
    pub fn from_faer(dense: &Mat<T>, implied_zero: T) -> Self {
        let rows = (0..dense.nrows())
            .map(|i| {
                (0..dense.ncols())
                    .map(|j| (j, dense[(i, j)]))
                    .filter(|&(_, v)| v != implied_zero)
                    .collect::<SparseSequence<T>>()
            })
            .collect();
        Matrix::from_rows(dense.nrows(), dense.ncols(), rows)
    }

    /// Dense copy with `fill` in every empty position.
    pub fn to_faer(&self, fill: T) -> Mat<T> {
        let mut dense = Mat::from_fn(self.nrows(), self.ncols(), |_, _| fill);
        for (i, j, v) in self.iter() {
            dense[(i, j)] = *v;
        }
        dense
    }
}
