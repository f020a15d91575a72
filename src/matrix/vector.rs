//! Sparse vector: a logical length plus one sparse sequence.

use crate::algebra::MaskValue;
use crate::core::sequence::{is_strictly_ascending, SparseSequence, SparseView};
use crate::core::traits::VectorStorage;
use crate::error::GraphError;
use crate::utils::check::check_index;

/// A length-`size` sparse vector. Only stored entries are materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T> {
    size: usize,
    contents: SparseSequence<T>,
}

impl<T> Vector<T> {
    /// An empty vector of the given length.
    pub fn new(size: usize) -> Self {
        Self { size, contents: SparseSequence::new() }
    }

    /// Build from `(index, value)` pairs in any order; a repeated index keeps the last value.
    pub fn from_pairs<I>(size: usize, pairs: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let entries: Vec<(usize, T)> = pairs.into_iter().collect();
        for &(i, _) in &entries {
            check_index(i, size)?;
        }
        Ok(Self { size, contents: SparseSequence::from_unsorted(entries) })
    }

    /// Build from a dense slice, storing every element that differs from `implied_zero`.
    pub fn from_dense(dense: &[T], implied_zero: T) -> Self
    where
        T: Clone + PartialEq,
    {
        let contents = dense
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != implied_zero)
            .map(|(i, v)| (i, v.clone()))
            .collect();
        Self { size: dense.len(), contents }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn nvals(&self) -> usize {
        self.contents.len()
    }

    pub fn contents(&self) -> SparseView<'_, T> {
        self.contents.view()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.contents.iter()
    }

    pub fn set_element(&mut self, index: usize, value: T) -> Result<(), GraphError> {
        check_index(index, self.size)?;
        self.contents.set(index, value);
        Ok(())
    }

    /// Stored value at `index`, or `NoValue` when the position is empty.
    pub fn extract_element(&self, index: usize) -> Result<&T, GraphError> {
        check_index(index, self.size)?;
        self.contents.get(index).ok_or(GraphError::NoValue)
    }

    pub fn remove_element(&mut self, index: usize) -> Result<Option<T>, GraphError> {
        check_index(index, self.size)?;
        Ok(self.contents.remove(index))
    }

    pub fn has_element(&self, index: usize) -> bool {
        self.contents.get(index).is_some()
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    /// Dense copy with `fill` in every empty position.
    pub fn to_dense(&self, fill: T) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = vec![fill; self.size];
        for (i, v) in self.contents.iter() {
            out[i] = v.clone();
        }
        out
    }

    /// Boolean mask with `true` wherever a truthy entry is stored.
    pub fn to_mask(&self) -> Vector<bool>
    where
        T: MaskValue,
    {
        let contents = self
            .contents
            .iter()
            .filter(|(_, v)| v.is_truthy())
            .map(|(i, _)| (i, true))
            .collect();
        Vector { size: self.size, contents }
    }

    /// Replace the whole contents in one move. Used at the commit boundary of a kernel.
    pub(crate) fn commit(&mut self, contents: SparseSequence<T>) {
        debug_assert!(is_strictly_ascending(contents.indices()));
        debug_assert!(contents.indices().last().is_none_or(|&i| i < self.size));
        self.contents = contents;
    }
}

impl<T> VectorStorage<T> for Vector<T> {
    fn size(&self) -> usize {
        self.size
    }

    fn nvals(&self) -> usize {
        self.contents.len()
    }

    fn contents(&self) -> SparseView<'_, T> {
        self.contents.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dense_round_trip_drops_zeros() {
        let v = Vector::from_dense(&[0.0, 3.0, 0.0, 4.0], 0.0);
        assert_eq!(v.size(), 4);
        assert_eq!(v.nvals(), 2);
        assert_eq!(v.to_dense(0.0), vec![0.0, 3.0, 0.0, 4.0]);
    }

    #[test]
    fn element_access() {
        let mut v = Vector::new(3);
        v.set_element(2, 7).unwrap();
        assert_eq!(v.extract_element(2), Ok(&7));
        assert_eq!(v.extract_element(1), Err(GraphError::NoValue));
        assert_eq!(
            v.set_element(3, 1),
            Err(GraphError::IndexOutOfBounds { index: 3, bound: 3 })
        );
        assert_eq!(v.remove_element(2), Ok(Some(7)));
        assert_eq!(v.nvals(), 0);
    }

    #[test]
    fn mask_skips_falsy_entries() {
        let v = Vector::from_pairs(4, vec![(0, 1), (1, 0), (3, 5)]).unwrap();
        let m = v.to_mask();
        assert_eq!(m.nvals(), 2);
        assert!(m.has_element(0));
        assert!(!m.has_element(1));
        assert!(m.has_element(3));
    }

    #[test]
    fn from_pairs_rejects_out_of_range() {
        let err = Vector::from_pairs(2, vec![(2, 1.0)]).unwrap_err();
        assert_eq!(err, GraphError::IndexOutOfBounds { index: 2, bound: 2 });
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn commit_rejects_index_past_size() {
        let mut v: Vector<i32> = Vector::new(4);
        v.commit([(1, 1), (7, 2)].into_iter().collect());
    }
}
