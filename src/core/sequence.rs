//! Sparse sequences: ordered `(index, value)` pairs in struct-of-arrays form.
//!
//! A [`SparseSequence`] is the unit every kernel produces: one matrix row, the
//! contents of a vector, or an intermediate result. Indices are strictly
//! ascending and unique; producers append in order and the invariant is
//! asserted in debug builds.

use std::fmt;

/// Owned sparse sequence backed by parallel index/value buffers.
#[derive(Clone, PartialEq)]
pub struct SparseSequence<T> {
    indices: Vec<usize>,
    values: Vec<T>,
}

impl<T> Default for SparseSequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SparseSequence<T> {
    pub fn new() -> Self {
        Self { indices: Vec::new(), values: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
        }
    }

    /// Build from entries in arbitrary order.
    ///
    /// Entries are stably sorted by index; when an index repeats the last
    /// occurrence wins.
    pub fn from_unsorted(mut entries: Vec<(usize, T)>) -> Self {
        entries.sort_by_key(|&(i, _)| i);
        let mut seq = Self::with_capacity(entries.len());
        for (i, v) in entries {
            if seq.indices.last() == Some(&i) {
                if let Some(last) = seq.values.last_mut() {
                    *last = v;
                }
            } else {
                seq.push(i, v);
            }
        }
        seq
    }

    /// Append an entry. `index` must exceed every index already stored.
    pub fn push(&mut self, index: usize, value: T) {
        debug_assert!(
            self.indices.last().is_none_or(|&last| last < index),
            "sparse sequence indices must be strictly ascending (got {} after {:?})",
            index,
            self.indices.last()
        );
        self.indices.push(index);
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
        self.values.clear();
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn view(&self) -> SparseView<'_, T> {
        SparseView { indices: &self.indices, values: &self.values }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.view().get(index)
    }

    /// Insert or overwrite, keeping the order. Returns the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Option<T> {
        match self.indices.binary_search(&index) {
            Ok(pos) => Some(std::mem::replace(&mut self.values[pos], value)),
            Err(pos) => {
                self.indices.insert(pos, index);
                self.values.insert(pos, value);
                None
            }
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<T> {
        let pos = self.indices.binary_search(&index).ok()?;
        self.indices.remove(pos);
        Some(self.values.remove(pos))
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.indices.iter().copied().zip(self.values.iter())
    }
}

impl<T> FromIterator<(usize, T)> for SparseSequence<T> {
    /// Collects entries that are already in ascending index order.
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(iter: I) -> Self {
        let mut seq = Self::new();
        for (i, v) in iter {
            seq.push(i, v);
        }
        seq
    }
}

impl<T> IntoIterator for SparseSequence<T> {
    type Item = (usize, T);
    type IntoIter = std::iter::Zip<std::vec::IntoIter<usize>, std::vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.into_iter().zip(self.values)
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Borrowed, read-only view of a sparse sequence.
pub struct SparseView<'a, T> {
    indices: &'a [usize],
    values: &'a [T],
}

impl<'a, T> Clone for SparseView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SparseView<'a, T> {}

impl<'a, T> SparseView<'a, T> {
    /// A view with no entries.
    pub fn empty() -> Self {
        Self { indices: &[], values: &[] }
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &'a [usize] {
        self.indices
    }

    pub fn values(&self) -> &'a [T] {
        self.values
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        let values = self.values;
        self.indices.binary_search(&index).ok().map(|pos| &values[pos])
    }

    pub fn iter(self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        self.indices.iter().copied().zip(self.values.iter())
    }

    pub fn to_sequence(&self) -> SparseSequence<T>
    where
        T: Clone,
    {
        SparseSequence {
            indices: self.indices.to_vec(),
            values: self.values.to_vec(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SparseView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Whether `indices` is strictly ascending (and therefore index-unique).
pub fn is_strictly_ascending(indices: &[usize]) -> bool {
    indices.windows(2).all(|w| w[0] < w[1])
}
