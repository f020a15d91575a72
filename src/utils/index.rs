//! Index lists used to select rows, columns or elements.

use crate::error::GraphError;
use crate::utils::check::check_index;

/// An ordered selection of source indices.
///
/// `Indices` may repeat or permute indices; output position `i` reads source
/// position `indices[i]`. `All` is the identity selection `[0, n)` for a source
/// dimension `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexList<'a> {
    All,
    Indices(&'a [usize]),
}

impl<'a> IndexList<'a> {
    /// Number of output positions when selecting from a dimension of `source_dim`.
    pub fn len(&self, source_dim: usize) -> usize {
        match self {
            IndexList::All => source_dim,
            IndexList::Indices(ix) => ix.len(),
        }
    }

    /// Source index read by output position `pos`.
    pub fn source_index(&self, pos: usize) -> usize {
        match self {
            IndexList::All => pos,
            IndexList::Indices(ix) => ix[pos],
        }
    }

    /// Reject any index not below `source_dim`.
    pub fn validate(&self, source_dim: usize) -> Result<(), GraphError> {
        match self {
            IndexList::All => Ok(()),
            IndexList::Indices(ix) => ix.iter().try_for_each(|&i| check_index(i, source_dim)),
        }
    }

    /// Whether the selection is the identity over `source_dim`.
    pub fn is_identity(&self, source_dim: usize) -> bool {
        match self {
            IndexList::All => true,
            IndexList::Indices(ix) => {
                ix.len() == source_dim && ix.iter().enumerate().all(|(p, &i)| p == i)
            }
        }
    }
}

impl<'a> From<&'a [usize]> for IndexList<'a> {
    fn from(ix: &'a [usize]) -> Self {
        IndexList::Indices(ix)
    }
}

impl<'a> From<&'a Vec<usize>> for IndexList<'a> {
    fn from(ix: &'a Vec<usize>) -> Self {
        IndexList::Indices(ix.as_slice())
    }
}

impl<'a, const N: usize> From<&'a [usize; N]> for IndexList<'a> {
    fn from(ix: &'a [usize; N]) -> Self {
        IndexList::Indices(ix.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_identity() {
        let all = IndexList::All;
        assert_eq!(all.len(4), 4);
        assert_eq!(all.source_index(3), 3);
        assert!(all.is_identity(4));
        assert!(all.validate(0).is_ok());
    }

    #[test]
    fn explicit_list_with_repeats() {
        let ix = [2usize, 0, 2];
        let list = IndexList::from(&ix);
        assert_eq!(list.len(10), 3);
        assert_eq!(list.source_index(2), 2);
        assert!(!list.is_identity(3));
        assert!(IndexList::from(&[0usize, 1, 2]).is_identity(3));
    }

    #[test]
    fn validate_bounds() {
        let list = IndexList::from(&[0usize, 3]);
        assert_eq!(
            list.validate(3),
            Err(GraphError::IndexOutOfBounds { index: 3, bound: 3 })
        );
        assert!(list.validate(4).is_ok());
    }
}
