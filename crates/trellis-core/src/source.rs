//! Edge input normalization
//!
//! Every accepted external shape — a sequence of pairs, row-shaped nested
//! sequences, or a two-column table — is converted into one canonical
//! [`EdgeList`] before any mapping is built. Downstream stages only ever
//! see this one type.

use crate::error::{HierarchyError, HierarchyResult};
use crate::table::Table;

/// The canonical normalized edge input: an ordered list of
/// (parent, child) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EdgeList<N> {
    edges: Vec<(N, N)>,
}

impl<N> EdgeList<N> {
    pub fn new(edges: Vec<(N, N)>) -> Self {
        EdgeList { edges }
    }

    /// Normalize row-shaped input. Each row must contain exactly two
    /// cells; anything else fails before any edge is accepted.
    pub fn from_rows(rows: Vec<Vec<N>>) -> HierarchyResult<Self> {
        // Collected all-or-nothing: a malformed row fails the whole
        // conversion before any edge list exists.
        let edges = rows
            .into_iter()
            .map(|row| {
                let found = row.len();
                <[N; 2]>::try_from(row)
                    .map(|[parent, child]| (parent, child))
                    .map_err(|_| HierarchyError::InvalidSourceShape { found })
            })
            .collect::<HierarchyResult<Vec<_>>>()?;
        Ok(EdgeList { edges })
    }

    /// Normalize a tabular source. The table must have exactly two
    /// columns, read as (parent, child) left to right.
    pub fn from_table(table: Table<N>) -> HierarchyResult<Self> {
        if table.columns.len() != 2 {
            return Err(HierarchyError::InvalidSourceShape {
                found: table.columns.len(),
            });
        }
        Self::from_rows(table.rows)
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Iterate over (parent, child) pairs in input order.
    pub fn iter(&self) -> impl Iterator<Item = &(N, N)> {
        self.edges.iter()
    }
}

impl<N> From<Vec<(N, N)>> for EdgeList<N> {
    fn from(edges: Vec<(N, N)>) -> Self {
        EdgeList::new(edges)
    }
}

impl<N> IntoIterator for EdgeList<N> {
    type Item = (N, N);
    type IntoIter = std::vec::IntoIter<(N, N)>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.into_iter()
    }
}

impl<N> FromIterator<(N, N)> for EdgeList<N> {
    fn from_iter<T: IntoIterator<Item = (N, N)>>(iter: T) -> Self {
        EdgeList {
            edges: iter.into_iter().collect(),
        }
    }
}
