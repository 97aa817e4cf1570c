//! Hierarchy builder facade
//!
//! Owns the edge source, the adjacency maps, and the lazily built
//! hierarchy. Rebuilds are destructive and all-or-nothing: the maps are
//! reset and reconstructed from the source, and a failed build leaves
//! the previously exposed state untouched.

use std::hash::Hash;

use crate::error::HierarchyResult;
use crate::flatten::flatten;
use crate::mapping::Adjacency;
use crate::paths::{build_hierarchy, Hierarchy};
use crate::source::EdgeList;
use crate::table::{render_table, Table, TableOptions};

#[derive(Debug, Clone)]
pub struct HierarchyBuilder<N: Eq + Hash> {
    source: Option<EdgeList<N>>,
    hierarchy: Option<Hierarchy<N>>,
}

impl<N: Clone + Eq + Hash> HierarchyBuilder<N> {
    pub fn new() -> Self {
        HierarchyBuilder {
            source: None,
            hierarchy: None,
        }
    }

    pub fn from_source(source: impl Into<EdgeList<N>>) -> Self {
        HierarchyBuilder {
            source: Some(source.into()),
            hierarchy: None,
        }
    }

    /// Replace the edge source. The current hierarchy is invalidated and
    /// rebuilt from scratch on next access.
    pub fn set_source(&mut self, source: impl Into<EdgeList<N>>) {
        self.source = Some(source.into());
        self.hierarchy = None;
    }

    /// Drop the built hierarchy. The next read rebuilds it from the
    /// current source.
    pub fn clear(&mut self) {
        self.hierarchy = None;
    }

    /// Rebuild the hierarchy from the current source: reset both
    /// adjacency maps, re-derive roots, and re-enumerate every path.
    /// With no source attached the result is an empty hierarchy.
    pub fn rebuild(&mut self) -> HierarchyResult<()> {
        let built = match &self.source {
            Some(edges) => {
                let adjacency = Adjacency::from_edges(edges);
                let hierarchy = build_hierarchy(&adjacency)?;
                tracing::info!(paths = hierarchy.len(), "hierarchy built");
                hierarchy
            }
            None => {
                tracing::warn!("no edge source attached; hierarchy is empty");
                Hierarchy::default()
            }
        };
        self.hierarchy = Some(built);
        Ok(())
    }

    /// The raw path set, built lazily on first access.
    pub fn paths(&mut self) -> HierarchyResult<&Hierarchy<N>> {
        if self.hierarchy.is_none() {
            self.rebuild()?;
        }
        // rebuild() always leaves Some on success
        Ok(self.hierarchy.get_or_insert_with(Hierarchy::default))
    }

    /// Fixed-width rows: paths padded with `empty_value`, optionally
    /// followed by the terminal-node primary-key column.
    pub fn rows(&mut self, empty_value: &N, has_primkey: bool) -> HierarchyResult<Vec<Vec<N>>> {
        let hierarchy = self.paths()?;
        flatten(hierarchy, empty_value, has_primkey)
    }

    /// Flattened rows with generated column labels.
    pub fn to_table(&mut self, options: &TableOptions<N>) -> HierarchyResult<Table<N>> {
        let hierarchy = self.paths()?;
        render_table(hierarchy, options)
    }
}
