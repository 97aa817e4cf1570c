//! Parent/child adjacency maps built from a normalized edge list

use std::collections::HashMap;
use std::hash::Hash;

use crate::source::EdgeList;

/// Bidirectional adjacency built from (parent, child) pairs.
///
/// Child and parent lists are deduplicated and keep first-insertion
/// order, so every downstream walk over them is reproducible regardless
/// of hash-map iteration order.
#[derive(Debug, Clone)]
pub struct Adjacency<N> {
    parent_map: HashMap<N, Vec<N>>,
    child_map: HashMap<N, Vec<N>>,
    /// Keys of `parent_map` in first-seen order.
    parent_order: Vec<N>,
}

impl<N> Default for Adjacency<N> {
    fn default() -> Self {
        Adjacency {
            parent_map: HashMap::new(),
            child_map: HashMap::new(),
            parent_order: Vec::new(),
        }
    }
}

impl<N: Clone + Eq + Hash> Adjacency<N> {
    /// Build both maps from scratch. A self-referencing pair registers
    /// the node as a parent with no children and contributes no edge to
    /// either map.
    pub fn from_edges(edges: &EdgeList<N>) -> Self {
        let mut adjacency = Adjacency::default();
        for (parent, child) in edges.iter() {
            adjacency.ensure_parent(parent);
            if parent != child {
                if let Some(children) = adjacency.parent_map.get_mut(parent) {
                    push_unique(children, child);
                }
                push_unique(
                    adjacency.child_map.entry(child.clone()).or_default(),
                    parent,
                );
            }
        }
        adjacency
    }

    fn ensure_parent(&mut self, node: &N) {
        if !self.parent_map.contains_key(node) {
            self.parent_map.insert(node.clone(), Vec::new());
            self.parent_order.push(node.clone());
        }
    }

    /// Direct children of `node`, in first-insertion order. `None` when
    /// the node was never recorded as a parent.
    pub fn children(&self, node: &N) -> Option<&[N]> {
        self.parent_map.get(node).map(Vec::as_slice)
    }

    /// Direct parents of `node`, in first-insertion order. A node with no
    /// entry here is a root candidate.
    pub fn parents(&self, node: &N) -> Option<&[N]> {
        self.child_map.get(node).map(Vec::as_slice)
    }

    /// All nodes ever recorded in the parent position, in first-seen order.
    pub fn parent_nodes(&self) -> impl Iterator<Item = &N> {
        self.parent_order.iter()
    }
}

fn push_unique<N: PartialEq + Clone>(list: &mut Vec<N>, value: &N) {
    if !list.contains(value) {
        list.push(value.clone());
    }
}
