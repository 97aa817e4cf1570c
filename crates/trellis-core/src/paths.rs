//! Root discovery and root-to-node path enumeration

use std::collections::HashSet;
use std::hash::Hash;

use crate::error::{HierarchyError, HierarchyResult};
use crate::mapping::Adjacency;

/// The set of all root-to-node paths derivable from an adjacency. Every
/// prefix of every maximal walk is a first-class member, so a chain
/// A → B → C contributes (A), (A,B), and (A,B,C). Duplicate sequences
/// collapse; no ordering is guaranteed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hierarchy<N: Eq + Hash> {
    paths: HashSet<Vec<N>>,
}

impl<N: Eq + Hash> Default for Hierarchy<N> {
    fn default() -> Self {
        Hierarchy {
            paths: HashSet::new(),
        }
    }
}

impl<N: Eq + Hash> Hierarchy<N> {
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &[N]) -> bool {
        self.paths.contains(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vec<N>> {
        self.paths.iter()
    }

    /// Length of the longest path, or `None` when there are no paths.
    pub fn max_length(&self) -> Option<usize> {
        self.paths.iter().map(Vec::len).max()
    }
}

impl<N: Eq + Hash> FromIterator<Vec<N>> for Hierarchy<N> {
    fn from_iter<T: IntoIterator<Item = Vec<N>>>(iter: T) -> Self {
        Hierarchy {
            paths: iter.into_iter().collect(),
        }
    }
}

impl<N: Eq + Hash> IntoIterator for Hierarchy<N> {
    type Item = Vec<N>;
    type IntoIter = std::collections::hash_set::IntoIter<Vec<N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.into_iter()
    }
}

/// Walk upward from `node` until a node with no recorded parent is
/// reached. When a node has several parents the first-inserted one is
/// followed, which keeps the result reproducible for a given edge order.
///
/// A node revisited during the ascent means the child→parent relation is
/// cyclic; that fails fast instead of walking forever.
pub fn find_root<'a, N: Clone + Eq + Hash>(
    adjacency: &'a Adjacency<N>,
    node: &'a N,
) -> HierarchyResult<&'a N> {
    let mut current = node;
    let mut seen: HashSet<&N> = HashSet::new();
    seen.insert(current);
    while let Some(parents) = adjacency.parents(current) {
        match parents.first() {
            Some(parent) => {
                if !seen.insert(parent) {
                    return Err(HierarchyError::CycleDetected);
                }
                current = parent;
            }
            None => break,
        }
    }
    Ok(current)
}

/// Deduplicated roots for every node recorded in the parent position,
/// in first-seen parent order.
pub fn find_roots<N: Clone + Eq + Hash>(adjacency: &Adjacency<N>) -> HierarchyResult<Vec<N>> {
    let mut roots = Vec::new();
    for node in adjacency.parent_nodes() {
        let root = find_root(adjacency, node)?;
        if !roots.contains(root) {
            roots.push(root.clone());
        }
    }
    Ok(roots)
}

/// Enumerate every path from `root` to every node reachable through the
/// parent map, recording every prefix along the way.
///
/// The descent uses an explicit work stack rather than call-stack
/// recursion, so path depth is bounded by the input, not by stack size.
/// Each stacked frame owns an independent copy of its prefix; sibling
/// branches never observe each other's extensions. A node that already
/// occurs on its own prefix is a cycle and fails the whole enumeration.
pub fn enumerate_paths<N: Clone + Eq + Hash>(
    adjacency: &Adjacency<N>,
    root: &N,
    out: &mut HashSet<Vec<N>>,
) -> HierarchyResult<()> {
    let mut stack: Vec<(Vec<N>, N)> = vec![(Vec::new(), root.clone())];

    while let Some((prefix, node)) = stack.pop() {
        if prefix.contains(&node) {
            return Err(HierarchyError::CycleDetected);
        }
        let mut path = prefix;
        path.push(node.clone());

        if let Some(children) = adjacency.children(&node) {
            // Reversed so first-inserted children are walked first.
            for child in children.iter().rev() {
                stack.push((path.clone(), child.clone()));
            }
        }
        out.insert(path);
    }
    Ok(())
}

/// Build the full hierarchy: discover every root, then enumerate every
/// path below each of them.
pub fn build_hierarchy<N: Clone + Eq + Hash>(
    adjacency: &Adjacency<N>,
) -> HierarchyResult<Hierarchy<N>> {
    let mut paths = HashSet::new();
    for root in find_roots(adjacency)? {
        enumerate_paths(adjacency, &root, &mut paths)?;
    }
    Ok(Hierarchy { paths })
}
