//! Flattening variable-length paths into fixed-width rows

use std::hash::Hash;

use crate::error::{HierarchyError, HierarchyResult};
use crate::paths::Hierarchy;

/// Flatten every path to the width of the longest one.
///
/// Each path is right-padded with clones of `empty_value` up to the
/// maximum path length; when `has_primkey` is set, one extra trailing
/// cell repeats the path's terminal (pre-padding) node as a primary-key
/// surrogate. Every emitted row therefore has identical width:
/// `max_length` plus one if `has_primkey`.
pub fn flatten<N: Clone + Eq + Hash>(
    hierarchy: &Hierarchy<N>,
    empty_value: &N,
    has_primkey: bool,
) -> HierarchyResult<Vec<Vec<N>>> {
    let max_length = hierarchy
        .max_length()
        .ok_or(HierarchyError::EmptyHierarchy)?;

    let mut rows = Vec::with_capacity(hierarchy.len());
    for path in hierarchy.iter() {
        let width = max_length + usize::from(has_primkey);
        let mut row: Vec<N> = Vec::with_capacity(width);
        row.extend(path.iter().cloned());
        row.resize(max_length, empty_value.clone());
        if has_primkey {
            if let Some(terminal) = path.last() {
                row.push(terminal.clone());
            }
        }
        rows.push(row);
    }
    Ok(rows)
}
