//! Error types for hierarchy construction and flattening

use thiserror::Error;

/// Result type alias using `HierarchyError`.
pub type HierarchyResult<T> = std::result::Result<T, HierarchyError>;

/// Errors raised while normalizing edge input, building paths, or
/// flattening them into rows.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum HierarchyError {
    /// Input was not a uniform collection of 2-element parent/child pairs.
    #[error("invalid source shape: expected rows of exactly 2 elements, found a row of {found}")]
    InvalidSourceShape { found: usize },

    /// Flattening was attempted on a hierarchy with no paths; the maximum
    /// path length is undefined for an empty set.
    #[error("cannot flatten an empty hierarchy")]
    EmptyHierarchy,

    /// The parent/child relation contains a directed cycle. Both the root
    /// ascent and the path descent fail fast rather than walking forever.
    #[error("cycle detected in the parent-child relation")]
    CycleDetected,
}
