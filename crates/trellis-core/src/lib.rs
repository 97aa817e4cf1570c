//! Trellis Core — parent/child edge expansion into root-to-leaf paths
//! and fixed-width row flattening

pub mod builder;
pub mod error;
pub mod flatten;
pub mod mapping;
pub mod paths;
pub mod source;
pub mod table;


pub use builder::HierarchyBuilder;
pub use error::{HierarchyError, HierarchyResult};
pub use flatten::flatten;
pub use mapping::Adjacency;
pub use paths::{build_hierarchy, enumerate_paths, find_root, find_roots, Hierarchy};
pub use source::EdgeList;
pub use table::{render_table, Table, TableOptions, DEFAULT_LEVEL_LABEL, DEFAULT_PRIMKEY_LABEL};
