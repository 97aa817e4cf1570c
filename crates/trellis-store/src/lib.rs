//! Trellis Store — persistence boundary for hierarchy data

pub mod config;
pub mod json;
pub mod memory;
pub mod store;


pub use config::{Config, StoreConfig};
pub use json::JsonStore;
pub use memory::MemoryStore;
pub use store::{
    ConflictPolicy, DestinationSpec, HierarchyStore, SourceSpec, StoreError, StoreResult,
};
