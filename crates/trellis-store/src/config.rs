//! TOML configuration for store selection and source/destination specs

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::json::JsonStore;
use crate::memory::MemoryStore;
use crate::store::{DestinationSpec, HierarchyStore, SourceSpec, StoreResult};

/// Which backend the config selects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StoreConfig {
    /// Transient in-memory backend.
    Memory,
    /// JSON documents under `root`.
    Json { root: String },
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::Memory
    }
}

/// Full configuration file:
///
/// ```toml
/// [store]
/// kind = "json"
/// root = "./data"
///
/// [source]
/// schema = "hr"
/// table = "org_edges"
/// parent = "MANAGER"
/// child = "EMPLOYEE"
/// # filter = "REGION = 'west'"   # optional row filter
///
/// [destination]
/// schema = "hr"
/// table = "org_levels"
/// level = "LVL"
/// primkey = "PK"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    pub source: SourceSpec,
    pub destination: DestinationSpec,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let text = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&text)?;
        config.source.validate()?;
        config.destination.validate()?;
        tracing::debug!(path = %path.as_ref().display(), "configuration loaded");
        Ok(config)
    }

    /// Instantiate the configured backend.
    pub fn open_store(&self) -> Box<dyn HierarchyStore> {
        match &self.store {
            StoreConfig::Memory => Box::new(MemoryStore::new()),
            StoreConfig::Json { root } => Box::new(JsonStore::new(root)),
        }
    }
}
