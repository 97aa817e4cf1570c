//! JSON-file-backed store
//!
//! One document per (schema, table) under `root/<schema>/<table>.json`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use trellis_core::{EdgeList, Table};

use crate::store::{
    merge_for_write, project_edges, ConflictPolicy, DestinationSpec, HierarchyStore, SourceSpec,
    StoreResult,
};

/// On-disk table document.
#[derive(Debug, Serialize, Deserialize)]
struct StoredTable {
    version: String,
    written_at: String,
    #[serde(flatten)]
    table: Table<String>,
}

/// Stores each table as a pretty-printed JSON document on the local
/// filesystem.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        JsonStore { root: root.into() }
    }

    fn table_path(&self, schema: &str, table: &str) -> PathBuf {
        self.root.join(schema).join(format!("{table}.json"))
    }

    fn load_table(&self, path: &Path) -> StoreResult<Option<Table<String>>> {
        if !path.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(path)?;
        let stored: StoredTable = serde_json::from_str(&text)?;
        Ok(Some(stored.table))
    }
}

impl HierarchyStore for JsonStore {
    fn read_edges(&self, spec: &SourceSpec) -> StoreResult<Option<EdgeList<String>>> {
        spec.validate()?;
        let path = self.table_path(&spec.schema, &spec.table);
        match self.load_table(&path)? {
            Some(table) => Ok(Some(project_edges(&table, spec)?)),
            None => {
                tracing::debug!(path = %path.display(), "no stored table at source path");
                Ok(None)
            }
        }
    }

    fn write_table(
        &mut self,
        table: &Table<String>,
        spec: &DestinationSpec,
        on_conflict: ConflictPolicy,
    ) -> StoreResult<()> {
        spec.validate()?;
        let path = self.table_path(&spec.schema, &spec.table);
        let existing = self.load_table(&path)?;
        let merged = merge_for_write(existing, table, spec, on_conflict)?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let stored = StoredTable {
            version: env!("CARGO_PKG_VERSION").to_string(),
            written_at: chrono::Utc::now().to_rfc3339(),
            table: merged,
        };
        fs::write(&path, serde_json::to_string_pretty(&stored)?)?;
        tracing::debug!(path = %path.display(), "table written");
        Ok(())
    }
}
