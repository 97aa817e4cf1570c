//! In-memory store, the reference substitute for any durable backend

use std::collections::HashMap;

use trellis_core::{EdgeList, Table};

use crate::store::{
    merge_for_write, project_edges, ConflictPolicy, DestinationSpec, HierarchyStore, SourceSpec,
    StoreResult,
};

/// Tables held in a map keyed by (schema, table). Behaves identically to
/// the durable stores as far as the core pipeline can observe.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    tables: HashMap<(String, String), Table<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }

    /// Seed a table directly, bypassing conflict handling. Intended for
    /// preparing sources.
    pub fn insert_table(
        &mut self,
        schema: impl Into<String>,
        table_name: impl Into<String>,
        table: Table<String>,
    ) {
        self.tables
            .insert((schema.into(), table_name.into()), table);
    }

    pub fn get_table(&self, schema: &str, table: &str) -> Option<&Table<String>> {
        self.tables.get(&(schema.to_string(), table.to_string()))
    }
}

impl HierarchyStore for MemoryStore {
    fn read_edges(&self, spec: &SourceSpec) -> StoreResult<Option<EdgeList<String>>> {
        spec.validate()?;
        match self.get_table(&spec.schema, &spec.table) {
            Some(table) => Ok(Some(project_edges(table, spec)?)),
            None => Ok(None),
        }
    }

    fn write_table(
        &mut self,
        table: &Table<String>,
        spec: &DestinationSpec,
        on_conflict: ConflictPolicy,
    ) -> StoreResult<()> {
        spec.validate()?;
        let key = (spec.schema.clone(), spec.table.clone());
        let existing = self.tables.get(&key).cloned();
        let merged = merge_for_write(existing, table, spec, on_conflict)?;
        tracing::debug!(
            schema = %spec.schema,
            table = %spec.table,
            rows = merged.row_count(),
            "table stored in memory"
        );
        self.tables.insert(key, merged);
        Ok(())
    }
}
