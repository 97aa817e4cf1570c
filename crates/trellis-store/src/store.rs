//! Store trait, source/destination specs, and conflict policy

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use trellis_core::{EdgeList, Table};

/// Result type alias using `StoreError`.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Errors raised at the persistence boundary. I/O and serialization
/// failures pass through unmodified.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StoreError {
    /// A spec field that must be non-empty was empty.
    #[error("missing required spec field: {0}")]
    MissingField(&'static str),

    /// Write refused because the destination table already exists and the
    /// conflict policy is `Fail`.
    #[error("table {schema}.{table} already exists")]
    TableExists { schema: String, table: String },

    /// A named source column is not present in the stored table.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// A source filter that is not of the form `COLUMN = value`.
    #[error("invalid filter expression: {0} (expected COLUMN = value)")]
    InvalidFilter(String),

    /// Append refused because the stored table's columns differ from the
    /// incoming table's.
    #[error("column mismatch on append: stored {stored:?}, incoming {incoming:?}")]
    ColumnMismatch {
        stored: Vec<String>,
        incoming: Vec<String>,
    },

    /// Unrecognized conflict policy name.
    #[error("unknown conflict policy: {0} (expected fail, append, or replace)")]
    UnknownPolicy(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Where the edge list comes from: a two-column slice of a stored table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSpec {
    pub schema: String,
    pub table: String,
    /// Column holding the parent identifier.
    pub parent: String,
    /// Column holding the child identifier.
    pub child: String,
    /// Optional row filter of the form `COLUMN = value`, applied while
    /// projecting edges. Single quotes around the value are stripped.
    #[serde(default)]
    pub filter: Option<String>,
}

impl SourceSpec {
    pub fn validate(&self) -> StoreResult<()> {
        for (name, value) in [
            ("source.schema", &self.schema),
            ("source.table", &self.table),
            ("source.parent", &self.parent),
            ("source.child", &self.child),
        ] {
            if value.is_empty() {
                return Err(StoreError::MissingField(name));
            }
        }
        Ok(())
    }
}

fn default_level_label() -> String {
    trellis_core::DEFAULT_LEVEL_LABEL.to_string()
}

fn default_primkey_label() -> String {
    trellis_core::DEFAULT_PRIMKEY_LABEL.to_string()
}

/// Where the rendered table goes, plus its column labeling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DestinationSpec {
    pub schema: String,
    pub table: String,
    /// Level column label prefix.
    #[serde(default = "default_level_label")]
    pub level: String,
    /// Primary-key column label.
    #[serde(default = "default_primkey_label")]
    pub primkey: String,
}

impl DestinationSpec {
    pub fn validate(&self) -> StoreResult<()> {
        for (name, value) in [
            ("destination.schema", &self.schema),
            ("destination.table", &self.table),
        ] {
            if value.is_empty() {
                return Err(StoreError::MissingField(name));
            }
        }
        Ok(())
    }
}

/// What to do when the destination table already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Refuse the write.
    #[default]
    Fail,
    /// Append rows to the existing table; columns must match.
    Append,
    /// Drop the existing table and write anew.
    Replace,
}

impl FromStr for ConflictPolicy {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fail" => Ok(ConflictPolicy::Fail),
            "append" => Ok(ConflictPolicy::Append),
            "replace" => Ok(ConflictPolicy::Replace),
            other => Err(StoreError::UnknownPolicy(other.to_string())),
        }
    }
}

/// Storage adapter for hierarchy data.
///
/// The core pipeline only touches the store through these two calls, so
/// any backend — in-memory, file-backed, or a real database — slots in
/// behind the same trait.
pub trait HierarchyStore {
    /// Read the (parent, child) edge list described by `spec`.
    /// `Ok(None)` means retrieval returned nothing; callers treat that as
    /// "leave the current source unchanged", not as an error.
    fn read_edges(&self, spec: &SourceSpec) -> StoreResult<Option<EdgeList<String>>>;

    /// Persist a rendered table at the destination, honoring the
    /// conflict policy for an existing table.
    fn write_table(
        &mut self,
        table: &Table<String>,
        spec: &DestinationSpec,
        on_conflict: ConflictPolicy,
    ) -> StoreResult<()>;
}

/// Parse a `COLUMN = value` filter against the table's columns.
fn parse_filter(table: &Table<String>, expr: &str) -> StoreResult<(usize, String)> {
    let (column, value) = expr
        .split_once('=')
        .ok_or_else(|| StoreError::InvalidFilter(expr.to_string()))?;
    let column = column.trim();
    if column.is_empty() {
        return Err(StoreError::InvalidFilter(expr.to_string()));
    }
    let index = table
        .columns
        .iter()
        .position(|c| c == column)
        .ok_or_else(|| StoreError::ColumnNotFound(column.to_string()))?;
    let value = value.trim().trim_matches('\'').to_string();
    Ok((index, value))
}

/// Project the two named columns of a stored table into an edge list,
/// keeping only rows matched by the spec's filter when one is set.
pub(crate) fn project_edges(
    table: &Table<String>,
    spec: &SourceSpec,
) -> StoreResult<EdgeList<String>> {
    let column_index = |name: &str| {
        table
            .columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| StoreError::ColumnNotFound(name.to_string()))
    };
    let parent_idx = column_index(&spec.parent)?;
    let child_idx = column_index(&spec.child)?;
    let row_filter = spec
        .filter
        .as_deref()
        .map(|expr| parse_filter(table, expr))
        .transpose()?;

    let edges = table
        .rows
        .iter()
        .filter(|row| match &row_filter {
            Some((index, value)) => row.get(*index) == Some(value),
            None => true,
        })
        .map(|row| {
            let parent = row
                .get(parent_idx)
                .ok_or_else(|| StoreError::ColumnNotFound(spec.parent.clone()))?;
            let child = row
                .get(child_idx)
                .ok_or_else(|| StoreError::ColumnNotFound(spec.child.clone()))?;
            Ok((parent.clone(), child.clone()))
        })
        .collect::<StoreResult<Vec<_>>>()?;
    Ok(EdgeList::new(edges))
}

/// Shared conflict handling: decide what row set ends up stored.
pub(crate) fn merge_for_write(
    existing: Option<Table<String>>,
    incoming: &Table<String>,
    spec: &DestinationSpec,
    on_conflict: ConflictPolicy,
) -> StoreResult<Table<String>> {
    match (existing, on_conflict) {
        (None, _) | (Some(_), ConflictPolicy::Replace) => Ok(incoming.clone()),
        (Some(_), ConflictPolicy::Fail) => Err(StoreError::TableExists {
            schema: spec.schema.clone(),
            table: spec.table.clone(),
        }),
        (Some(stored), ConflictPolicy::Append) => {
            if stored.columns != incoming.columns {
                return Err(StoreError::ColumnMismatch {
                    stored: stored.columns,
                    incoming: incoming.columns.clone(),
                });
            }
            let mut merged = stored;
            merged.rows.extend(incoming.rows.iter().cloned());
            Ok(merged)
        }
    }
}
