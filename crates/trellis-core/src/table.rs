//! Labeled tabular rendering of flattened rows
//!
//! A thin presentation layer over [`flatten`](crate::flatten::flatten):
//! the same rows, plus generated column labels.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::error::HierarchyResult;
use crate::flatten::flatten;
use crate::paths::Hierarchy;

/// Default prefix for generated level column labels.
pub const DEFAULT_LEVEL_LABEL: &str = "LVL";

/// Default label for the trailing primary-key column.
pub const DEFAULT_PRIMKEY_LABEL: &str = "PK";

/// Flattened rows with their column labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table<N> {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<N>>,
}

impl<N> Table<N> {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<N>>) -> Self {
        Table { columns, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Rendering parameters for [`render_table`].
#[derive(Debug, Clone)]
pub struct TableOptions<N> {
    /// Sentinel written into padded cells.
    pub empty_value: N,
    /// Append the terminal-node primary-key column.
    pub has_primkey: bool,
    /// Prefix for level column labels, numbered `01..`.
    pub level_label: String,
    /// Label for the primary-key column.
    pub primkey_label: String,
}

impl<N> TableOptions<N> {
    pub fn new(empty_value: N) -> Self {
        TableOptions {
            empty_value,
            has_primkey: true,
            level_label: DEFAULT_LEVEL_LABEL.to_string(),
            primkey_label: DEFAULT_PRIMKEY_LABEL.to_string(),
        }
    }

    pub fn without_primkey(mut self) -> Self {
        self.has_primkey = false;
        self
    }

    pub fn level_label(mut self, label: impl Into<String>) -> Self {
        self.level_label = label.into();
        self
    }

    pub fn primkey_label(mut self, label: impl Into<String>) -> Self {
        self.primkey_label = label.into();
        self
    }
}

/// Flatten a hierarchy and label the resulting columns:
/// `{level_label}01 .. {level_label}NN`, plus the primary-key label when
/// that column is present.
pub fn render_table<N: Clone + Eq + Hash>(
    hierarchy: &Hierarchy<N>,
    options: &TableOptions<N>,
) -> HierarchyResult<Table<N>> {
    let rows = flatten(hierarchy, &options.empty_value, options.has_primkey)?;
    // flatten() rejects empty hierarchies, so max_length is defined here.
    let max_length = hierarchy.max_length().unwrap_or(0);

    let mut columns: Vec<String> = (1..=max_length)
        .map(|i| format!("{}{:02}", options.level_label, i))
        .collect();
    if options.has_primkey {
        columns.push(options.primkey_label.clone());
    }
    Ok(Table { columns, rows })
}

impl<N: fmt::Display> fmt::Display for Table<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(String::len).collect();
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        for row in &rendered {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() && cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let header: Vec<String> = self
            .columns
            .iter()
            .zip(widths.iter().copied())
            .map(|(label, w)| format!("{label:<w$}"))
            .collect();
        writeln!(f, "{}", header.join("  "))?;
        for row in &rendered {
            let line: Vec<String> = row
                .iter()
                .zip(widths.iter().copied())
                .map(|(cell, w)| format!("{cell:<w$}"))
                .collect();
            writeln!(f, "{}", line.join("  "))?;
        }
        Ok(())
    }
}
