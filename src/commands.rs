//! CLI command implementations

use std::path::PathBuf;

use trellis_core::{EdgeList, HierarchyBuilder, TableOptions};
use trellis_store::{Config, ConflictPolicy};

/// Build a hierarchy from a JSON edge file and print the labeled table.
pub fn build(
    input: PathBuf,
    empty_value: String,
    has_primkey: bool,
    level_label: String,
    primkey_label: String,
) -> anyhow::Result<()> {
    tracing::info!("Reading edges from: {}", input.display());

    let text = std::fs::read_to_string(&input)?;
    let rows: Vec<Vec<String>> = serde_json::from_str(&text)?;
    let edges = EdgeList::from_rows(rows)?;
    tracing::info!("Loaded {} edges", edges.len());

    let mut builder = HierarchyBuilder::from_source(edges);
    let mut options = TableOptions::new(empty_value)
        .level_label(level_label)
        .primkey_label(primkey_label);
    if !has_primkey {
        options = options.without_primkey();
    }

    let table = builder.to_table(&options)?;
    tracing::info!("Built {} rows across {} columns", table.row_count(), table.columns.len());
    print!("{table}");
    Ok(())
}

/// Read edges through the configured store, build the hierarchy, and
/// write the rendered table back to the store destination.
pub fn export(
    config_path: PathBuf,
    on_conflict: &str,
    empty_value: String,
    has_primkey: bool,
) -> anyhow::Result<()> {
    let config = Config::load(&config_path)?;
    let policy: ConflictPolicy = on_conflict.parse()?;
    let mut store = config.open_store();

    let edges = match store.read_edges(&config.source)? {
        Some(edges) => edges,
        None => {
            tracing::warn!(
                "Data retrieval returned nothing for {}.{}; nothing to export",
                config.source.schema,
                config.source.table
            );
            return Ok(());
        }
    };
    tracing::info!("Loaded {} edges from store", edges.len());

    let mut builder = HierarchyBuilder::from_source(edges);
    let mut options = TableOptions::new(empty_value)
        .level_label(config.destination.level.clone())
        .primkey_label(config.destination.primkey.clone());
    if !has_primkey {
        options = options.without_primkey();
    }
    let table = builder.to_table(&options)?;

    store.write_table(&table, &config.destination, policy)?;
    tracing::info!(
        "Wrote {} rows to {}.{}",
        table.row_count(),
        config.destination.schema,
        config.destination.table
    );
    Ok(())
}
