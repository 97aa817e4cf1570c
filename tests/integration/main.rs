//! Integration tests for Trellis
//!
//! These tests verify that the core, the store, and the CLI wiring work
//! together correctly.

use std::process::Command;

use trellis_core::{EdgeList, HierarchyBuilder, TableOptions};
use trellis_store::{Config, ConflictPolicy, HierarchyStore, JsonStore, SourceSpec};

/// Test that the CLI can be invoked
#[test]
fn test_cli_invocation() {
    let output = Command::new("cargo")
        .args(["run", "--", "--help"])
        .current_dir(".")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("trellis"));
    assert!(stdout.contains("level-flattened hierarchy tables"));
}

/// Test the full pipeline: JSON edge file -> hierarchy -> labeled table
#[test]
fn test_build_from_edge_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("edges.json");
    std::fs::write(
        &input,
        r#"[["world", "europe"], ["europe", "hungary"], ["europe", "austria"]]"#,
    )
    .unwrap();

    let text = std::fs::read_to_string(&input).unwrap();
    let rows: Vec<Vec<String>> = serde_json::from_str(&text).unwrap();
    let edges = EdgeList::from_rows(rows).unwrap();

    let mut builder = HierarchyBuilder::from_source(edges);
    let table = builder
        .to_table(&TableOptions::new("-".to_string()))
        .unwrap();

    assert_eq!(table.columns, vec!["LVL01", "LVL02", "LVL03", "PK"]);
    assert_eq!(table.row_count(), 4);
    assert!(table
        .rows
        .iter()
        .any(|row| row == &vec!["world", "europe", "hungary", "hungary"]));
    assert!(table
        .rows
        .iter()
        .any(|row| row == &vec!["world", "-", "-", "world"]));
}

/// Test config-driven export against the JSON store backend
#[test]
fn test_export_through_json_store() {
    let dir = tempfile::tempdir().unwrap();
    let data_root = dir.path().join("data");
    let config_path = dir.path().join("trellis.toml");
    std::fs::write(
        &config_path,
        format!(
            r#"
[store]
kind = "json"
root = "{}"

[source]
schema = "geo"
table = "edges"
parent = "PARENT"
child = "CHILD"

[destination]
schema = "geo"
table = "levels"
"#,
            data_root.display()
        ),
    )
    .unwrap();

    let config = Config::load(&config_path).unwrap();
    let mut store = config.open_store();

    // Seed the source table through the same backend the export will use.
    {
        let mut seed = JsonStore::new(&data_root);
        let source_table = trellis_core::Table::new(
            vec!["PARENT".into(), "CHILD".into()],
            vec![
                vec!["world".into(), "europe".into()],
                vec!["europe".into(), "hungary".into()],
            ],
        );
        let seed_spec = trellis_store::DestinationSpec {
            schema: "geo".into(),
            table: "edges".into(),
            level: "LVL".into(),
            primkey: "PK".into(),
        };
        seed.write_table(&source_table, &seed_spec, ConflictPolicy::Fail)
            .unwrap();
    }

    let edges = store.read_edges(&config.source).unwrap().unwrap();
    let mut builder = HierarchyBuilder::from_source(edges);
    let table = builder
        .to_table(&TableOptions::new(String::new()))
        .unwrap();
    store
        .write_table(&table, &config.destination, ConflictPolicy::Fail)
        .unwrap();

    // The written table reads back through a fresh store handle.
    let reader = JsonStore::new(&data_root);
    let read_spec = SourceSpec {
        schema: "geo".into(),
        table: "levels".into(),
        parent: "LVL01".into(),
        child: "PK".into(),
        filter: None,
    };
    let stored = reader.read_edges(&read_spec).unwrap().unwrap();
    assert_eq!(stored.len(), 3);
}

/// Test that an export-shaped pipeline can omit the primary-key column
#[test]
fn test_export_table_without_primkey() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = JsonStore::new(dir.path());

    let mut builder = HierarchyBuilder::from_source(vec![
        ("world".to_string(), "europe".to_string()),
        ("europe".to_string(), "hungary".to_string()),
    ]);
    let table = builder
        .to_table(&TableOptions::new(String::new()).without_primkey())
        .unwrap();
    assert_eq!(table.columns, vec!["LVL01", "LVL02", "LVL03"]);

    let spec = trellis_store::DestinationSpec {
        schema: "geo".into(),
        table: "levels".into(),
        level: "LVL".into(),
        primkey: "PK".into(),
    };
    store
        .write_table(&table, &spec, ConflictPolicy::Fail)
        .unwrap();

    let read_spec = SourceSpec {
        schema: "geo".into(),
        table: "levels".into(),
        parent: "LVL01".into(),
        child: "LVL02".into(),
        filter: None,
    };
    let edges = store.read_edges(&read_spec).unwrap().unwrap();
    assert_eq!(edges.len(), 3);
}

/// Test that an absent source table exports nothing rather than failing
#[test]
fn test_export_with_empty_retrieval() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());
    let spec = SourceSpec {
        schema: "geo".into(),
        table: "missing".into(),
        parent: "PARENT".into(),
        child: "CHILD".into(),
        filter: None,
    };
    assert!(store.read_edges(&spec).unwrap().is_none());
}
