use std::path::Path;

use super::*;
use crate::models::{DataTable, MapConfig};

fn table_with(columns: &[&str]) -> DataTable {
    DataTable::new(columns.iter().map(|c| c.to_string()).collect(), vec![])
}

fn validate_yaml(yaml: &str) -> anyhow::Result<MapConfig> {
    let value: serde_json::Value = serde_yaml::from_str(yaml).unwrap();
    ConfigValidator::new().validate_value(&value, Path::new("map.yml"))
}

#[test]
fn test_require_column_present() {
    let table = table_with(&["Canton", "Granted Money"]);
    assert!(require_column(&table, "Granted Money").is_ok());
}

#[test]
fn test_require_column_missing() {
    let table = table_with(&["Canton", "Grant Money"]);

    let err = require_column(&table, "Granted Money").unwrap_err();
    assert_eq!(err.column, "Granted Money");
    assert!(err.to_string().contains("Granted Money"));
}

#[test]
fn test_validate_dataset_reports_missing_column() {
    let table = table_with(&["Canton", "Population"]);
    let config: MapConfig = serde_yaml::from_str("{}").unwrap();

    let err = Validator::new()
        .validate_dataset(&table, &config)
        .unwrap_err();
    assert!(err.to_string().contains("Dataset validation failed"));
}

#[test]
fn test_validate_dataset_key_join_needs_key_column() {
    let table = table_with(&["Granted Money"]);
    let config: MapConfig = serde_yaml::from_str("join: key\n").unwrap();

    assert!(
        Validator::new()
            .validate_dataset(&table, &config)
            .is_err()
    );

    let table = table_with(&["Canton", "Granted Money"]);
    assert!(
        Validator::new()
            .validate_dataset(&table, &config)
            .is_ok()
    );
}

#[test]
fn test_config_schema_accepts_empty_config() {
    assert!(validate_yaml("{}").is_ok());
}

#[test]
fn test_config_schema_rejects_unknown_key() {
    let err = validate_yaml("colour_scheme: YlGn\n").unwrap_err();
    assert!(err.to_string().contains("Schema validation failed"));
}

#[test]
fn test_config_schema_rejects_unknown_palette() {
    let err = validate_yaml("map:\n  palette: Viridis\n").unwrap_err();
    assert!(err.to_string().contains("/map/palette"));
}

#[test]
fn test_config_schema_rejects_opacity_out_of_range() {
    let err = validate_yaml("map:\n  fill_opacity: 1.5\n").unwrap_err();
    assert!(err.to_string().contains("/map/fill_opacity"));
}

#[test]
fn test_config_rejects_non_increasing_scale() {
    let err = validate_yaml("map:\n  scale: [0, 500, 500, 2000]\n").unwrap_err();
    assert!(err.to_string().contains("strictly increasing"));
}

#[test]
fn test_config_accepts_starter_yaml() {
    let config = validate_yaml(crate::defaults::starter_config_yaml()).unwrap();
    assert_eq!(config, MapConfig::default());
}
