//! Merging the canton reference table with the dataset's value column.
//!
//! The default strategy matches rows by position, exactly like the
//! historical implementation: whatever order the two inputs are in is
//! trusted blindly, and a reordered dataset produces a map that colors
//! the wrong cantons without any error. The `key` strategy joins on the
//! dataset's canton-code column instead and exists as an explicit opt-in
//! for callers who cannot guarantee aligned ordering.

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use tracing::warn;

use crate::models::{CantonRecord, DataTable, JoinStrategy, MapConfig, MergedRow, MergedTable};

/// Merge the reference table with the configured value column of the
/// dataset, using the configured strategy. Column presence has been
/// validated by this point; value parsing can still fail.
pub fn merge(cantons: &[CantonRecord], table: &DataTable, config: &MapConfig) -> Result<MergedTable> {
    let values = table
        .numeric_column(&config.dataset.value_column)
        .with_context(|| {
            format!(
                "Column '{}' contains non-numeric values",
                config.dataset.value_column
            )
        })?;

    match config.join {
        JoinStrategy::Position => Ok(merge_by_position(cantons, &values)),
        JoinStrategy::Key => {
            let keys: Vec<String> = table
                .column(&config.dataset.key_column)
                .with_context(|| format!("no column named '{}'", config.dataset.key_column))?
                .iter()
                .map(|k| k.to_string())
                .collect();
            merge_by_key(cantons, &keys, &values)
        }
    }
}

/// Align the two inputs by row index: reference row 0 gets value 0, and
/// so on. With unequal lengths only the overlapping prefix is merged
/// (inner semantics); the mismatch is logged, not corrected. Output
/// length is always `min(cantons.len(), values.len())`.
pub fn merge_by_position(cantons: &[CantonRecord], values: &[f64]) -> MergedTable {
    if cantons.len() != values.len() {
        warn!(
            cantons = cantons.len(),
            values = values.len(),
            "row counts differ; merging the overlapping prefix only"
        );
    }

    let rows = cantons
        .iter()
        .zip(values)
        .map(|(canton, &value)| MergedRow {
            canton: canton.clone(),
            value,
        })
        .collect();

    MergedTable { rows }
}

/// Join on canton codes instead of row order. Dataset rows naming a code
/// with no reference entry are an error; cantons absent from the dataset
/// are dropped with a warning and render unshaded.
pub fn merge_by_key(
    cantons: &[CantonRecord],
    keys: &[String],
    values: &[f64],
) -> Result<MergedTable> {
    debug_assert_eq!(keys.len(), values.len());

    let mut by_code: HashMap<&str, f64> = HashMap::new();
    for (key, &value) in keys.iter().zip(values) {
        if by_code.insert(key.as_str(), value).is_some() {
            anyhow::bail!("Duplicate canton code '{key}' in the dataset");
        }
    }

    let known: HashSet<&str> = cantons.iter().map(|c| c.code.as_str()).collect();
    let unknown: Vec<&str> = keys
        .iter()
        .map(String::as_str)
        .filter(|key| !known.contains(key))
        .collect();
    if !unknown.is_empty() {
        anyhow::bail!(
            "Dataset rows name cantons missing from the reference table: {}",
            unknown.join(", ")
        );
    }

    let mut rows = Vec::with_capacity(cantons.len());
    for canton in cantons {
        match by_code.get(canton.code.as_str()) {
            Some(&value) => rows.push(MergedRow {
                canton: canton.clone(),
                value,
            }),
            None => warn!(code = %canton.code, "no dataset row for canton; it will render unshaded"),
        }
    }

    Ok(MergedTable { rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn canton(code: &str, name: &str) -> CantonRecord {
        CantonRecord {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_position_merge_aligns_by_index() {
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];

        let merged = merge_by_position(&cantons, &[100.0, 200.0]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.rows[0].canton.code, "ZH");
        assert_eq!(merged.rows[0].value, 100.0);
        assert_eq!(merged.rows[1].canton.code, "BE");
        assert_eq!(merged.rows[1].value, 200.0);
    }

    #[test]
    fn test_position_merge_equal_lengths_keeps_row_count() {
        let cantons: Vec<CantonRecord> = ["ZH", "BE", "LU", "UR"]
            .iter()
            .map(|code| canton(code, code))
            .collect();
        let values = vec![1.0, 2.0, 3.0, 4.0];

        let merged = merge_by_position(&cantons, &values);
        assert_eq!(merged.len(), cantons.len());
    }

    #[test]
    fn test_position_merge_truncates_to_shorter_side() {
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];

        assert_eq!(merge_by_position(&cantons, &[7.0]).len(), 1);
        assert_eq!(merge_by_position(&cantons, &[7.0, 8.0, 9.0]).len(), 2);
    }

    #[test]
    fn test_position_merge_trusts_row_order() {
        // The documented risk: a reordered dataset silently mislabels
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];

        let merged = merge_by_position(&cantons, &[200.0, 100.0]);
        assert_eq!(merged.rows[0].canton.code, "ZH");
        assert_eq!(merged.rows[0].value, 200.0);
    }

    #[test]
    fn test_key_merge_matches_codes() {
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];
        let keys = vec!["BE".to_string(), "ZH".to_string()];

        let merged = merge_by_key(&cantons, &keys, &[200.0, 100.0]).unwrap();

        assert_eq!(merged.len(), 2);
        assert_eq!(merged.rows[0].canton.code, "ZH");
        assert_eq!(merged.rows[0].value, 100.0);
        assert_eq!(merged.rows[1].canton.code, "BE");
        assert_eq!(merged.rows[1].value, 200.0);
    }

    #[test]
    fn test_key_merge_rejects_unknown_codes() {
        let cantons = vec![canton("ZH", "Zürich")];
        let keys = vec!["ZH".to_string(), "XX".to_string()];

        let err = merge_by_key(&cantons, &keys, &[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("XX"));
    }

    #[test]
    fn test_key_merge_rejects_duplicate_codes() {
        let cantons = vec![canton("ZH", "Zürich")];
        let keys = vec!["ZH".to_string(), "ZH".to_string()];

        let err = merge_by_key(&cantons, &keys, &[1.0, 2.0]).unwrap_err();
        assert!(err.to_string().contains("Duplicate canton code 'ZH'"));
    }

    #[test]
    fn test_key_merge_drops_cantons_without_data() {
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];
        let keys = vec!["ZH".to_string()];

        let merged = merge_by_key(&cantons, &keys, &[1.0]).unwrap();
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.rows[0].canton.code, "ZH");
    }

    #[test]
    fn test_merge_dispatches_on_strategy() {
        let cantons = vec![canton("ZH", "Zürich"), canton("BE", "Bern")];
        let table = DataTable::new(
            vec!["Canton".to_string(), "Granted Money".to_string()],
            vec![
                vec!["BE".to_string(), "200".to_string()],
                vec!["ZH".to_string(), "100".to_string()],
            ],
        );

        let mut config: MapConfig = serde_yaml::from_str("{}").unwrap();
        let positional = merge(&cantons, &table, &config).unwrap();
        // Positional: the first value lands on the first canton even
        // though the code column says otherwise
        assert_eq!(positional.rows[0].canton.code, "ZH");
        assert_eq!(positional.rows[0].value, 200.0);

        config.join = JoinStrategy::Key;
        let keyed = merge(&cantons, &table, &config).unwrap();
        assert_eq!(keyed.rows[0].canton.code, "ZH");
        assert_eq!(keyed.rows[0].value, 100.0);
    }
}
