use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

use crate::models::CantonRecord;

// Canton codes are two uppercase letters (ZH, BE, ...), matching the
// TopoJSON feature ids
static CANTON_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Z]{2}$").expect("Invalid canton code regex"));

/// Read the canton reference CSV. The row order is significant: a
/// positional join associates values with cantons in exactly this order.
pub fn load_cantons(path: &Path) -> Result<Vec<CantonRecord>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to read canton reference {}", path.display()))?;

    let mut cantons = Vec::new();
    let mut seen = HashSet::new();
    for (i, result) in reader.deserialize().enumerate() {
        let record: CantonRecord =
            result.with_context(|| format!("Malformed row {} in {}", i + 2, path.display()))?;

        if !CANTON_CODE.is_match(&record.code) {
            anyhow::bail!(
                "Invalid canton code '{}' in {} (expected two uppercase letters)",
                record.code,
                path.display()
            );
        }
        if !seen.insert(record.code.clone()) {
            anyhow::bail!(
                "Duplicate canton code '{}' in {}",
                record.code,
                path.display()
            );
        }

        cantons.push(record);
    }

    if cantons.is_empty() {
        anyhow::bail!("Canton reference {} has no rows", path.display());
    }

    debug!(cantons = cantons.len(), "loaded {}", path.display());
    Ok(cantons)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_cantons_preserves_order() {
        let file = write_csv("Canton,Name\nZH,Zürich\nBE,Bern\nLU,Luzern\n");

        let cantons = load_cantons(file.path()).unwrap();
        let codes: Vec<&str> = cantons.iter().map(|c| c.code.as_str()).collect();
        assert_eq!(codes, vec!["ZH", "BE", "LU"]);
    }

    #[test]
    fn test_load_cantons_rejects_bad_code() {
        let file = write_csv("Canton,Name\nZRH,Zürich\n");

        let err = load_cantons(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid canton code 'ZRH'"));
    }

    #[test]
    fn test_load_cantons_rejects_duplicates() {
        let file = write_csv("Canton,Name\nZH,Zürich\nZH,Zürich\n");

        let err = load_cantons(file.path()).unwrap_err();
        assert!(err.to_string().contains("Duplicate canton code 'ZH'"));
    }

    #[test]
    fn test_shipped_reference_has_all_26_cantons() {
        let cantons = load_cantons(Path::new("data/cantons.csv")).unwrap();
        assert_eq!(cantons.len(), 26);
        assert!(cantons.iter().any(|c| c.code == "ZH"));
        assert!(cantons.iter().any(|c| c.code == "JU"));
    }
}
