use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use crate::models::DataTable;

/// Read the caller's dataset CSV into a [`DataTable`]. The first row is
/// the header; ragged rows are rejected.
pub fn load_dataset(path: &Path) -> Result<DataTable> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Failed to read dataset {}", path.display()))?;

    let columns: Vec<String> = reader
        .headers()
        .with_context(|| format!("Failed to read header row of {}", path.display()))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        // +2: one for the header, one for 1-based counting
        let record =
            record.with_context(|| format!("Malformed row {} in {}", i + 2, path.display()))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(
        rows = rows.len(),
        columns = columns.len(),
        "loaded dataset {}",
        path.display()
    );

    Ok(DataTable::new(columns, rows))
}
