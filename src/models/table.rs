use anyhow::{Context, Result};

/// Caller-supplied tabular data: an ordered header row plus ordered data
/// rows. Every row has exactly as many cells as the header (the loader
/// rejects ragged CSV input before this type is constructed).
#[derive(Debug, Clone)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cells of a named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }

    /// A named column parsed as numbers. Fails on the first cell that is
    /// not a number, naming the row and the offending cell.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>> {
        let cells = self
            .column(name)
            .with_context(|| format!("no column named '{name}'"))?;

        cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                cell.trim().parse::<f64>().with_context(|| {
                    format!("column '{name}', row {}: '{cell}' is not a number", i + 1)
                })
            })
            .collect()
    }
}
