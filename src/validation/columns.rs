use super::error::MissingColumnError;
use crate::models::DataTable;

/// Succeeds silently when `column` exists in the table. The error carries
/// the expected name so callers can surface it without extra context.
pub fn require_column(table: &DataTable, column: &str) -> Result<(), MissingColumnError> {
    if table.has_column(column) {
        Ok(())
    } else {
        Err(MissingColumnError::new(column, table.columns()))
    }
}
