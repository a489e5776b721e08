use anyhow::Result;
use tracing::debug;

use super::columns::require_column;
use crate::models::{DataTable, JoinStrategy, MapConfig};

/// Runs the dataset-level checks before any reference file is touched.
pub struct Validator;

impl Validator {
    pub fn new() -> Self {
        Self
    }

    /// Check that the dataset satisfies the configured contract: the value
    /// column must exist, and for a key join the key column too.
    pub fn validate_dataset(&self, table: &DataTable, config: &MapConfig) -> Result<()> {
        debug!("Validating dataset columns");

        if let Err(err) = require_column(table, &config.dataset.value_column) {
            eprintln!();
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Dataset validation failed (see detailed errors above)");
        }

        if config.join == JoinStrategy::Key
            && let Err(err) = require_column(table, &config.dataset.key_column)
        {
            eprintln!();
            eprintln!("{:?}", miette::Report::new(err));
            anyhow::bail!("Dataset validation failed (see detailed errors above)");
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}
