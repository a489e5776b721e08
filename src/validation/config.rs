use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::debug;

use super::schemas::get_map_config_schema;
use crate::models::MapConfig;

// Use JSON Schema draft-07 for validation (stable and well-tested)
use jsonschema::draft7 as schema_draft;

pub struct ConfigValidator;

impl ConfigValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate a parsed config against the embedded schema, then run the
    /// data-level checks the schema cannot express, and hand back the
    /// deserialized config.
    pub fn validate_value(&self, value: &Value, path: &Path) -> Result<MapConfig> {
        let schema = get_map_config_schema().context("Failed to parse config schema")?;
        let validator = schema_draft::options()
            .build(&schema)
            .context("Failed to compile config schema")?;

        let errors: Vec<String> = validator
            .iter_errors(value)
            .map(|error| {
                let instance_path = error.instance_path.to_string();
                if instance_path.is_empty() {
                    format!("  (root): {error}")
                } else {
                    format!("  {instance_path}: {error}")
                }
            })
            .collect();

        if !errors.is_empty() {
            anyhow::bail!(
                "Schema validation failed for {}:\n{}",
                path.display(),
                errors.join("\n")
            );
        }

        debug!("Running data-level validation");
        let config: MapConfig = serde_json::from_value(value.clone())
            .with_context(|| format!("Failed to deserialize {}", path.display()))?;
        self.validate_data(&config, path)?;

        Ok(config)
    }

    // Constraints draft-07 cannot express
    fn validate_data(&self, config: &MapConfig, path: &Path) -> Result<()> {
        let scale = &config.map.scale;

        if scale.iter().any(|b| !b.is_finite()) {
            anyhow::bail!(
                "Invalid scale in {}: every boundary must be a finite number",
                path.display()
            );
        }

        if let Some(pair) = scale.windows(2).find(|pair| pair[1] <= pair[0]) {
            anyhow::bail!(
                "Invalid scale in {}: boundaries must be strictly increasing \
                 ({} is followed by {})",
                path.display(),
                pair[0],
                pair[1]
            );
        }

        Ok(())
    }
}

impl Default for ConfigValidator {
    fn default() -> Self {
        Self::new()
    }
}
