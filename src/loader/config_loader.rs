//! Config-specific loading logic

use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use std::path::Path;
use tracing::{debug, info};

use crate::defaults::DEFAULT_MAP_CONFIG;
use crate::models::MapConfig;
use crate::validation::ConfigValidator;

/// Name of the config file picked up from the working directory when no
/// explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "map.yml";

pub struct ConfigLoader {
    validator: ConfigValidator,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            validator: ConfigValidator::new(),
        }
    }

    /// Load the map configuration. An explicit path must exist; with no
    /// path, `map.yml` in the working directory is used when present and
    /// the built-in defaults otherwise. Validation runs as part of
    /// loading.
    pub fn load(&self, path: Option<&Path>) -> Result<MapConfig> {
        match path {
            Some(path) => self.load_file(path),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.exists() {
                    self.load_file(fallback)
                } else {
                    debug!("No {DEFAULT_CONFIG_FILE} found; using built-in defaults");
                    Ok(DEFAULT_MAP_CONFIG.clone())
                }
            }
        }
    }

    fn load_file(&self, path: &Path) -> Result<MapConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let value: JsonValue = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        // The validator deserializes after the schema check
        let config = self.validator.validate_value(&value, path)?;
        info!("✓ Configuration loaded from {}", path.display());

        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
