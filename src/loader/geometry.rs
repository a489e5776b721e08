use anyhow::{Context, Result};
use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, warn};

/// Canton geometry, kept as opaque TopoJSON. Only the feature ids are
/// inspected so the renderer can cross-check them against the joined
/// data; everything else is passed straight through to the map page.
#[derive(Debug, Clone)]
pub struct Geometry {
    pub json: Value,
    pub feature_ids: HashSet<String>,
}

pub fn load_geometry(path: &Path, object_name: &str) -> Result<Geometry> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read geometry {}", path.display()))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse geometry {}", path.display()))?;

    let object = json
        .get("objects")
        .and_then(|objects| objects.get(object_name))
        .with_context(|| {
            format!(
                "Geometry {} has no 'objects.{object_name}' collection",
                path.display()
            )
        })?;

    let feature_ids: HashSet<String> = object
        .get("geometries")
        .and_then(Value::as_array)
        .map(|geometries| {
            geometries
                .iter()
                .filter_map(|g| g.get("id").and_then(Value::as_str))
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    if feature_ids.is_empty() {
        warn!(
            "geometry {} has no feature ids; all cantons will render unshaded",
            path.display()
        );
    }
    debug!(features = feature_ids.len(), "loaded {}", path.display());

    Ok(Geometry { json, feature_ids })
}
