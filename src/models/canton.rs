use serde::{Deserialize, Serialize};

/// One row of the canton reference table. The `Canton` column holds the
/// two-letter canton code, which doubles as the TopoJSON `feature.id`
/// the rendered map is keyed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CantonRecord {
    #[serde(rename = "Canton")]
    pub code: String,

    #[serde(rename = "Name")]
    pub name: String,
}
