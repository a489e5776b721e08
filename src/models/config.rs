use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The full map configuration. Every value the original call sites had
/// hardcoded (file paths, column names, palette, threshold scale) is an
/// explicit parameter here; the serde defaults reproduce the historical
/// values so a minimal config still renders the classic map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapConfig {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub reference: ReferenceConfig,

    #[serde(default)]
    pub map: MapStyle,

    #[serde(default)]
    pub join: JoinStrategy,

    /// Output name; the map is written to `<output>.html`.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            reference: ReferenceConfig::default(),
            map: MapStyle::default(),
            join: JoinStrategy::default(),
            output: default_output(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatasetConfig {
    /// Name of the column holding the values to plot.
    #[serde(default = "default_value_column")]
    pub value_column: String,

    /// Name of the column holding canton codes, used by `join: key`.
    #[serde(default = "default_key_column")]
    pub key_column: String,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            value_column: default_value_column(),
            key_column: default_key_column(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Canton reference CSV (columns `Canton`, `Name`).
    #[serde(default = "default_cantons_path")]
    pub cantons: PathBuf,

    /// TopoJSON file with the canton geometry.
    #[serde(default = "default_geometry_path")]
    pub geometry: PathBuf,

    /// Name of the geometry collection under `objects` in the TopoJSON.
    #[serde(default = "default_geometry_object")]
    pub geometry_object: String,
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            cantons: default_cantons_path(),
            geometry: default_geometry_path(),
            geometry_object: default_geometry_object(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MapStyle {
    /// Color palette for the fill bands (see `render::palette`).
    #[serde(default = "default_palette")]
    pub palette: String,

    /// Threshold scale: ordered boundaries of the discrete color bands.
    #[serde(default = "default_scale")]
    pub scale: Vec<f64>,

    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,

    #[serde(default = "default_line_opacity")]
    pub line_opacity: f64,

    /// Initial map center, `[latitude, longitude]`.
    #[serde(default = "default_center")]
    pub center: [f64; 2],

    #[serde(default = "default_zoom")]
    pub zoom: u8,

    /// Legend caption shown above the color bands.
    #[serde(default = "default_legend")]
    pub legend: String,
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            palette: default_palette(),
            scale: default_scale(),
            fill_opacity: default_fill_opacity(),
            line_opacity: default_line_opacity(),
            center: default_center(),
            zoom: default_zoom(),
            legend: default_legend(),
        }
    }
}

/// How the canton reference table and the dataset are combined.
///
/// `position` matches rows by index, exactly like the historical
/// implementation: row 0 of the reference table gets row 0 of the value
/// column. If the two inputs are not in identical order this silently
/// associates values with the wrong cantons, so `key` is offered as an
/// explicit opt-in that joins on the dataset's canton-code column
/// instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinStrategy {
    #[default]
    Position,
    Key,
}

fn default_value_column() -> String {
    "Granted Money".to_string()
}

fn default_key_column() -> String {
    "Canton".to_string()
}

fn default_cantons_path() -> PathBuf {
    PathBuf::from("data/cantons.csv")
}

fn default_geometry_path() -> PathBuf {
    PathBuf::from("data/ch-cantons.topojson.json")
}

fn default_geometry_object() -> String {
    "cantons".to_string()
}

fn default_palette() -> String {
    "YlOrBr".to_string()
}

fn default_scale() -> Vec<f64> {
    vec![0.0, 500.0, 1000.0, 1500.0, 2000.0]
}

fn default_fill_opacity() -> f64 {
    0.7
}

fn default_line_opacity() -> f64 {
    0.2
}

fn default_center() -> [f64; 2] {
    [46.8, 8.28]
}

fn default_zoom() -> u8 {
    8
}

fn default_legend() -> String {
    "Granted Money (Mio CHF)".to_string()
}

fn default_output() -> String {
    "switzerland_map".to_string()
}
