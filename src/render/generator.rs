use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info, warn};

use super::palette;
use super::scale::ThresholdScale;
use crate::loader::Geometry;
use crate::models::{MapConfig, MergedTable};
use crate::templating::TemplateEngine;

// Embedded map page template
const MAP_TEMPLATE: &str = include_str!("templates/map.html.j2");
const MAP_TEMPLATE_NAME: &str = "map.html.j2";

#[derive(Serialize)]
struct CantonFill {
    code: String,
    name: String,
    value: f64,
    color: &'static str,
}

#[derive(Serialize)]
struct LegendEntry {
    color: &'static str,
    lower: f64,
    upper: f64,
}

#[derive(Serialize)]
struct MapContext<'a> {
    title: &'a str,
    legend: &'a str,
    value_column: &'a str,
    center: [f64; 2],
    zoom: u8,
    fill_opacity: f64,
    line_opacity: f64,
    geometry: &'a serde_json::Value,
    geometry_object: &'a str,
    fills: Vec<CantonFill>,
    legend_entries: Vec<LegendEntry>,
}

/// Renders a merged table into a standalone Leaflet map page.
pub struct MapGenerator {
    engine: TemplateEngine,
}

impl Default for MapGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl MapGenerator {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
        }
    }

    /// Render the map page as an HTML string.
    pub fn render(
        &mut self,
        merged: &MergedTable,
        geometry: &Geometry,
        config: &MapConfig,
    ) -> Result<String> {
        let scale = ThresholdScale::new(config.map.scale.clone()).into_diagnostic()?;
        let colors = palette::colors(&config.map.palette, scale.band_count()).into_diagnostic()?;

        let mut fills = Vec::with_capacity(merged.len());
        for row in merged {
            if !scale.contains(row.value) {
                warn!(
                    code = %row.canton.code,
                    value = row.value,
                    "value outside the threshold scale; clamped into the nearest band"
                );
            }
            if !geometry.feature_ids.is_empty() && !geometry.feature_ids.contains(&row.canton.code)
            {
                warn!(
                    code = %row.canton.code,
                    "no geometry feature for canton; it will not appear on the map"
                );
            }

            fills.push(CantonFill {
                code: row.canton.code.clone(),
                name: row.canton.name.clone(),
                value: row.value,
                color: colors[scale.band_for(row.value)],
            });
        }

        let shaded: HashSet<&str> = merged.iter().map(|row| row.canton.code.as_str()).collect();
        for id in &geometry.feature_ids {
            if !shaded.contains(id.as_str()) {
                warn!(code = %id, "no data for geometry feature; it will render unshaded");
            }
        }

        let legend_entries = scale
            .bands()
            .zip(&colors)
            .map(|((lower, upper), &color)| LegendEntry {
                color,
                lower,
                upper,
            })
            .collect();

        let context = MapContext {
            title: &config.map.legend,
            legend: &config.map.legend,
            value_column: &config.dataset.value_column,
            center: config.map.center,
            zoom: config.map.zoom,
            fill_opacity: config.map.fill_opacity,
            line_opacity: config.map.line_opacity,
            geometry: &geometry.json,
            geometry_object: &config.reference.geometry_object,
            fills,
            legend_entries,
        };

        debug!(cantons = merged.len(), bands = scale.band_count(), "rendering map page");
        self.engine.render(MAP_TEMPLATE_NAME, MAP_TEMPLATE, &context)
    }

    /// Render and write `<output>.html`, mirroring the historical naming
    /// convention. Returns the written path.
    pub fn generate_to_file(
        &mut self,
        merged: &MergedTable,
        geometry: &Geometry,
        config: &MapConfig,
    ) -> Result<PathBuf> {
        let html = self.render(merged, geometry, config)?;

        let output_path = PathBuf::from(format!("{}.html", config.output));
        fs::write(&output_path, html).into_diagnostic()?;
        info!("✓ Map written to {}", output_path.display());

        Ok(output_path)
    }
}
