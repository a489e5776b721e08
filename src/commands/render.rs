use anyhow::Result;
use std::path::Path;
use tracing::info;

use cantonmap::join;
use cantonmap::loader::{ConfigLoader, load_cantons, load_dataset, load_geometry};
use cantonmap::render::MapGenerator;
use cantonmap::validation::Validator;

pub fn render_command(
    config_path: Option<&Path>,
    data: &Path,
    output: Option<String>,
    column: Option<String>,
    palette: Option<String>,
) -> Result<()> {
    let mut config = ConfigLoader::new().load(config_path)?;

    // CLI flags override the configuration file
    if let Some(column) = column {
        config.dataset.value_column = column;
    }
    if let Some(palette) = palette {
        config.map.palette = palette;
    }
    if let Some(output) = output {
        config.output = output;
    }

    println!("Rendering choropleth map from: {}", data.display());

    // The dataset contract is checked before any reference file is read
    let table = load_dataset(data)?;
    Validator::new().validate_dataset(&table, &config)?;

    let cantons = load_cantons(&config.reference.cantons)?;
    let geometry = load_geometry(&config.reference.geometry, &config.reference.geometry_object)?;

    let merged = join::merge(&cantons, &table, &config)?;
    info!(
        rows = merged.len(),
        cantons = cantons.len(),
        "merged dataset with canton reference"
    );

    let mut generator = MapGenerator::new();
    let output_path = match generator.generate_to_file(&merged, &geometry, &config) {
        Ok(path) => path,
        Err(report) => {
            eprintln!();
            eprintln!("{report:?}");
            anyhow::bail!("Map generation failed (see detailed errors above)");
        }
    };

    println!("Map written to: {}", output_path.display());
    Ok(())
}
