use anyhow::Result;
use std::path::Path;

use cantonmap::join;
use cantonmap::loader::{ConfigLoader, load_cantons, load_dataset};
use cantonmap::validation::Validator;

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum InspectType {
    Config,
    Table,
}

pub fn inspect_command(
    config_path: Option<&Path>,
    object_type: InspectType,
    data: Option<&Path>,
) -> Result<()> {
    let config = ConfigLoader::new().load(config_path)?;

    match object_type {
        InspectType::Config => {
            config.pretty_print();
        }
        InspectType::Table => {
            let data =
                data.ok_or_else(|| anyhow::anyhow!("--data is required to inspect the table"))?;

            let table = load_dataset(data)?;
            Validator::new().validate_dataset(&table, &config)?;

            let cantons = load_cantons(&config.reference.cantons)?;
            let merged = join::merge(&cantons, &table, &config)?;
            merged.pretty_print();
        }
    }

    Ok(())
}
