use anyhow::Result;
use std::path::Path;

use cantonmap::loader::{ConfigLoader, load_dataset};
use cantonmap::validation::Validator;

pub fn validate_command(config_path: Option<&Path>, data: Option<&Path>) -> Result<()> {
    // The loader runs all config validation as part of loading
    let config = ConfigLoader::new().load(config_path)?;
    println!("✓ Configuration is valid");

    if let Some(data) = data {
        let table = load_dataset(data)?;
        Validator::new().validate_dataset(&table, &config)?;
        println!(
            "✓ Dataset {} contains the required column '{}'",
            data.display(),
            config.dataset.value_column
        );
    }

    println!("\n✅ All validations passed!");
    Ok(())
}
