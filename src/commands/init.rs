use anyhow::Result;
use std::path::Path;

use cantonmap::defaults::starter_config_yaml;
use cantonmap::loader::DEFAULT_CONFIG_FILE;

pub fn init_command() -> Result<()> {
    let path = Path::new(DEFAULT_CONFIG_FILE);
    if path.exists() {
        anyhow::bail!("{DEFAULT_CONFIG_FILE} already exists; not overwriting it");
    }

    std::fs::write(path, starter_config_yaml())?;
    println!("Wrote starter configuration to {DEFAULT_CONFIG_FILE}");

    Ok(())
}
