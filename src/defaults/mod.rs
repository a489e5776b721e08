use once_cell::sync::Lazy;

use crate::models::MapConfig;

// Embed the starter configuration file at compile time
const STARTER_MAP_YML: &str = include_str!("map.yml");

// Parse the starter config once at startup
pub static DEFAULT_MAP_CONFIG: Lazy<MapConfig> = Lazy::new(|| {
    serde_yaml::from_str(STARTER_MAP_YML)
        .expect("Failed to parse embedded starter config - this is a bug")
});

/// The starter `map.yml` written by `cantonmap init`.
pub fn starter_config_yaml() -> &'static str {
    STARTER_MAP_YML
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_config_loads() {
        let config = &*DEFAULT_MAP_CONFIG;
        assert_eq!(config.dataset.value_column, "Granted Money");
        assert_eq!(config.map.palette, "YlOrBr");
    }

    #[test]
    fn test_starter_config_matches_builtin_defaults() {
        // The starter file spells out every default; the two must not drift
        assert_eq!(*DEFAULT_MAP_CONFIG, MapConfig::default());
    }
}
