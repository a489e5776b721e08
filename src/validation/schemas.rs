use serde_json::Value;

// Embed the schema at compile time
const MAP_CONFIG_SCHEMA: &str = include_str!("../../schemas/map-config-schema.json");

pub fn get_map_config_schema() -> Result<Value, serde_json::Error> {
    serde_json::from_str(MAP_CONFIG_SCHEMA)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_schema_parses() {
        let schema = get_map_config_schema().unwrap();
        assert_eq!(schema["title"], "cantonmap configuration");
    }
}
