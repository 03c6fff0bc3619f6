//! Player configuration loader.

use std::path::Path;

use rpg_core::PlayerConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for player configuration from TOML files.
///
/// Missing keys fall back to [`PlayerConfig::default`].
///
/// ```toml
/// max_health = 150
/// health = 80
/// carrying_capacity = 400
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate config data from a TOML file.
    pub fn load(path: &Path) -> LoadResult<PlayerConfig> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    /// Parse and validate config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<PlayerConfig> {
        let config: PlayerConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid player config: {}", e))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let config = ConfigLoader::parse("carrying_capacity = 400").unwrap();
        assert_eq!(config.carrying_capacity, 400);
        assert_eq!(config.max_health, PlayerConfig::DEFAULT_MAX_HEALTH);
    }

    #[test]
    fn rejects_invalid_health() {
        let err = ConfigLoader::parse("max_health = 10\nhealth = 20").unwrap_err();
        assert!(err.to_string().contains("Invalid player config"));
    }
}
