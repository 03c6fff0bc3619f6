//! Content factory for loading everything from a data directory.

use std::path::{Path, PathBuf};

use rpg_core::PlayerConfig;

use crate::loaders::{ConfigLoader, ItemCatalog, ItemLoader, LoadResult, ScriptLoader};
use crate::script::SessionScript;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml      (optional, defaults apply when absent)
/// ├── items.ron
/// └── scripts/
///     └── session.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load player configuration from `config.toml`, or the default config
    /// if the file does not exist.
    pub fn load_config(&self) -> LoadResult<PlayerConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(PlayerConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<ItemCatalog> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load a session script from `scripts/{file_name}`.
    pub fn load_script(&self, file_name: &str) -> LoadResult<SessionScript> {
        let path = self.data_dir.join("scripts").join(file_name);
        ScriptLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
