//! Runtime configuration read from the process environment.
use std::env;
use std::path::PathBuf;

/// Settings for a simulated session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Directory holding `config.toml`, `items.ron` and `scripts/`.
    pub data_dir: PathBuf,
    /// Script file name under `scripts/`. `None` collects every catalog item.
    pub script: Option<String>,
    /// Default log directive when `RUST_LOG` is unset.
    pub log_level: String,
    /// Number of training dummies the host engine places near the player.
    pub enemies: usize,
    /// Abort on script commands that reference unknown items.
    pub strict: bool,
}

impl RuntimeConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "data";
    pub const DEFAULT_LOG_LEVEL: &'static str = "info";
    pub const DEFAULT_ENEMIES: usize = 3;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `RPG_DATA_DIR` - Content directory (default: `data`)
    /// - `RPG_SCRIPT` - Script file under `scripts/` (default: collect all items)
    /// - `RPG_LOG` - Default log level (default: `info`)
    /// - `RPG_ENEMIES` - Training dummies near the player (default: 3)
    /// - `RPG_STRICT` - Fail on unknown item ids (default: false)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("RPG_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.script = env::var("RPG_SCRIPT").ok().filter(|name| !name.is_empty());

        if let Ok(level) = env::var("RPG_LOG") {
            config.log_level = level;
        }

        if let Some(count) = read_env::<usize>("RPG_ENEMIES") {
            config.enemies = count;
        }

        if let Some(strict) = read_env::<bool>("RPG_STRICT") {
            config.strict = strict;
        } else if env::var("RPG_STRICT").is_ok() {
            // Also accept just setting the variable without value as "true"
            config.strict = true;
        }

        config
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            script: None,
            log_level: Self::DEFAULT_LOG_LEVEL.to_string(),
            enemies: Self::DEFAULT_ENEMIES,
            strict: false,
        }
    }
}

fn read_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|value| value.trim().parse().ok())
}
