//! Session script loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::script::SessionScript;

/// Loader for scripted sessions from RON files.
///
/// ```ron
/// (
///     commands: [
///         Pickup(1),
///         RecalculateArmour,
///         TakeDamage(40),
///         Use(4),
///     ],
/// )
/// ```
pub struct ScriptLoader;

impl ScriptLoader {
    pub fn load(path: &Path) -> LoadResult<SessionScript> {
        let content = read_file(path)?;
        Self::parse(&content).map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))
    }

    pub fn parse(content: &str) -> LoadResult<SessionScript> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse session script RON: {}", e))
    }
}
