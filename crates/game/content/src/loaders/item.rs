//! Item catalog loader.

use std::collections::HashSet;
use std::path::Path;

use rpg_core::{Item, ItemId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Item catalog structure for RON files.
///
/// ```ron
/// (
///     items: [
///         (id: 1, name: "Iron Helm", weight: 20, armour_bonus: 15),
///         (id: 2, name: "Healing Draught", heal_amount: 40),
///         (id: 3, name: "Crown of Ash", rare: true, unique: true),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<Item>,
}

impl ItemCatalog {
    /// First catalog entry with the given id.
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items.iter().map(Item::id)
    }

    /// Rejects catalogs that give two entries the same id, since scripts
    /// address items by id.
    pub fn ensure_distinct_ids(&self) -> LoadResult<()> {
        let mut seen = HashSet::with_capacity(self.items.len());
        for item in &self.items {
            if !seen.insert(item.id()) {
                anyhow::bail!("Duplicate item id {} ('{}') in catalog", item.id(), item.name());
            }
        }
        Ok(())
    }
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    /// Load item catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing ItemCatalog
    pub fn load(path: &Path) -> LoadResult<ItemCatalog> {
        let content = read_file(path)?;
        let catalog = Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("{} ({})", e, path.display()))?;
        tracing::debug!(items = catalog.items.len(), path = %path.display(), "item catalog loaded");
        Ok(catalog)
    }

    /// Parse an item catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<ItemCatalog> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;
        catalog.ensure_distinct_ids()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"(
        items: [
            (id: 1, name: "Iron Helm", weight: 20, armour_bonus: 15),
            (id: 2, name: "Healing Draught", heal_amount: 40),
            (id: 3, name: "Crown of Ash", rare: true, unique: true),
        ],
    )"#;

    #[test]
    fn parses_catalog_with_defaults() {
        let catalog = ItemLoader::parse(CATALOG).unwrap();
        assert_eq!(catalog.items.len(), 3);

        let helm = catalog.get(ItemId(1)).unwrap();
        assert_eq!(helm.armour_bonus(), 15);
        assert_eq!(helm.heal_amount(), 0);
        assert!(!helm.is_rare());

        let crown = catalog.get(ItemId(3)).unwrap();
        assert!(crown.is_rare() && crown.is_unique());
        assert_eq!(crown.weight(), 0);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ItemLoader::parse(
            r#"(items: [(id: 1, name: "A"), (id: 1, name: "B")])"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("Duplicate item id #1"));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = ItemLoader::load(Path::new("/nonexistent/items.ron")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }
}
