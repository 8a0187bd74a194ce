//! Item catalog loader.

use std::path::Path;

use game_core::{Item, ItemKind};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One authored consumable entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: ItemKind,
    /// Healing amount for `Health`, restored HP for `Revive`.
    #[serde(default)]
    pub value: u32,
    #[serde(default)]
    pub buy_price: u32,
}

impl ItemSpec {
    pub fn build(&self) -> Item {
        Item::new(
            self.name.clone(),
            self.description.clone(),
            self.kind,
            self.value,
            self.buy_price,
        )
    }
}

/// Item catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCatalog {
    pub items: Vec<ItemSpec>,
}

/// Loader for item catalog from RON files.
pub struct ItemLoader;

impl ItemLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ItemSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ItemSpec>> {
        let catalog: ItemCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse item catalog RON: {}", e))?;

        for (index, spec) in catalog.items.iter().enumerate() {
            if catalog.items[..index]
                .iter()
                .any(|earlier| earlier.name == spec.name)
            {
                anyhow::bail!("Duplicate item entry '{}'", spec.name);
            }
        }
        Ok(catalog.items)
    }
}
