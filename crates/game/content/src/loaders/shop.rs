//! Shop definition loader.

use std::path::Path;

use game_core::ShopDefinition;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Shop list structure for RON files. Order is presentation order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShopCatalog {
    pub shops: Vec<ShopDefinition>,
}

pub struct ShopLoader;

impl ShopLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<ShopDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Vec<ShopDefinition>> {
        let catalog: ShopCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse shop list RON: {}", e))?;

        for shop in &catalog.shops {
            if shop.stock.is_empty() {
                anyhow::bail!("Shop '{}' has no stock", shop.name);
            }
        }
        Ok(catalog.shops)
    }
}
