//! Content factory for building the registry and starting party from data files.

use std::path::{Path, PathBuf};

use game_core::{Actor, ContentOracle, GameConfig, Party, Shop, ShopDefinition};

use crate::loaders::{
    ConfigLoader, EquipmentLoader, EquipmentSpec, ItemLoader, ItemSpec, LoadResult, PartyLoader,
    PartySpec, ShopLoader,
};
use crate::registry::ContentRegistry;

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── equipment.ron
/// ├── items.ron
/// ├── shops.ron
/// └── party.ron
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

    /// Factory over the data directory shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the equipment catalog from `equipment.ron`.
    pub fn load_equipment(&self) -> LoadResult<Vec<EquipmentSpec>> {
        EquipmentLoader::load(&self.data_dir.join("equipment.ron"))
    }

    /// Load the item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<ItemSpec>> {
        ItemLoader::load(&self.data_dir.join("items.ron"))
    }

    /// Load shop definitions from `shops.ron`.
    pub fn load_shops(&self) -> LoadResult<Vec<ShopDefinition>> {
        ShopLoader::load(&self.data_dir.join("shops.ron"))
    }

    /// Load the starting party description from `party.ron`.
    pub fn load_party_spec(&self) -> LoadResult<PartySpec> {
        PartyLoader::load(&self.data_dir.join("party.ron"))
    }

    /// Load every catalog into a registry.
    ///
    /// Shop stock is resolved eagerly so a shop naming a missing or
    /// mismatched entry fails here rather than when the shop is opened.
    pub fn load_registry(&self) -> LoadResult<ContentRegistry> {
        let mut registry = ContentRegistry::new(self.load_config()?);
        for spec in self.load_equipment()? {
            registry.insert_equipment(spec.build());
        }
        for spec in self.load_items()? {
            registry.insert_item(spec.build());
        }
        for shop in self.load_shops()? {
            Shop::from_definition(&shop, &registry)
                .map_err(|e| anyhow::anyhow!("Invalid shop definition: {}", e))?;
            registry.insert_shop(shop);
        }

        tracing::info!(
            data_dir = %self.data_dir.display(),
            equipment = registry.equipment_catalog().len(),
            items = registry.item_catalog().len(),
            shops = registry.shops().len(),
            "content loaded"
        );
        Ok(registry)
    }

    /// Load `party.ron` and build the starting party against `content`.
    pub fn load_party(&self, content: &dyn ContentOracle) -> LoadResult<Party> {
        build_party(&self.load_party_spec()?, content)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Build a party from its description, resolving every name through `content`.
///
/// Members wear their listed equipment; each worn piece is added to the
/// party inventory first.
pub fn build_party(spec: &PartySpec, content: &dyn ContentOracle) -> LoadResult<Party> {
    let config = content.config();
    let mut party = Party::new(&config);

    for member in &spec.members {
        let mut actor = Actor::new(
            member.name.clone(),
            member.id.clone(),
            member.kind,
            member.level,
            member.max_hp,
        )
        .with_xp_to_next_level(config.xp_to_next_level);
        if let Some(attributes) = member.attributes {
            actor = actor.with_attributes(attributes);
        }
        if let Some(mp) = member.mp {
            actor = actor.with_mp(mp, mp.max(GameConfig::DEFAULT_MAX_MP));
        }
        party
            .add_member(actor)
            .map_err(|e| anyhow::anyhow!("Failed to add party member '{}': {}", member.id, e))?;

        for name in &member.equipped {
            let equipment = content
                .equipment(name)
                .ok_or_else(|| anyhow::anyhow!("Unknown equipment '{}' for '{}'", name, member.id))?;
            let id = party
                .inventory_mut()
                .add_equipment(equipment)
                .map_err(|e| anyhow::anyhow!("Failed to stow '{}': {}", name, e))?;
            party
                .equip(&member.id, id)
                .map_err(|e| anyhow::anyhow!("Failed to equip '{}' on '{}': {}", name, member.id, e))?;
        }
    }

    for stack in &spec.items {
        let item = content
            .item(&stack.name)
            .ok_or_else(|| anyhow::anyhow!("Unknown item '{}'", stack.name))?;
        party
            .inventory_mut()
            .add_item(item.with_count(stack.count))
            .map_err(|e| anyhow::anyhow!("Failed to stow '{}': {}", stack.name, e))?;
    }
    for stack in &spec.equipment {
        let equipment = content
            .equipment(&stack.name)
            .ok_or_else(|| anyhow::anyhow!("Unknown equipment '{}'", stack.name))?;
        party
            .inventory_mut()
            .add_equipment(equipment.with_count(stack.count))
            .map_err(|e| anyhow::anyhow!("Failed to stow '{}': {}", stack.name, e))?;
    }

    Ok(party)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_directory_reports_the_path() {
        let error = ContentFactory::new("/nonexistent/trpg")
            .load_config()
            .unwrap_err();
        assert!(error.to_string().contains("/nonexistent/trpg/config.toml"));
    }
}
