//! In-memory content registry backing [`ContentOracle`].

use game_core::{ContentOracle, Equipment, GameConfig, Item, ShopDefinition};

/// Catalogs resolved by name. Insertion order is kept for presentation.
#[derive(Clone, Debug, Default)]
pub struct ContentRegistry {
    config: GameConfig,
    equipment: Vec<Equipment>,
    items: Vec<Item>,
    shops: Vec<ShopDefinition>,
}

impl ContentRegistry {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Register an equipment entry, replacing any entry of the same name.
    pub fn insert_equipment(&mut self, equipment: Equipment) {
        let equipment = equipment.with_count(1);
        match self.equipment.iter_mut().find(|e| e.name() == equipment.name()) {
            Some(existing) => *existing = equipment,
            None => self.equipment.push(equipment),
        }
    }

    pub fn insert_item(&mut self, item: Item) {
        let item = item.with_count(1);
        match self.items.iter_mut().find(|i| i.name() == item.name()) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn insert_shop(&mut self, shop: ShopDefinition) {
        match self.shops.iter_mut().find(|s| s.name == shop.name) {
            Some(existing) => *existing = shop,
            None => self.shops.push(shop),
        }
    }

    pub fn equipment_catalog(&self) -> &[Equipment] {
        &self.equipment
    }

    pub fn item_catalog(&self) -> &[Item] {
        &self.items
    }

    pub fn shops(&self) -> &[ShopDefinition] {
        &self.shops
    }
}

impl ContentOracle for ContentRegistry {
    fn equipment(&self, name: &str) -> Option<Equipment> {
        self.equipment.iter().find(|e| e.name() == name).cloned()
    }

    fn item(&self, name: &str) -> Option<Item> {
        self.items.iter().find(|i| i.name() == name).cloned()
    }

    fn shop(&self, name: &str) -> Option<ShopDefinition> {
        self.shops.iter().find(|s| s.name == name).cloned()
    }

    fn shop_names(&self) -> Vec<String> {
        self.shops.iter().map(|s| s.name.clone()).collect()
    }

    fn config(&self) -> GameConfig {
        self.config.clone()
    }
}
