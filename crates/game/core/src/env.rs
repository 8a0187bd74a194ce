//! Read-only access to game content.
//!
//! The oracle hands out fully constructed entities by catalog name. File
//! parsing lives outside this crate; anything that can answer these lookups
//! (a loaded registry, a test fixture) can drive shops and starting parties.

use crate::config::GameConfig;
use crate::equipment::Equipment;
use crate::item::Item;
use crate::shop::ShopDefinition;

pub trait ContentOracle: Send + Sync {
    /// Fresh single-unit equipment stack for a catalog name.
    fn equipment(&self, name: &str) -> Option<Equipment>;

    /// Fresh single-unit item stack for a catalog name.
    fn item(&self, name: &str) -> Option<Item>;

    fn shop(&self, name: &str) -> Option<ShopDefinition>;

    /// Shop names in presentation order.
    fn shop_names(&self) -> Vec<String>;

    fn config(&self) -> GameConfig;
}
