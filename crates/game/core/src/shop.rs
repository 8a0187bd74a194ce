//! Shops and their stock.

use crate::env::ContentOracle;
use crate::equipment::Equipment;
use crate::error::{ErrorSeverity, GameError};
use crate::inventory::{Inventory, InventoryError};
use crate::item::Item;

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ShopKind {
    Weapon,
    Armour,
    Relic,
    Item,
}

impl ShopKind {
    pub const fn sells_equipment(self) -> bool {
        !matches!(self, Self::Item)
    }

    /// Whether this shop deals in `equipment`. Relic shops take any gear.
    pub fn accepts_equipment(self, equipment: &Equipment) -> bool {
        match self {
            Self::Weapon => equipment.properties().is_weapon(),
            Self::Armour => !equipment.properties().is_weapon(),
            Self::Relic => true,
            Self::Item => false,
        }
    }

    /// Whether this shop deals in `item`. Key items are never traded.
    pub fn accepts_item(self, item: &Item) -> bool {
        matches!(self, Self::Item) && !item.kind().is_key_item()
    }
}

/// Shop as described by content data: a kind and a list of catalog names.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShopDefinition {
    pub name: String,
    pub kind: ShopKind,
    pub stock: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ShopError {
    #[error("shop {shop}: unknown catalog entry {name}")]
    UnknownEntry { shop: String, name: String },

    #[error("shop {shop}: {name} cannot be stocked by a {kind} shop")]
    WrongKind {
        shop: String,
        name: String,
        kind: ShopKind,
    },

    #[error("shop {shop}: {source}")]
    Stock {
        shop: String,
        #[source]
        source: InventoryError,
    },
}

impl GameError for ShopError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntry { .. } => "SHOP_UNKNOWN_ENTRY",
            Self::WrongKind { .. } => "SHOP_WRONG_KIND",
            Self::Stock { .. } => "SHOP_STOCK",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shop {
    name: String,
    kind: ShopKind,
    stock: Inventory,
}

impl Shop {
    /// Build a shop by resolving every stock name through `content`.
    pub fn from_definition(
        definition: &ShopDefinition,
        content: &dyn ContentOracle,
    ) -> Result<Self, ShopError> {
        let shop = &definition.name;
        let kind = definition.kind;
        let mut stock = Inventory::new();

        for name in &definition.stock {
            let stocked = if kind.sells_equipment() {
                let equipment = content
                    .equipment(name)
                    .ok_or_else(|| ShopError::UnknownEntry {
                        shop: shop.clone(),
                        name: name.clone(),
                    })?;
                if !kind.accepts_equipment(&equipment) {
                    return Err(ShopError::WrongKind {
                        shop: shop.clone(),
                        name: name.clone(),
                        kind,
                    });
                }
                stock.add_equipment(equipment).map(drop)
            } else {
                let item = content.item(name).ok_or_else(|| ShopError::UnknownEntry {
                    shop: shop.clone(),
                    name: name.clone(),
                })?;
                stock.add_item(item).map(drop)
            };
            stocked.map_err(|source| ShopError::Stock {
                shop: shop.clone(),
                source,
            })?;
        }

        tracing::debug!(shop = %shop, %kind, entries = definition.stock.len(), "shop stocked");
        Ok(Self {
            name: shop.clone(),
            kind,
            stock,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ShopKind {
        self.kind
    }

    pub fn stock(&self) -> &Inventory {
        &self.stock
    }
}

/// Largest quantity purchasable at `price` with `gold`, given `owned` units
/// already in a stack capped at `max`.
pub fn max_purchase(price: u32, gold: u32, owned: u16, max: u16) -> u16 {
    let room = max.saturating_sub(owned);
    let affordable = gold.checked_div(price).unwrap_or(u32::from(room));
    u16::try_from(affordable).unwrap_or(u16::MAX).min(room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::equipment::{ArmourKind, ArmourProperties, WeaponKind, WeaponProperties};
    use crate::item::ItemKind;

    struct Catalog;

    impl ContentOracle for Catalog {
        fn equipment(&self, name: &str) -> Option<Equipment> {
            match name {
                "Short Sword" => Some(Equipment::weapon(
                    name,
                    "",
                    100,
                    WeaponProperties {
                        attack_power: 15,
                        kind: WeaponKind::Sword,
                    },
                )),
                "Iron Helmet" => Some(Equipment::armour(
                    name,
                    "",
                    80,
                    ArmourProperties {
                        defense_power: 5,
                        kind: ArmourKind::Headgear,
                    },
                )),
                _ => None,
            }
        }

        fn item(&self, name: &str) -> Option<Item> {
            (name == "Potion").then(|| Item::new(name, "", ItemKind::Health, 25, 20))
        }

        fn shop(&self, _name: &str) -> Option<ShopDefinition> {
            None
        }

        fn shop_names(&self) -> Vec<String> {
            Vec::new()
        }

        fn config(&self) -> GameConfig {
            GameConfig::default()
        }
    }

    fn definition(kind: ShopKind, stock: &[&str]) -> ShopDefinition {
        ShopDefinition {
            name: "Test Shop".into(),
            kind,
            stock: stock.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn weapon_shop_stocks_weapons() {
        let shop =
            Shop::from_definition(&definition(ShopKind::Weapon, &["Short Sword"]), &Catalog)
                .unwrap();
        assert_eq!(shop.stock().equipment_ids().len(), 1);
        assert!(shop.stock().find_equipment("Short Sword").is_some());
    }

    #[test]
    fn wrong_kind_is_rejected() {
        assert!(matches!(
            Shop::from_definition(&definition(ShopKind::Weapon, &["Iron Helmet"]), &Catalog),
            Err(ShopError::WrongKind { .. })
        ));
        assert!(matches!(
            Shop::from_definition(&definition(ShopKind::Item, &["Short Sword"]), &Catalog),
            Err(ShopError::UnknownEntry { .. })
        ));
    }

    #[test]
    fn relic_shop_accepts_any_gear() {
        let shop = Shop::from_definition(
            &definition(ShopKind::Relic, &["Short Sword", "Iron Helmet"]),
            &Catalog,
        )
        .unwrap();
        assert_eq!(shop.stock().equipment_ids().len(), 2);
    }

    #[test]
    fn purchase_limit_respects_gold_and_cap() {
        assert_eq!(max_purchase(20, 500, 0, 99), 25);
        assert_eq!(max_purchase(20, 500, 90, 99), 9);
        assert_eq!(max_purchase(0, 0, 10, 50), 40);
        assert_eq!(max_purchase(100, 99, 0, 50), 0);
    }
}
