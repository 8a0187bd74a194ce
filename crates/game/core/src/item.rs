//! Consumable items.

use crate::actor::Actor;
use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::stack::{self, StackError};

/// Item categories. Only `Health` and `Revive` are usable from menus.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ItemKind {
    #[default]
    Health,
    Revive,
    StatusEffect,
    Battle,
    KeyItem,
}

impl ItemKind {
    pub const fn is_key_item(self) -> bool {
        matches!(self, Self::KeyItem)
    }

    pub const fn is_usable(self) -> bool {
        matches!(self, Self::Health | Self::Revive)
    }
}

/// Errors raised when an item cannot be used on a target.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemUseError {
    #[error("{target} is dead")]
    TargetDead { target: String },

    #[error("{target} is already at full health")]
    FullHealth { target: String },

    #[error("{target} is not dead")]
    NotDead { target: String },

    #[error("{item} ({kind}) cannot be used here")]
    NotUsable { item: String, kind: ItemKind },

    #[error("no {item} left")]
    Empty { item: String },
}

impl GameError for ItemUseError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::TargetDead { .. } => "ITEM_TARGET_DEAD",
            Self::FullHealth { .. } => "ITEM_FULL_HEALTH",
            Self::NotDead { .. } => "ITEM_NOT_DEAD",
            Self::NotUsable { .. } => "ITEM_NOT_USABLE",
            Self::Empty { .. } => "ITEM_EMPTY",
        }
    }
}

/// What a successful use did to the target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemEffect {
    /// HP actually restored.
    Healed(u32),
    /// HP the target came back with.
    Revived(u32),
}

/// A stack of identical consumables.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    name: String,
    description: String,
    kind: ItemKind,
    count: u16,
    value: u32,
    buy_price: u32,
    sell_price: u32,
}

impl Item {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: ItemKind,
        value: u32,
        buy_price: u32,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            kind,
            count: 1,
            value,
            buy_price,
            sell_price: buy_price / 2,
        }
    }

    /// Fresh stack of `count` units with the same definition.
    pub fn with_count(&self, count: u16) -> Self {
        Self {
            count: count.clamp(1, GameConfig::MAX_ITEM_COUNT),
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn max_count(&self) -> u16 {
        GameConfig::MAX_ITEM_COUNT
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn buy_price(&self) -> u32 {
        self.buy_price
    }

    pub fn sell_price(&self) -> u32 {
        self.sell_price
    }

    pub fn add(&mut self, count: u16) -> Result<(), StackError> {
        self.count = stack::checked_add(self.count, count, GameConfig::MAX_ITEM_COUNT)?;
        Ok(())
    }

    pub fn remove(&mut self, count: u16) -> Result<(), StackError> {
        self.count = stack::checked_remove(self.count, count)?;
        Ok(())
    }

    /// Check that using this item on `target` would succeed.
    pub fn can_use_on(&self, target: &Actor) -> Result<(), ItemUseError> {
        if self.count == 0 {
            return Err(ItemUseError::Empty {
                item: self.name.clone(),
            });
        }
        match self.kind {
            ItemKind::Health if target.is_dead() => Err(ItemUseError::TargetDead {
                target: target.name().to_owned(),
            }),
            ItemKind::Health if target.hp() >= target.max_hp() => Err(ItemUseError::FullHealth {
                target: target.name().to_owned(),
            }),
            ItemKind::Revive if !target.is_dead() => Err(ItemUseError::NotDead {
                target: target.name().to_owned(),
            }),
            ItemKind::Health | ItemKind::Revive => Ok(()),
            kind @ (ItemKind::StatusEffect | ItemKind::Battle | ItemKind::KeyItem) => {
                Err(ItemUseError::NotUsable {
                    item: self.name.clone(),
                    kind,
                })
            }
        }
    }

    /// Apply the item's effect to `target` and consume one unit.
    ///
    /// On error neither the item nor the target is changed.
    pub fn use_on(&mut self, target: &mut Actor) -> Result<ItemEffect, ItemUseError> {
        self.can_use_on(target)?;
        let effect = match self.kind {
            ItemKind::Revive => {
                target.revive(self.value);
                ItemEffect::Revived(target.hp())
            }
            _ => ItemEffect::Healed(target.heal(self.value)),
        };
        self.count -= 1;
        Ok(effect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorKind;

    fn potion() -> Item {
        Item::new("Potion", "Restores 25 HP", ItemKind::Health, 25, 20)
    }

    fn hero() -> Actor {
        Actor::new("Player", "test_player", ActorKind::Warrior, 1, 100)
    }

    #[test]
    fn potion_heals_wounded_and_is_consumed() {
        let mut potion = potion().with_count(2);
        let mut actor = hero();
        actor.take_damage(40);

        assert_eq!(potion.use_on(&mut actor), Ok(ItemEffect::Healed(25)));
        assert_eq!(actor.hp(), 85);
        assert_eq!(potion.count(), 1);
    }

    #[test]
    fn potion_on_full_health_is_not_consumed() {
        let mut potion = potion();
        let mut actor = hero();
        assert!(matches!(
            potion.use_on(&mut actor),
            Err(ItemUseError::FullHealth { .. })
        ));
        assert_eq!(potion.count(), 1);
    }

    #[test]
    fn potion_on_dead_fails() {
        let mut potion = potion();
        let mut actor = hero();
        actor.take_damage(100);
        assert!(matches!(
            potion.use_on(&mut actor),
            Err(ItemUseError::TargetDead { .. })
        ));
        assert_eq!(actor.hp(), 0);
    }

    #[test]
    fn phoenix_down_only_revives_the_dead() {
        let mut feather = Item::new("Phoenix Down", "", ItemKind::Revive, 30, 100).with_count(2);
        let mut actor = hero();
        assert!(matches!(
            feather.use_on(&mut actor),
            Err(ItemUseError::NotDead { .. })
        ));

        actor.take_damage(100);
        assert_eq!(feather.use_on(&mut actor), Ok(ItemEffect::Revived(30)));
        assert!(!actor.is_dead());
        assert_eq!(feather.count(), 1);
    }

    #[test]
    fn key_items_are_not_usable() {
        let mut key = Item::new("Rusty Key", "", ItemKind::KeyItem, 0, 0);
        let mut actor = hero();
        actor.take_damage(10);
        assert!(matches!(
            key.use_on(&mut actor),
            Err(ItemUseError::NotUsable {
                kind: ItemKind::KeyItem,
                ..
            })
        ));
        assert_eq!(key.count(), 1);
    }

    #[test]
    fn item_count_caps_at_99() {
        let mut potion = potion();
        assert!(potion.add(98).is_ok());
        assert!(potion.add(1).is_err());
        assert_eq!(potion.count(), 99);
        assert_eq!(potion.sell_price(), 10);
    }
}
