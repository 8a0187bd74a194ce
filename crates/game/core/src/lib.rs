//! Rules and data model of the party/shop/equipment RPG shell.
//!
//! `game-core` owns the characters, their stat tables, the equipment arena,
//! the party inventory and shop transactions. Every mutating operation is
//! transactional: it either succeeds completely or returns an error and leaves
//! the model untouched. Frontends read the model through the types
//! re-exported here and resolve content through [`ContentOracle`].
pub mod actor;
pub mod config;
pub mod env;
pub mod equipment;
pub mod error;
pub mod inventory;
pub mod item;
pub mod party;
pub mod shop;
pub mod stats;

mod stack;

pub use actor::{Actor, ActorError, ActorKind, Loadout};
pub use config::GameConfig;
pub use env::ContentOracle;
pub use equipment::{
    ArmourKind, ArmourProperties, ElementalKind, EquipError, Equipment, EquipmentArena,
    EquipmentId, EquipmentProperties, ModifierKind, StatModifier, WeaponKind, WeaponProperties,
};
pub use error::{ErrorSeverity, GameError};
pub use inventory::{Inventory, InventoryError};
pub use item::{Item, ItemEffect, ItemKind, ItemUseError};
pub use party::{Party, PartyError};
pub use shop::{Shop, ShopDefinition, ShopError, ShopKind};
pub use stack::StackError;
pub use stats::{
    BaseAttributes, DerivedStats, EquipSlot, ModifierKey, StatKey, Stats, StatsError,
};
