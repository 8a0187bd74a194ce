//! Equipment records, the equipment arena and the equip protocol.
//!
//! An [`Equipment`] is a stack of identical gear. Records live in an
//! [`EquipmentArena`] and are referenced everywhere else (inventory lists,
//! character slots) by [`EquipmentId`].

pub mod arena;
pub mod protocol;

pub use arena::{EquipmentArena, EquipmentId};
pub use protocol::{EquipError, equip, predict_equip, unequip};

use crate::config::GameConfig;
use crate::stack::{self, StackError};
use crate::stats::{EquipSlot, ModifierKey};

/// Weapon categories.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum WeaponKind {
    #[default]
    Sword,
    Dagger,
    Bow,
    Staff,
}

/// Armour categories. `NotArmour` has no slot and cannot be worn.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ArmourKind {
    Headgear,
    #[strum(to_string = "ChestBody", serialize = "Chest")]
    ChestBody,
    Footwear,
    #[default]
    NotArmour,
}

impl ArmourKind {
    pub const fn slot(self) -> Option<EquipSlot> {
        match self {
            Self::Headgear => Some(EquipSlot::Headgear),
            Self::ChestBody => Some(EquipSlot::ChestBody),
            Self::Footwear => Some(EquipSlot::Footwear),
            Self::NotArmour => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponProperties {
    pub attack_power: i32,
    pub kind: WeaponKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmourProperties {
    pub defense_power: i32,
    pub kind: ArmourKind,
}

/// The two concrete equipment variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipmentProperties {
    Weapon(WeaponProperties),
    Armour(ArmourProperties),
}

impl EquipmentProperties {
    /// Slot this equipment occupies when worn.
    pub const fn slot(&self) -> Option<EquipSlot> {
        match self {
            Self::Weapon(_) => Some(EquipSlot::Weapon),
            Self::Armour(armour) => armour.kind.slot(),
        }
    }

    /// Attack power for weapons, defense power for armour.
    pub const fn power(&self) -> i32 {
        match self {
            Self::Weapon(weapon) => weapon.attack_power,
            Self::Armour(armour) => armour.defense_power,
        }
    }

    pub const fn is_weapon(&self) -> bool {
        matches!(self, Self::Weapon(_))
    }
}

/// Attribute a stat modifier targets.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ModifierKind {
    Strength,
    Speed,
    Intelligence,
    WillPower,
    Stamina,
    /// Categorization only; never touches the stat table.
    Elemental,
}

impl ModifierKind {
    pub const fn key(self) -> Option<ModifierKey> {
        match self {
            Self::Strength => Some(ModifierKey::Strength),
            Self::Speed => Some(ModifierKey::Speed),
            Self::Intelligence => Some(ModifierKey::Intelligence),
            Self::WillPower => Some(ModifierKey::WillPower),
            Self::Stamina => Some(ModifierKey::Stamina),
            Self::Elemental => None,
        }
    }
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ElementalKind {
    #[default]
    None,
    Fire,
    Earth,
    Wind,
    Ice,
    Water,
    Lightning,
}

/// Additive bonus applied to one attribute while the gear is worn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatModifier {
    pub value: i32,
    pub kind: ModifierKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub elemental: ElementalKind,
}

impl StatModifier {
    pub const fn new(value: i32, kind: ModifierKind) -> Self {
        Self {
            value,
            kind,
            elemental: ElementalKind::None,
        }
    }

    pub const fn with_elemental(mut self, elemental: ElementalKind) -> Self {
        self.elemental = elemental;
        self
    }
}

/// A stack of identical gear.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    name: String,
    description: String,
    buy_price: u32,
    sell_price: u32,
    count: u16,
    equipped: bool,
    properties: EquipmentProperties,
    modifier: Option<StatModifier>,
}

impl Equipment {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        buy_price: u32,
        properties: EquipmentProperties,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            buy_price,
            sell_price: buy_price / 2,
            count: 1,
            equipped: false,
            properties,
            modifier: None,
        }
    }

    pub fn weapon(
        name: impl Into<String>,
        description: impl Into<String>,
        buy_price: u32,
        properties: WeaponProperties,
    ) -> Self {
        Self::new(
            name,
            description,
            buy_price,
            EquipmentProperties::Weapon(properties),
        )
    }

    pub fn armour(
        name: impl Into<String>,
        description: impl Into<String>,
        buy_price: u32,
        properties: ArmourProperties,
    ) -> Self {
        Self::new(
            name,
            description,
            buy_price,
            EquipmentProperties::Armour(properties),
        )
    }

    #[must_use]
    pub fn with_modifier(mut self, modifier: StatModifier) -> Self {
        self.modifier = Some(modifier);
        self
    }

    /// Fresh unequipped stack of `count` units with the same definition.
    pub fn with_count(&self, count: u16) -> Self {
        Self {
            count: count.clamp(1, GameConfig::MAX_EQUIPMENT_COUNT),
            equipped: false,
            ..self.clone()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn buy_price(&self) -> u32 {
        self.buy_price
    }

    pub fn sell_price(&self) -> u32 {
        self.sell_price
    }

    pub fn count(&self) -> u16 {
        self.count
    }

    pub fn max_count(&self) -> u16 {
        GameConfig::MAX_EQUIPMENT_COUNT
    }

    pub fn properties(&self) -> &EquipmentProperties {
        &self.properties
    }

    pub fn modifier(&self) -> Option<&StatModifier> {
        self.modifier.as_ref()
    }

    pub fn slot(&self) -> Option<EquipSlot> {
        self.properties.slot()
    }

    pub fn power(&self) -> i32 {
        self.properties.power()
    }

    pub fn is_equipped(&self) -> bool {
        self.equipped
    }

    /// Units that may leave the inventory; the worn unit never does.
    pub fn available_count(&self) -> u16 {
        self.count - u16::from(self.equipped)
    }

    pub fn add(&mut self, count: u16) -> Result<(), StackError> {
        self.count = stack::checked_add(self.count, count, GameConfig::MAX_EQUIPMENT_COUNT)?;
        Ok(())
    }

    pub fn remove(&mut self, count: u16) -> Result<(), StackError> {
        self.count = stack::checked_remove(self.count, count)?;
        Ok(())
    }

    pub(crate) fn set_equipped(&mut self, equipped: bool) {
        self.equipped = equipped;
    }
}
