//! Fixed key sets for the stat tables.
//!
//! Every stat lookup is keyed by one of these enumerations. The string forms
//! (via `strum`) are what content files and diagnostics use; parsing an
//! unknown name is the only way to produce an invalid key.

/// Entries of the base stat list.
///
/// Attack, Defense and Magic are derived and never set by content.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKey {
    Attack,
    Defense,
    Magic,
    Strength,
    Speed,
    Intelligence,
    WillPower,
    Stamina,
}

impl StatKey {
    /// Returns true for stats computed by `Stats::update_stats`.
    pub const fn is_derived(self) -> bool {
        matches!(self, Self::Attack | Self::Defense | Self::Magic)
    }

    /// The modifier entry that feeds this stat, if any.
    pub const fn modifier(self) -> Option<ModifierKey> {
        match self {
            Self::Strength => Some(ModifierKey::Strength),
            Self::Speed => Some(ModifierKey::Speed),
            Self::Intelligence => Some(ModifierKey::Intelligence),
            Self::WillPower => Some(ModifierKey::WillPower),
            Self::Stamina => Some(ModifierKey::Stamina),
            Self::Attack | Self::Defense | Self::Magic => None,
        }
    }
}

/// Entries of the modifier list (transient bonuses from equipped gear).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum ModifierKey {
    Strength,
    Speed,
    Intelligence,
    WillPower,
    Stamina,
}

impl ModifierKey {
    /// The base stat this modifier is added to.
    pub const fn stat(self) -> StatKey {
        match self {
            Self::Strength => StatKey::Strength,
            Self::Speed => StatKey::Speed,
            Self::Intelligence => StatKey::Intelligence,
            Self::WillPower => StatKey::WillPower,
            Self::Stamina => StatKey::Stamina,
        }
    }
}

/// The five equipment attachment points on a character.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Headgear,
    #[strum(to_string = "ChestBody", serialize = "Chest")]
    ChestBody,
    Footwear,
    Relic,
}

impl EquipSlot {
    /// Short label used by the menus.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Weapon => "Weapon",
            Self::Headgear => "Head",
            Self::ChestBody => "Chest",
            Self::Footwear => "Feet",
            Self::Relic => "Relic",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(StatKey::from_str("willpower"), Ok(StatKey::WillPower));
        assert_eq!(EquipSlot::from_str("Chest"), Ok(EquipSlot::ChestBody));
        assert_eq!(EquipSlot::from_str("ChestBody"), Ok(EquipSlot::ChestBody));
        assert!(ModifierKey::from_str("Attack").is_err());
    }

    #[test]
    fn every_modifier_maps_back() {
        for key in ModifierKey::iter() {
            assert_eq!(key.stat().modifier(), Some(key));
        }
        assert!(StatKey::iter().filter(|key| key.is_derived()).all(|key| key.modifier().is_none()));
    }
}
