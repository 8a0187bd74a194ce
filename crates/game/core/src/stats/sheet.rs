//! The per-character stat table.
//!
//! Three parallel tables keyed by the fixed enumerations in [`super::keys`]:
//! base stats, gear modifiers and per-slot equipment values. Typed accessors
//! cannot fail. The `*_by_name` accessors exist for data files and debugging;
//! an unknown name is logged and treated as 0.

use core::str::FromStr;

use strum::EnumCount;

use super::derived::DerivedStats;
use super::keys::{EquipSlot, ModifierKey, StatKey};

/// Errors raised while resolving stat names.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatsError {
    #[error("[{name}] is not a valid stat")]
    UnknownStat { name: String },

    #[error("[{name}] is not a valid modifier")]
    UnknownModifier { name: String },

    #[error("{key} is derived and cannot be set directly")]
    DerivedStat { key: StatKey },
}

impl crate::error::GameError for StatsError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStat { .. } => "STATS_UNKNOWN_STAT",
            Self::UnknownModifier { .. } => "STATS_UNKNOWN_MODIFIER",
            Self::DerivedStat { .. } => "STATS_DERIVED_STAT",
        }
    }
}

/// Base attribute values a character is created with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: i32,
    pub intelligence: i32,
    pub speed: i32,
    pub willpower: i32,
    pub stamina: i32,
}

impl Default for BaseAttributes {
    /// Starting attributes of a freshly created character.
    fn default() -> Self {
        Self {
            strength: 10,
            intelligence: 3,
            speed: 5,
            willpower: 5,
            stamina: 7,
        }
    }
}

/// Stat table owned by every character.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    base: [i32; StatKey::COUNT],
    modifiers: [i32; ModifierKey::COUNT],
    equipment: [i32; EquipSlot::COUNT],
}

impl Stats {
    /// Create a stat table from base attributes and derive Attack/Defense.
    pub fn new(attributes: BaseAttributes) -> Self {
        let mut base = [0; StatKey::COUNT];
        base[StatKey::Strength as usize] = attributes.strength;
        base[StatKey::Intelligence as usize] = attributes.intelligence;
        base[StatKey::Speed as usize] = attributes.speed;
        base[StatKey::WillPower as usize] = attributes.willpower;
        base[StatKey::Stamina as usize] = attributes.stamina;

        let mut stats = Self {
            base,
            modifiers: [0; ModifierKey::COUNT],
            equipment: [0; EquipSlot::COUNT],
        };
        stats.update_stats();
        stats
    }

    pub fn stat(&self, key: StatKey) -> i32 {
        self.base[key as usize]
    }

    /// Overwrite a base stat.
    ///
    /// Derived stats are owned by [`Stats::update_stats`]; attempts to set
    /// them are rejected.
    pub fn set_stat(&mut self, key: StatKey, value: i32) -> Result<(), StatsError> {
        if key.is_derived() {
            return Err(StatsError::DerivedStat { key });
        }
        self.base[key as usize] = value;
        Ok(())
    }

    pub fn modifier(&self, key: ModifierKey) -> i32 {
        self.modifiers[key as usize]
    }

    pub fn set_modifier(&mut self, key: ModifierKey, value: i32) {
        self.modifiers[key as usize] = value;
    }

    pub fn equipment_value(&self, slot: EquipSlot) -> i32 {
        self.equipment[slot as usize]
    }

    pub fn set_equipment_value(&mut self, slot: EquipSlot, value: i32) {
        self.equipment[slot as usize] = value;
    }

    /// Base value plus gear modifier.
    pub fn effective(&self, key: ModifierKey) -> i32 {
        self.stat(key.stat()) + self.modifier(key)
    }

    pub fn attack(&self) -> i32 {
        self.stat(StatKey::Attack)
    }

    pub fn defense(&self) -> i32 {
        self.stat(StatKey::Defense)
    }

    /// Recompute Attack and Defense from the current tables.
    pub fn update_stats(&mut self) {
        let derived = DerivedStats::compute(self);
        self.base[StatKey::Attack as usize] = derived.attack;
        self.base[StatKey::Defense as usize] = derived.defense;
    }

    /// Derived stats after applying `change` to a scratch copy.
    ///
    /// `self` is left untouched; used to preview equipment swaps.
    pub fn predict(&self, change: impl FnOnce(&mut Stats)) -> DerivedStats {
        let mut scratch = self.clone();
        change(&mut scratch);
        DerivedStats::compute(&scratch)
    }

    // ===== name-based access =====

    pub fn stat_by_name(&self, name: &str) -> i32 {
        match parse_stat(name) {
            Ok(key) => self.stat(key),
            Err(error) => {
                tracing::error!("{error}");
                0
            }
        }
    }

    pub fn set_stat_by_name(&mut self, name: &str, value: i32) {
        let result = parse_stat(name).and_then(|key| self.set_stat(key, value));
        if let Err(error) = result {
            tracing::error!("{error}");
        }
    }

    pub fn modifier_by_name(&self, name: &str) -> i32 {
        match parse_modifier(name) {
            Ok(key) => self.modifier(key),
            Err(error) => {
                tracing::error!("{error}");
                0
            }
        }
    }

    pub fn set_modifier_by_name(&mut self, name: &str, value: i32) {
        match parse_modifier(name) {
            Ok(key) => self.set_modifier(key, value),
            Err(error) => tracing::error!("{error}"),
        }
    }
}

impl Default for Stats {
    /// All attributes zero.
    fn default() -> Self {
        Self::new(BaseAttributes {
            strength: 0,
            intelligence: 0,
            speed: 0,
            willpower: 0,
            stamina: 0,
        })
    }
}

fn parse_stat(name: &str) -> Result<StatKey, StatsError> {
    StatKey::from_str(name).map_err(|_| StatsError::UnknownStat {
        name: name.to_owned(),
    })
}

fn parse_modifier(name: &str) -> Result<ModifierKey, StatsError> {
    ModifierKey::from_str(name).map_err(|_| StatsError::UnknownModifier {
        name: name.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_derives_attack_and_defense() {
        let stats = Stats::new(BaseAttributes::default());
        // 10 + 3/5 + 5/5
        assert_eq!(stats.attack(), 11);
        // 10/5 + 3/5 + 5/5 + 5/5
        assert_eq!(stats.defense(), 4);
        assert_eq!(stats.stat(StatKey::Magic), 0);
    }

    #[test]
    fn unknown_names_are_neutral() {
        let mut stats = Stats::new(BaseAttributes::default());
        let before = stats.clone();

        assert_eq!(stats.stat_by_name("Luck"), 0);
        assert_eq!(stats.modifier_by_name("Attack"), 0);
        stats.set_stat_by_name("Luck", 99);
        stats.set_modifier_by_name("Defense", 99);

        assert_eq!(stats, before);
    }

    #[test]
    fn name_access_matches_typed_access() {
        let mut stats = Stats::new(BaseAttributes::default());
        stats.set_modifier_by_name("Strength", 3);
        assert_eq!(stats.modifier(ModifierKey::Strength), 3);
        assert_eq!(stats.stat_by_name("WillPower"), 5);
        assert_eq!(stats.effective(ModifierKey::Strength), 13);
    }

    #[test]
    fn derived_stats_cannot_be_set() {
        let mut stats = Stats::new(BaseAttributes::default());
        assert_eq!(
            stats.set_stat(StatKey::Attack, 50),
            Err(StatsError::DerivedStat {
                key: StatKey::Attack
            })
        );
        stats.set_stat_by_name("Defense", 50);
        assert_eq!(stats.defense(), 4);
    }

    #[test]
    fn predict_leaves_table_untouched() {
        let stats = Stats::new(BaseAttributes::default());
        let predicted = stats.predict(|scratch| {
            scratch.set_equipment_value(EquipSlot::Weapon, 15);
            scratch.set_modifier(ModifierKey::Strength, 3);
        });
        assert_eq!(predicted.attack, 11 + 15 + 3);
        assert_eq!(stats.attack(), 11);
    }
}
