//! Derived Stats - Attack and Defense.
//!
//! Derived stats are never stored independently of their inputs: they are
//! recomputed from the equipment values and the modified base attributes
//! whenever the equip protocol asks for it.
//!
//! ```text
//! Attack  = Weapon + STR + INT/5 + WIL/5
//! Defense = Headgear + ChestBody + Footwear + STR/5 + INT/5 + SPD/5 + WIL/5
//! ```
//!
//! Every attribute term uses its modified value (base + modifier) and the
//! divisions truncate. That truncation is part of the balancing and must not
//! be replaced by rounding.

use super::keys::{EquipSlot, ModifierKey};
use super::sheet::Stats;
use crate::config::GameConfig;

/// Attack/Defense pair produced by the derivation formula.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DerivedStats {
    pub attack: i32,
    pub defense: i32,
}

impl DerivedStats {
    /// Compute derived stats from the current contents of a stat table.
    pub fn compute(stats: &Stats) -> Self {
        let div = GameConfig::STAT_DIVISOR;

        let strength = stats.effective(ModifierKey::Strength);
        let intelligence = stats.effective(ModifierKey::Intelligence);
        let speed = stats.effective(ModifierKey::Speed);
        let willpower = stats.effective(ModifierKey::WillPower);

        let attack = stats.equipment_value(EquipSlot::Weapon)
            + strength
            + intelligence / div
            + willpower / div;

        let defense = stats.equipment_value(EquipSlot::Headgear)
            + stats.equipment_value(EquipSlot::ChestBody)
            + stats.equipment_value(EquipSlot::Footwear)
            + strength / div
            + intelligence / div
            + speed / div
            + willpower / div;

        Self { attack, defense }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::BaseAttributes;

    fn base() -> Stats {
        Stats::new(BaseAttributes {
            strength: 10,
            intelligence: 5,
            speed: 5,
            willpower: 5,
            stamina: 7,
        })
    }

    #[test]
    fn attack_uses_full_strength_and_fifths() {
        let stats = base();
        assert_eq!(DerivedStats::compute(&stats).attack, 12);
    }

    #[test]
    fn defense_sums_armour_slots() {
        let mut stats = base();
        stats.set_equipment_value(EquipSlot::Headgear, 5);
        stats.set_equipment_value(EquipSlot::ChestBody, 10);
        stats.set_equipment_value(EquipSlot::Footwear, 0);
        assert_eq!(DerivedStats::compute(&stats).defense, 20);
    }

    #[test]
    fn division_truncates() {
        let mut stats = Stats::new(BaseAttributes {
            strength: 9,
            intelligence: 9,
            speed: 4,
            willpower: 14,
            stamina: 0,
        });
        let derived = DerivedStats::compute(&stats);
        // 9 + 9/5 + 14/5 = 9 + 1 + 2
        assert_eq!(derived.attack, 12);
        // 9/5 + 9/5 + 4/5 + 14/5 = 1 + 1 + 0 + 2
        assert_eq!(derived.defense, 4);

        // The modifier joins the attribute before the division.
        stats.set_modifier(ModifierKey::Intelligence, 1);
        let derived = DerivedStats::compute(&stats);
        // 9 + (9+1)/5 + 14/5 = 9 + 2 + 2
        assert_eq!(derived.attack, 13);
        // 9/5 + 10/5 + 4/5 + 14/5 = 1 + 2 + 0 + 2
        assert_eq!(derived.defense, 5);
    }

    #[test]
    fn relic_slot_does_not_contribute() {
        let mut stats = base();
        let before = DerivedStats::compute(&stats);
        stats.set_equipment_value(EquipSlot::Relic, 40);
        assert_eq!(DerivedStats::compute(&stats), before);
    }
}
