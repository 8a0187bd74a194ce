//! Equipment slots worn by a character.

use strum::EnumCount;

use crate::equipment::EquipmentId;
use crate::stats::EquipSlot;

/// Slot → equipment association. An empty slot holds `None`.
///
/// Slots reference records in the party's equipment arena; the record itself
/// stays in the inventory while worn.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loadout {
    slots: [Option<EquipmentId>; EquipSlot::COUNT],
}

impl Loadout {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipSlot) -> Option<EquipmentId> {
        self.slots[slot as usize]
    }

    /// Puts `id` in the slot, returning the previous occupant if any.
    pub fn replace(&mut self, slot: EquipSlot, id: EquipmentId) -> Option<EquipmentId> {
        self.slots[slot as usize].replace(id)
    }

    /// Empties the slot, returning its occupant if any.
    pub fn take(&mut self, slot: EquipSlot) -> Option<EquipmentId> {
        self.slots[slot as usize].take()
    }

    /// Slot currently holding `id`.
    pub fn slot_of(&self, id: EquipmentId) -> Option<EquipSlot> {
        self.iter()
            .find_map(|(slot, occupant)| (occupant == Some(id)).then_some(slot))
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipSlot, Option<EquipmentId>)> + '_ {
        use strum::IntoEnumIterator;
        EquipSlot::iter().map(|slot| (slot, self.get(slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_returns_previous_occupant() {
        let mut loadout = Loadout::empty();
        assert_eq!(loadout.replace(EquipSlot::Weapon, EquipmentId(1)), None);
        assert_eq!(
            loadout.replace(EquipSlot::Weapon, EquipmentId(2)),
            Some(EquipmentId(1))
        );
        assert_eq!(loadout.slot_of(EquipmentId(2)), Some(EquipSlot::Weapon));
        assert_eq!(loadout.take(EquipSlot::Weapon), Some(EquipmentId(2)));
        assert!(loadout.is_empty());
    }
}
