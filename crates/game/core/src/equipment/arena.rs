//! Arena of equipment records with stable ids.
//!
//! Ids are never reused: removing a record leaves a hole so that an id held
//! by a stale reference resolves to `None` instead of a different record.

use super::Equipment;

/// Opaque handle to an equipment record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentId(pub u32);

impl core::fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "equipment#{}", self.0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipmentArena {
    records: Vec<Option<Equipment>>,
}

impl EquipmentArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, equipment: Equipment) -> EquipmentId {
        let id = EquipmentId(self.records.len() as u32);
        self.records.push(Some(equipment));
        id
    }

    pub fn get(&self, id: EquipmentId) -> Option<&Equipment> {
        self.records.get(id.0 as usize)?.as_ref()
    }

    pub fn get_mut(&mut self, id: EquipmentId) -> Option<&mut Equipment> {
        self.records.get_mut(id.0 as usize)?.as_mut()
    }

    pub fn remove(&mut self, id: EquipmentId) -> Option<Equipment> {
        self.records.get_mut(id.0 as usize)?.take()
    }

    pub fn contains(&self, id: EquipmentId) -> bool {
        self.get(id).is_some()
    }

    /// Live records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (EquipmentId, &Equipment)> {
        self.records
            .iter()
            .enumerate()
            .filter_map(|(index, record)| Some((EquipmentId(index as u32), record.as_ref()?)))
    }

    pub fn len(&self) -> usize {
        self.records.iter().filter(|record| record.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
