//! Party inventory: consumable stacks plus equipment records.
//!
//! Both lists are de-duplicated by name. Equipment records are owned by the
//! inventory's [`EquipmentArena`]; the list only fixes display order.

use crate::actor::Actor;
use crate::equipment::{Equipment, EquipmentArena, EquipmentId};
use crate::error::{ErrorSeverity, GameError};
use crate::item::{Item, ItemEffect, ItemUseError};
use crate::stack::StackError;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    #[error("{name}: {source}")]
    Stack {
        name: String,
        #[source]
        source: StackError,
    },

    #[error("no item at index {index} (inventory holds {len})")]
    ItemIndex { index: usize, len: usize },

    #[error("{id} is not in the inventory")]
    UnknownEquipment { id: EquipmentId },

    #[error("{name}: only {available} of {requested} requested units are free, one is equipped")]
    EquippedUnit {
        name: String,
        requested: u16,
        available: u16,
    },

    #[error(transparent)]
    Use(#[from] ItemUseError),
}

impl GameError for InventoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Stack { .. } | Self::EquippedUnit { .. } | Self::Use(_) => {
                ErrorSeverity::Recoverable
            }
            Self::ItemIndex { .. } | Self::UnknownEquipment { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Stack { .. } => "INVENTORY_STACK",
            Self::ItemIndex { .. } => "INVENTORY_ITEM_INDEX",
            Self::UnknownEquipment { .. } => "INVENTORY_UNKNOWN_EQUIPMENT",
            Self::EquippedUnit { .. } => "INVENTORY_EQUIPPED_UNIT",
            Self::Use(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
    equipment: Vec<EquipmentId>,
    arena: EquipmentArena,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    // ===== items =====

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn find_item(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|item| item.name() == name)
    }

    /// Insert a stack, merging into an existing stack of the same name.
    ///
    /// Returns the index the stack lives at. Exceeding the cap fails and
    /// leaves the existing stack as it was.
    pub fn add_item(&mut self, item: Item) -> Result<usize, InventoryError> {
        match self.find_item(item.name()) {
            Some(index) => {
                let existing = &mut self.items[index];
                existing
                    .add(item.count())
                    .map_err(|source| InventoryError::Stack {
                        name: item.name().to_owned(),
                        source,
                    })?;
                Ok(index)
            }
            None => {
                self.items.push(item);
                Ok(self.items.len() - 1)
            }
        }
    }

    pub fn remove_item(&mut self, index: usize) -> Result<Item, InventoryError> {
        self.check_item_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Remove `count` units, dropping the stack when it reaches 0.
    pub fn decrement_item(&mut self, index: usize, count: u16) -> Result<(), InventoryError> {
        self.check_item_index(index)?;
        let item = &mut self.items[index];
        item.remove(count).map_err(|source| InventoryError::Stack {
            name: item.name().to_owned(),
            source,
        })?;
        if item.count() == 0 {
            self.items.remove(index);
        }
        Ok(())
    }

    /// Use one unit of the item at `index` on `target`.
    pub fn use_item(&mut self, index: usize, target: &mut Actor) -> Result<ItemEffect, InventoryError> {
        self.check_item_index(index)?;
        let effect = self.items[index].use_on(target)?;
        if self.items[index].count() == 0 {
            let used_up = self.items.remove(index);
            tracing::debug!(item = used_up.name(), "stack used up");
        }
        Ok(effect)
    }

    fn check_item_index(&self, index: usize) -> Result<(), InventoryError> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(InventoryError::ItemIndex {
                index,
                len: self.items.len(),
            })
        }
    }

    // ===== equipment =====

    /// Equipment ids in display order.
    pub fn equipment_ids(&self) -> &[EquipmentId] {
        &self.equipment
    }

    pub fn equipment(&self, id: EquipmentId) -> Option<&Equipment> {
        self.arena.get(id)
    }

    /// Equipment records in display order.
    pub fn equipment_iter(&self) -> impl Iterator<Item = (EquipmentId, &Equipment)> {
        self.equipment
            .iter()
            .filter_map(|&id| Some((id, self.arena.get(id)?)))
    }

    pub fn find_equipment(&self, name: &str) -> Option<EquipmentId> {
        self.equipment_iter()
            .find_map(|(id, equipment)| (equipment.name() == name).then_some(id))
    }

    pub fn arena(&self) -> &EquipmentArena {
        &self.arena
    }

    pub(crate) fn arena_mut(&mut self) -> &mut EquipmentArena {
        &mut self.arena
    }

    /// Insert a stack, merging into an existing record of the same name.
    pub fn add_equipment(&mut self, equipment: Equipment) -> Result<EquipmentId, InventoryError> {
        match self.find_equipment(equipment.name()) {
            Some(id) => {
                let existing = self
                    .arena
                    .get_mut(id)
                    .ok_or(InventoryError::UnknownEquipment { id })?;
                existing
                    .add(equipment.count())
                    .map_err(|source| InventoryError::Stack {
                        name: equipment.name().to_owned(),
                        source,
                    })?;
                Ok(id)
            }
            None => {
                let id = self.arena.insert(equipment.with_count(equipment.count()));
                self.equipment.push(id);
                Ok(id)
            }
        }
    }

    /// Remove a whole record. An equipped record cannot be removed.
    pub fn remove_equipment(&mut self, id: EquipmentId) -> Result<Equipment, InventoryError> {
        let equipment = self
            .arena
            .get(id)
            .ok_or(InventoryError::UnknownEquipment { id })?;
        if equipment.is_equipped() {
            return Err(InventoryError::EquippedUnit {
                name: equipment.name().to_owned(),
                requested: equipment.count(),
                available: equipment.available_count(),
            });
        }
        self.equipment.retain(|&listed| listed != id);
        self.arena
            .remove(id)
            .ok_or(InventoryError::UnknownEquipment { id })
    }

    /// Remove `count` units of a record, dropping it when it reaches 0.
    ///
    /// The worn unit of an equipped record is never removed.
    pub fn decrement_equipment(&mut self, id: EquipmentId, count: u16) -> Result<(), InventoryError> {
        let equipment = self
            .arena
            .get_mut(id)
            .ok_or(InventoryError::UnknownEquipment { id })?;
        if equipment.is_equipped() && count > equipment.available_count() {
            return Err(InventoryError::EquippedUnit {
                name: equipment.name().to_owned(),
                requested: count,
                available: equipment.available_count(),
            });
        }
        equipment
            .remove(count)
            .map_err(|source| InventoryError::Stack {
                name: equipment.name().to_owned(),
                source,
            })?;
        if equipment.count() == 0 {
            self.equipment.retain(|&listed| listed != id);
            self.arena.remove(id);
        }
        Ok(())
    }
}
