//! Equip/unequip protocol.
//!
//! Moving gear in or out of a slot is one transaction: every check runs
//! before the first write, so a failed call leaves the character, its stats
//! and the arena untouched. Swapping gear strips the old item's effects before
//! applying the new one, so a slot never contributes twice.
//!
//! Modifier contributions are additive per item. Removing an item takes back
//! exactly what it added, which returns the modifier to 0 when nothing else
//! worn targets the same attribute.

use super::{Equipment, EquipmentArena, EquipmentId};
use crate::actor::Actor;
use crate::error::{ErrorSeverity, GameError};
use crate::stats::{DerivedStats, EquipSlot, Stats};

/// Errors raised by the equip protocol.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    #[error("{id} does not exist")]
    UnknownEquipment { id: EquipmentId },

    #[error("{name} cannot be worn in any slot")]
    NoSlot { name: String },

    #[error("{name} is already equipped")]
    AlreadyEquipped { name: String },

    #[error("{name} is not worn by this character")]
    NotWorn { name: String },

    #[error("nothing is equipped in the {slot} slot")]
    SlotEmpty { slot: EquipSlot },

    #[error("{slot} slot references missing {id}")]
    DanglingSlot { slot: EquipSlot, id: EquipmentId },
}

impl GameError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UnknownEquipment { .. } | Self::NoSlot { .. } | Self::NotWorn { .. } => {
                ErrorSeverity::Validation
            }
            Self::AlreadyEquipped { .. } | Self::SlotEmpty { .. } => ErrorSeverity::Recoverable,
            Self::DanglingSlot { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEquipment { .. } => "EQUIP_UNKNOWN_EQUIPMENT",
            Self::NoSlot { .. } => "EQUIP_NO_SLOT",
            Self::AlreadyEquipped { .. } => "EQUIP_ALREADY_EQUIPPED",
            Self::NotWorn { .. } => "EQUIP_NOT_WORN",
            Self::SlotEmpty { .. } => "EQUIP_SLOT_EMPTY",
            Self::DanglingSlot { .. } => "EQUIP_DANGLING_SLOT",
        }
    }
}

/// Wear `id`, replacing whatever occupied its slot.
///
/// Returns the id of the replaced equipment, if any.
pub fn equip(
    arena: &mut EquipmentArena,
    actor: &mut Actor,
    id: EquipmentId,
) -> Result<Option<EquipmentId>, EquipError> {
    let (slot, previous) = check_equip(arena, actor, id)?;
    let incoming = arena.get(id).ok_or(EquipError::UnknownEquipment { id })?;
    if incoming.is_equipped() {
        return Err(EquipError::AlreadyEquipped {
            name: incoming.name().to_owned(),
        });
    }

    let (stats, loadout) = actor.gear_mut();
    if let Some(old) = previous.and_then(|previous| arena.get_mut(previous)) {
        strip(stats, old, slot);
        old.set_equipped(false);
    }
    if let Some(new) = arena.get_mut(id) {
        apply(stats, new, slot);
        new.set_equipped(true);
    }
    loadout.replace(slot, id);
    stats.update_stats();

    tracing::debug!(actor = actor.id(), %slot, %id, replaced = ?previous, "equipped");
    Ok(previous)
}

/// Empty `slot`, returning the id of the equipment that was worn there.
pub fn unequip(
    arena: &mut EquipmentArena,
    actor: &mut Actor,
    slot: EquipSlot,
) -> Result<EquipmentId, EquipError> {
    let id = actor
        .loadout()
        .get(slot)
        .ok_or(EquipError::SlotEmpty { slot })?;
    let worn = arena
        .get_mut(id)
        .ok_or(EquipError::DanglingSlot { slot, id })?;

    let (stats, loadout) = actor.gear_mut();
    strip(stats, worn, slot);
    worn.set_equipped(false);
    loadout.take(slot);
    stats.update_stats();

    tracing::debug!(actor = actor.id(), %slot, %id, "unequipped");
    Ok(id)
}

/// Take off a specific piece of equipment.
///
/// The slot is resolved from the equipment's category, so gear without a slot
/// (armour of kind `NotArmour`) fails here just as it does in [`equip`].
pub fn remove(
    arena: &mut EquipmentArena,
    actor: &mut Actor,
    id: EquipmentId,
) -> Result<EquipSlot, EquipError> {
    let equipment = arena.get(id).ok_or(EquipError::UnknownEquipment { id })?;
    let slot = equipment.slot().ok_or_else(|| EquipError::NoSlot {
        name: equipment.name().to_owned(),
    })?;
    if actor.loadout().get(slot) != Some(id) {
        return Err(EquipError::NotWorn {
            name: equipment.name().to_owned(),
        });
    }
    unequip(arena, actor, slot)?;
    Ok(slot)
}

/// Attack/Defense the character would have after equipping `id`.
pub fn predict_equip(
    arena: &EquipmentArena,
    actor: &Actor,
    id: EquipmentId,
) -> Result<DerivedStats, EquipError> {
    let (slot, previous) = check_equip(arena, actor, id)?;
    let old = previous.and_then(|previous| arena.get(previous));
    let new = arena.get(id).ok_or(EquipError::UnknownEquipment { id })?;

    Ok(actor.stats().predict(|scratch| {
        if let Some(old) = old {
            strip(scratch, old, slot);
        }
        apply(scratch, new, slot);
    }))
}

/// Resolve the target slot and its current occupant without writing anything.
fn check_equip(
    arena: &EquipmentArena,
    actor: &Actor,
    id: EquipmentId,
) -> Result<(EquipSlot, Option<EquipmentId>), EquipError> {
    let incoming = arena.get(id).ok_or(EquipError::UnknownEquipment { id })?;
    let slot = incoming.slot().ok_or_else(|| EquipError::NoSlot {
        name: incoming.name().to_owned(),
    })?;

    let previous = actor.loadout().get(slot);
    if let Some(previous) = previous {
        if !arena.contains(previous) {
            return Err(EquipError::DanglingSlot { slot, id: previous });
        }
    }
    Ok((slot, previous))
}

fn apply(stats: &mut Stats, equipment: &Equipment, slot: EquipSlot) {
    stats.set_equipment_value(slot, equipment.power());
    if let Some(modifier) = equipment.modifier() {
        match modifier.kind.key() {
            Some(key) => stats.set_modifier(key, stats.modifier(key) + modifier.value),
            None => tracing::trace!(name = equipment.name(), "elemental modifier has no stat"),
        }
    }
}

fn strip(stats: &mut Stats, equipment: &Equipment, slot: EquipSlot) {
    stats.set_equipment_value(slot, 0);
    if let Some(key) = equipment.modifier().and_then(|modifier| modifier.kind.key()) {
        let value = equipment.modifier().map_or(0, |modifier| modifier.value);
        stats.set_modifier(key, stats.modifier(key) - value);
    }
}
