//! The player's party: roster, active lineup, gold and the shared inventory.
//!
//! Members are addressed by their unique identifier. Active members carry a
//! 1-based party position; inactive members have position 0.

use arrayvec::ArrayVec;

use crate::actor::Actor;
use crate::config::GameConfig;
use crate::equipment::{self, EquipError, Equipment, EquipmentId};
use crate::error::{ErrorSeverity, GameError};
use crate::inventory::{Inventory, InventoryError};
use crate::item::{Item, ItemEffect};
use crate::stats::{DerivedStats, EquipSlot};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PartyError {
    #[error("the party already has {max} members")]
    Full { max: usize },

    #[error("{id} is already in the party")]
    DuplicateMember { id: String },

    #[error("no party member with id {id}")]
    UnknownMember { id: String },

    #[error("{id} is not in the active lineup")]
    NotActive { id: String },

    #[error("not enough gold: need {required}, have {available}")]
    InsufficientGold { required: u32, available: u32 },

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    #[error(transparent)]
    Equip(#[from] EquipError),
}

impl GameError for PartyError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Full { .. } | Self::InsufficientGold { .. } => ErrorSeverity::Recoverable,
            Self::DuplicateMember { .. } | Self::UnknownMember { .. } | Self::NotActive { .. } => {
                ErrorSeverity::Validation
            }
            Self::Inventory(error) => error.severity(),
            Self::Equip(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Full { .. } => "PARTY_FULL",
            Self::DuplicateMember { .. } => "PARTY_DUPLICATE_MEMBER",
            Self::UnknownMember { .. } => "PARTY_UNKNOWN_MEMBER",
            Self::NotActive { .. } => "PARTY_NOT_ACTIVE",
            Self::InsufficientGold { .. } => "PARTY_INSUFFICIENT_GOLD",
            Self::Inventory(error) => error.error_code(),
            Self::Equip(error) => error.error_code(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Party {
    members: ArrayVec<Actor, { GameConfig::MAX_PARTY_MEMBERS }>,
    inventory: Inventory,
    gold: u32,
}

impl Default for Party {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}

impl Party {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            members: ArrayVec::new(),
            inventory: Inventory::new(),
            gold: config.starting_gold.min(GameConfig::MAX_GOLD),
        }
    }

    // ===== roster =====

    pub fn members(&self) -> &[Actor] {
        &self.members
    }

    pub fn member(&self, id: &str) -> Option<&Actor> {
        self.members.iter().find(|member| member.id() == id)
    }

    pub fn member_mut(&mut self, id: &str) -> Option<&mut Actor> {
        self.members.iter_mut().find(|member| member.id() == id)
    }

    /// Active members ordered by party position.
    pub fn active_members(&self) -> Vec<&Actor> {
        let mut active: Vec<&Actor> = self.members.iter().filter(|m| m.is_active()).collect();
        active.sort_by_key(|member| member.party_position());
        active
    }

    pub fn active_count(&self) -> usize {
        self.members.iter().filter(|member| member.is_active()).count()
    }

    pub fn add_member(&mut self, mut member: Actor) -> Result<(), PartyError> {
        if self.members.is_full() {
            tracing::error!(max = GameConfig::MAX_PARTY_MEMBERS, "party is full");
            return Err(PartyError::Full {
                max: GameConfig::MAX_PARTY_MEMBERS,
            });
        }
        if self.member(member.id()).is_some() {
            tracing::error!(id = member.id(), "member is already in the party");
            return Err(PartyError::DuplicateMember {
                id: member.id().to_owned(),
            });
        }

        let active = self.active_count();
        if active < GameConfig::MAX_ACTIVE_MEMBERS {
            member.set_active(true, active + 1);
        } else {
            member.set_active(false, 0);
        }
        tracing::info!(id = member.id(), active = member.is_active(), "member joined");
        self.members.push(member);
        Ok(())
    }

    /// Drop a member, returning everything they wore to the inventory.
    pub fn remove_member(&mut self, id: &str) -> Result<Actor, PartyError> {
        let index = self.index_of(id)?;
        let arena = self.inventory.arena_mut();
        let member = &mut self.members[index];
        let worn: Vec<(EquipSlot, EquipmentId)> = member
            .loadout()
            .iter()
            .filter_map(|(slot, occupant)| occupant.map(|id| (slot, id)))
            .collect();
        if let Some(&(slot, id)) = worn.iter().find(|(_, id)| !arena.contains(*id)) {
            return Err(EquipError::DanglingSlot { slot, id }.into());
        }
        for (slot, _) in worn {
            equipment::unequip(arena, member, slot)?;
        }

        let mut removed = self.members.remove(index);
        removed.set_active(false, 0);
        self.repack_positions();
        tracing::info!(id, "member left");
        Ok(removed)
    }

    /// Swap the lineup positions of two active members.
    pub fn swap_positions(&mut self, first: &str, second: &str) -> Result<(), PartyError> {
        let a = self.active_index_of(first)?;
        let b = self.active_index_of(second)?;
        let position_a = self.members[a].party_position();
        let position_b = self.members[b].party_position();
        self.members[a].set_active(true, position_b);
        self.members[b].set_active(true, position_a);
        tracing::debug!(first, second, "swapped party positions");
        Ok(())
    }

    /// Renumber active positions 1..=n and promote benched members into
    /// free lineup spots.
    fn repack_positions(&mut self) {
        let mut order: Vec<usize> = (0..self.members.len())
            .filter(|&index| self.members[index].is_active())
            .collect();
        order.sort_by_key(|&index| self.members[index].party_position());
        order.extend(
            (0..self.members.len()).filter(|&index| !self.members[index].is_active()),
        );
        for (rank, index) in order.into_iter().enumerate() {
            if rank < GameConfig::MAX_ACTIVE_MEMBERS {
                self.members[index].set_active(true, rank + 1);
            } else {
                self.members[index].set_active(false, 0);
            }
        }
    }

    fn index_of(&self, id: &str) -> Result<usize, PartyError> {
        self.members
            .iter()
            .position(|member| member.id() == id)
            .ok_or_else(|| PartyError::UnknownMember { id: id.to_owned() })
    }

    fn active_index_of(&self, id: &str) -> Result<usize, PartyError> {
        let index = self.index_of(id)?;
        if self.members[index].is_active() {
            Ok(index)
        } else {
            Err(PartyError::NotActive { id: id.to_owned() })
        }
    }

    // ===== gold =====

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Add gold, clamped at the maximum.
    pub fn add_gold(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount).min(GameConfig::MAX_GOLD);
    }

    pub fn spend_gold(&mut self, amount: u32) -> Result<(), PartyError> {
        if amount > self.gold {
            return Err(PartyError::InsufficientGold {
                required: amount,
                available: self.gold,
            });
        }
        self.gold -= amount;
        Ok(())
    }

    // ===== inventory =====

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    /// Pay `price` and stow `item`. Gold is refunded if the item does not fit.
    pub fn buy_item(&mut self, price: u32, item: Item) -> Result<(), PartyError> {
        self.spend_gold(price)?;
        if let Err(error) = self.inventory.add_item(item) {
            self.add_gold(price);
            tracing::warn!(%error, "purchase refunded");
            return Err(error.into());
        }
        Ok(())
    }

    /// Pay `price` and stow `equipment`. Gold is refunded if it does not fit.
    pub fn buy_equipment(&mut self, price: u32, equipment: Equipment) -> Result<(), PartyError> {
        self.spend_gold(price)?;
        if let Err(error) = self.inventory.add_equipment(equipment) {
            self.add_gold(price);
            tracing::warn!(%error, "purchase refunded");
            return Err(error.into());
        }
        Ok(())
    }

    /// Sell `quantity` units of the item at `index`. Returns the gold earned.
    pub fn sell_item(&mut self, index: usize, quantity: u16) -> Result<u32, PartyError> {
        let price = self
            .inventory
            .item(index)
            .map(Item::sell_price)
            .ok_or(InventoryError::ItemIndex {
                index,
                len: self.inventory.items().len(),
            })?;
        self.inventory.decrement_item(index, quantity)?;
        let earned = price.saturating_mul(u32::from(quantity));
        self.add_gold(earned);
        Ok(earned)
    }

    /// Sell `quantity` units of an equipment record. Returns the gold earned.
    pub fn sell_equipment(&mut self, id: EquipmentId, quantity: u16) -> Result<u32, PartyError> {
        let price = self
            .inventory
            .equipment(id)
            .map(Equipment::sell_price)
            .ok_or(InventoryError::UnknownEquipment { id })?;
        self.inventory.decrement_equipment(id, quantity)?;
        let earned = price.saturating_mul(u32::from(quantity));
        self.add_gold(earned);
        Ok(earned)
    }

    /// Use the item at `index` on member `target`.
    pub fn use_item(&mut self, index: usize, target: &str) -> Result<ItemEffect, PartyError> {
        let member = self.index_of(target)?;
        Ok(self.inventory.use_item(index, &mut self.members[member])?)
    }

    // ===== equipment =====

    /// Equip inventory record `id` on `member`. Returns the replaced record.
    pub fn equip(
        &mut self,
        member: &str,
        id: EquipmentId,
    ) -> Result<Option<EquipmentId>, PartyError> {
        let index = self.index_of(member)?;
        let replaced = equipment::equip(self.inventory.arena_mut(), &mut self.members[index], id)?;
        Ok(replaced)
    }

    pub fn unequip(&mut self, member: &str, slot: EquipSlot) -> Result<EquipmentId, PartyError> {
        let index = self.index_of(member)?;
        let removed =
            equipment::unequip(self.inventory.arena_mut(), &mut self.members[index], slot)?;
        Ok(removed)
    }

    pub fn predict_equip(&self, member: &str, id: EquipmentId) -> Result<DerivedStats, PartyError> {
        let index = self.index_of(member)?;
        let predicted = equipment::predict_equip(self.inventory.arena(), &self.members[index], id)?;
        Ok(predicted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::ActorKind;
    use crate::equipment::{ArmourKind, ArmourProperties, WeaponKind, WeaponProperties};
    use crate::item::ItemKind;

    fn actor(id: &str) -> Actor {
        Actor::new(id, id, ActorKind::Warrior, 1, 100)
    }

    fn sword() -> Equipment {
        Equipment::weapon(
            "Short Sword",
            "",
            100,
            WeaponProperties {
                attack_power: 15,
                kind: WeaponKind::Sword,
            },
        )
    }

    #[test]
    fn first_four_members_are_active() {
        let mut party = Party::default();
        for id in ["a", "b", "c", "d", "e"] {
            party.add_member(actor(id)).unwrap();
        }
        let lineup: Vec<_> = party
            .active_members()
            .into_iter()
            .map(|m| (m.id(), m.party_position()))
            .collect();
        assert_eq!(
            lineup,
            vec![
                ("a", 1),
                ("b", 2),
                ("c", 3),
                ("d", 4)
            ]
        );
        assert!(!party.member("e").unwrap().is_active());
    }

    #[test]
    fn duplicate_and_overflow_are_rejected() {
        let mut party = Party::default();
        party.add_member(actor("a")).unwrap();
        assert!(matches!(
            party.add_member(actor("a")),
            Err(PartyError::DuplicateMember { .. })
        ));

        for n in 1..GameConfig::MAX_PARTY_MEMBERS {
            party.add_member(actor(&format!("m{n}"))).unwrap();
        }
        let before = party.clone();
        assert_eq!(
            party.add_member(actor("late")),
            Err(PartyError::Full { max: 16 })
        );
        assert_eq!(party, before);
    }

    #[test]
    fn remove_member_unequips_and_repacks() {
        let mut party = Party::default();
        for id in ["a", "b", "c", "d", "e"] {
            party.add_member(actor(id)).unwrap();
        }
        let id = party.inventory_mut().add_equipment(sword()).unwrap();
        party.equip("b", id).unwrap();

        let removed = party.remove_member("b").unwrap();
        assert!(removed.loadout().is_empty());
        assert!(!party.inventory().equipment(id).unwrap().is_equipped());

        let positions: Vec<_> = party
            .active_members()
            .into_iter()
            .map(|m| (m.id(), m.party_position()))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("a", 1),
                ("c", 2),
                ("d", 3),
                ("e", 4)
            ]
        );
    }

    #[test]
    fn remove_member_with_missing_gear_changes_nothing() {
        let mut party = Party::default();
        party.add_member(actor("a")).unwrap();
        let sword = party.inventory_mut().add_equipment(sword()).unwrap();
        let helmet = party
            .inventory_mut()
            .add_equipment(Equipment::armour(
                "Iron Helmet",
                "",
                80,
                ArmourProperties {
                    defense_power: 2,
                    kind: ArmourKind::Headgear,
                },
            ))
            .unwrap();
        party.equip("a", sword).unwrap();
        party.equip("a", helmet).unwrap();
        party.inventory_mut().arena_mut().remove(helmet);
        let before = party.clone();

        assert!(matches!(
            party.remove_member("a"),
            Err(PartyError::Equip(EquipError::DanglingSlot {
                slot: EquipSlot::Headgear,
                ..
            }))
        ));
        assert_eq!(party, before);
        assert!(party.inventory().equipment(sword).unwrap().is_equipped());
    }

    #[test]
    fn gold_is_clamped_and_checked() {
        let mut party = Party::default();
        assert_eq!(party.gold(), 500);
        party.add_gold(200_000);
        assert_eq!(party.gold(), GameConfig::MAX_GOLD);
        assert!(party.spend_gold(100_000).is_err());
        assert_eq!(party.gold(), GameConfig::MAX_GOLD);
    }

    #[test]
    fn failed_purchase_refunds_gold() {
        let mut party = Party::default();
        party
            .inventory_mut()
            .add_equipment(sword().with_count(50))
            .unwrap();
        let result = party.buy_equipment(100, sword());
        assert!(matches!(result, Err(PartyError::Inventory(_))));
        assert_eq!(party.gold(), 500);
    }

    #[test]
    fn buy_then_sell_round_trip() {
        let mut party = Party::default();
        let potion = Item::new("Potion", "", ItemKind::Health, 25, 20);
        party.buy_item(60, potion.with_count(3)).unwrap();
        assert_eq!(party.gold(), 440);

        assert_eq!(party.sell_item(0, 2), Ok(20));
        assert_eq!(party.gold(), 460);
        assert_eq!(party.inventory().items()[0].count(), 1);
    }

    #[test]
    fn swap_positions_reorders_lineup() {
        let mut party = Party::default();
        for id in ["a", "b", "c"] {
            party.add_member(actor(id)).unwrap();
        }
        party.swap_positions("a", "c").unwrap();
        let order: Vec<_> = party.active_members().into_iter().map(Actor::id).collect();
        assert_eq!(order, vec!["c", "b", "a"]);
    }
}
