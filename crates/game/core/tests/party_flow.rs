use game_core::{
    Actor, ActorKind, ArmourKind, ArmourProperties, BaseAttributes, EquipError, EquipSlot,
    Equipment, GameConfig, Item, ItemEffect, ItemKind, ModifierKind, Party, PartyError,
    StatModifier, WeaponKind, WeaponProperties,
};

fn warrior(id: &str) -> Actor {
    Actor::new(id, id, ActorKind::Warrior, 1, 100).with_attributes(BaseAttributes {
        strength: 10,
        intelligence: 5,
        speed: 5,
        willpower: 5,
        stamina: 7,
    })
}

fn sword(name: &str, power: i32, strength: i32) -> Equipment {
    Equipment::weapon(
        name,
        "",
        100,
        WeaponProperties {
            attack_power: power,
            kind: WeaponKind::Sword,
        },
    )
    .with_modifier(StatModifier::new(strength, ModifierKind::Strength))
}

fn armour(name: &str, power: i32, kind: ArmourKind) -> Equipment {
    Equipment::armour(
        name,
        "",
        60,
        ArmourProperties {
            defense_power: power,
            kind,
        },
    )
}

fn party_with_hero() -> Party {
    let mut party = Party::new(&GameConfig::default());
    party.add_member(warrior("hero")).unwrap();
    party
}

#[test]
fn base_formulas_match_reference_values() {
    let mut party = party_with_hero();
    assert_eq!(party.member("hero").unwrap().stats().attack(), 12);

    let inventory = party.inventory_mut();
    let helm = inventory
        .add_equipment(armour("Iron Helmet", 5, ArmourKind::Headgear))
        .unwrap();
    let chest = inventory
        .add_equipment(armour("Chain Mail", 10, ArmourKind::ChestBody))
        .unwrap();
    party.equip("hero", helm).unwrap();
    party.equip("hero", chest).unwrap();

    assert_eq!(party.member("hero").unwrap().stats().defense(), 20);
}

#[test]
fn equip_then_unequip_restores_derived_stats() {
    let mut party = party_with_hero();
    let id = party
        .inventory_mut()
        .add_equipment(sword("Short Sword", 15, 3))
        .unwrap();
    let before = party.member("hero").unwrap().stats().clone();

    party.equip("hero", id).unwrap();
    assert_ne!(party.member("hero").unwrap().stats(), &before);

    assert_eq!(party.unequip("hero", EquipSlot::Weapon), Ok(id));
    assert_eq!(party.member("hero").unwrap().stats(), &before);
}

#[test]
fn sequential_weapons_never_double_count() {
    let mut party = party_with_hero();
    let short = party
        .inventory_mut()
        .add_equipment(sword("Short Sword", 15, 3))
        .unwrap();
    let long = party
        .inventory_mut()
        .add_equipment(sword("Long Sword", 25, 5))
        .unwrap();

    party.equip("hero", short).unwrap();
    party.equip("hero", long).unwrap();

    let hero = party.member("hero").unwrap();
    // 25 + (10 + 5) + 5/5 + 5/5
    assert_eq!(hero.stats().attack(), 42);
    assert_eq!(hero.loadout().get(EquipSlot::Weapon), Some(long));
    assert!(!party.inventory().equipment(short).unwrap().is_equipped());
}

#[test]
fn not_armour_is_rejected_without_side_effects() {
    let mut party = party_with_hero();
    let rag = party
        .inventory_mut()
        .add_equipment(armour("Rag", 1, ArmourKind::NotArmour))
        .unwrap();
    let before = party.clone();

    assert!(matches!(
        party.equip("hero", rag),
        Err(PartyError::Equip(EquipError::NoSlot { .. }))
    ));
    assert_eq!(party, before);
}

#[test]
fn equipped_gear_cannot_be_sold_out_from_under_its_wearer() {
    let mut party = party_with_hero();
    let id = party
        .inventory_mut()
        .add_equipment(sword("Short Sword", 15, 3).with_count(2))
        .unwrap();
    party.equip("hero", id).unwrap();

    assert!(party.sell_equipment(id, 2).is_err());
    assert_eq!(party.gold(), 500);

    assert_eq!(party.sell_equipment(id, 1), Ok(50));
    assert_eq!(party.gold(), 550);
    assert_eq!(party.inventory().equipment(id).unwrap().count(), 1);
    assert!(party.inventory().equipment(id).unwrap().is_equipped());
}

#[test]
fn purchase_that_does_not_fit_is_refunded() {
    let mut party = party_with_hero();
    let potion = Item::new("Potion", "", ItemKind::Health, 25, 20);
    party.buy_item(0, potion.with_count(99)).unwrap();

    let result = party.buy_item(20, potion.clone());
    assert!(matches!(result, Err(PartyError::Inventory(_))));
    assert_eq!(party.gold(), 500);
    assert_eq!(party.inventory().items()[0].count(), 99);
}

#[test]
fn item_use_consumes_and_removes_empty_stacks() {
    let mut party = party_with_hero();
    let potion = Item::new("Potion", "", ItemKind::Health, 25, 20);
    party.buy_item(20, potion).unwrap();
    party.member_mut("hero").unwrap().take_damage(50);

    assert_eq!(party.use_item(0, "hero"), Ok(ItemEffect::Healed(25)));
    assert_eq!(party.member("hero").unwrap().hp(), 75);
    assert!(party.inventory().items().is_empty());
}

#[test]
fn unknown_member_is_reported() {
    let mut party = party_with_hero();
    assert_eq!(
        party.unequip("ghost", EquipSlot::Weapon),
        Err(PartyError::UnknownMember { id: "ghost".into() })
    );
}
