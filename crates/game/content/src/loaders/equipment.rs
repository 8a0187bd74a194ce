//! Equipment catalog loader.

use std::path::Path;

use game_core::{Equipment, EquipmentProperties, StatModifier};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// One authored equipment entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquipmentSpec {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub buy_price: u32,
    pub properties: EquipmentProperties,
    #[serde(default)]
    pub modifier: Option<StatModifier>,
}

impl EquipmentSpec {
    /// Single-unit, unequipped stack described by this entry.
    pub fn build(&self) -> Equipment {
        let equipment = Equipment::new(
            self.name.clone(),
            self.description.clone(),
            self.buy_price,
            self.properties,
        );
        match self.modifier {
            Some(modifier) => equipment.with_modifier(modifier),
            None => equipment,
        }
    }
}

/// Equipment catalog structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentCatalog {
    pub equipment: Vec<EquipmentSpec>,
}

/// Loader for the equipment catalog from RON files.
pub struct EquipmentLoader;

impl EquipmentLoader {
    pub fn load(path: &Path) -> LoadResult<Vec<EquipmentSpec>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a catalog, rejecting duplicate names.
    pub fn parse(content: &str) -> LoadResult<Vec<EquipmentSpec>> {
        let catalog: EquipmentCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse equipment catalog RON: {}", e))?;

        for (index, spec) in catalog.equipment.iter().enumerate() {
            if catalog.equipment[..index]
                .iter()
                .any(|earlier| earlier.name == spec.name)
            {
                anyhow::bail!("Duplicate equipment entry '{}'", spec.name);
            }
        }
        Ok(catalog.equipment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{EquipSlot, ModifierKind};

    const CATALOG: &str = r#"(
        equipment: [
            (
                name: "Short Sword",
                description: "A light blade",
                buy_price: 101,
                properties: Weapon((attack_power: 15, kind: Sword)),
                modifier: Some((value: 3, kind: Strength)),
            ),
            (
                name: "Leather Cap",
                buy_price: 40,
                properties: Armour((defense_power: 3, kind: Headgear)),
            ),
        ],
    )"#;

    #[test]
    fn parses_weapons_and_armour() {
        let specs = EquipmentLoader::parse(CATALOG).unwrap();
        assert_eq!(specs.len(), 2);

        let sword = specs[0].build();
        assert_eq!(sword.sell_price(), 50);
        assert_eq!(sword.slot(), Some(EquipSlot::Weapon));
        assert_eq!(sword.modifier().map(|m| m.kind), Some(ModifierKind::Strength));

        let cap = specs[1].build();
        assert_eq!(cap.slot(), Some(EquipSlot::Headgear));
        assert!(cap.modifier().is_none());
        assert_eq!(cap.description(), "");
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let duplicated = r#"(equipment: [
            (name: "Dagger", buy_price: 10, properties: Weapon((attack_power: 4, kind: Dagger))),
            (name: "Dagger", buy_price: 12, properties: Weapon((attack_power: 5, kind: Dagger))),
        ])"#;
        assert!(EquipmentLoader::parse(duplicated).is_err());
    }
}
