//! Shared fixtures for unit tests: a tiny catalog, encounter book, and
//! balance tables mirroring the built-in content.

use std::collections::BTreeMap;

use crate::env::{
    EncounterDef, EncounterOracle, EnemySpec, ItemDefinition, ItemOracle, LevelGrowth, LootEntry,
    TablesOracle, UpgradeCost,
};
use crate::state::{
    BaseStats, EncounterId, EquipSlot, Hero, HeroClass, HeroId, ItemId, StatModifiers,
};

pub(crate) struct FixtureCatalog {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl FixtureCatalog {
    pub(crate) fn new() -> Self {
        let defs = [
            ItemDefinition::new(
                ItemId::from("sword"),
                "Sword",
                EquipSlot::Weapon,
                StatModifiers::new(0, 5, 0),
            ),
            ItemDefinition::new(
                ItemId::from("steel_sword"),
                "Steel Sword",
                EquipSlot::Weapon,
                StatModifiers::new(0, 9, 0),
            ),
            ItemDefinition::new(
                ItemId::from("leather_armor"),
                "Leather Armor",
                EquipSlot::Armor,
                StatModifiers::new(0, 0, 3),
            ),
            ItemDefinition::new(
                ItemId::from("health_potion"),
                "Health Potion",
                EquipSlot::Accessory,
                StatModifiers::new(25, 0, 0),
            ),
        ];
        Self {
            items: defs.into_iter().map(|d| (d.id.clone(), d)).collect(),
        }
    }
}

impl ItemOracle for FixtureCatalog {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }
}

pub(crate) struct FixtureTables {
    unlocks: BTreeMap<(String, u32), Vec<ItemId>>,
}

impl FixtureTables {
    pub(crate) fn new() -> Self {
        let mut unlocks = BTreeMap::new();
        unlocks.insert(("forge".to_owned(), 1), vec![ItemId::from("steel_sword")]);
        Self { unlocks }
    }
}

impl TablesOracle for FixtureTables {
    fn xp_to_next_level(&self, level: u32) -> Option<u32> {
        match level {
            1 => Some(100),
            2 => Some(300),
            3 => Some(700),
            _ => None,
        }
    }

    fn level_growth(&self) -> LevelGrowth {
        LevelGrowth::new(10, 2, 1)
    }

    fn level_bonus(&self, level: u32) -> StatModifiers {
        StatModifiers::new(10 * (level as i32 - 1), 0, 0)
    }

    fn upgrade_cost(
        &self,
        building: &crate::state::BuildingId,
        target_level: u32,
    ) -> Option<UpgradeCost> {
        let gold = ItemId::from("gold");
        match (building.as_str(), target_level) {
            ("barracks", 1) => Some(UpgradeCost::new(gold, 100)),
            ("barracks", 2) => Some(UpgradeCost::new(gold, 500)),
            ("forge", 1) => Some(UpgradeCost::new(gold, 150)),
            _ => None,
        }
    }

    fn unlocked_items(&self, building: &crate::state::BuildingId, level: u32) -> &[ItemId] {
        self.unlocks
            .get(&(building.as_str().to_owned(), level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub(crate) struct FixtureEncounters {
    encounters: BTreeMap<EncounterId, EncounterDef>,
}

impl FixtureEncounters {
    pub(crate) fn new() -> Self {
        let id = EncounterId::from("goblin_patrol");
        let def = EncounterDef {
            id: id.clone(),
            name: "Goblin Patrol".to_owned(),
            enemies: vec![
                EnemySpec {
                    id: "goblin_1".to_owned(),
                    hp: 50,
                    attack: 8,
                    defense: 2,
                },
                EnemySpec {
                    id: "goblin_2".to_owned(),
                    hp: 50,
                    attack: 8,
                    defense: 2,
                },
            ],
            xp_reward: 60,
            loot: vec![LootEntry {
                item: ItemId::from("gold"),
                count: 40,
            }],
        };
        Self {
            encounters: [(id, def)].into_iter().collect(),
        }
    }
}

impl EncounterOracle for FixtureEncounters {
    fn encounter(&self, id: &EncounterId) -> Option<&EncounterDef> {
        self.encounters.get(id)
    }
}

/// The warrior from the worked battle example: 120 hp, 12 attack, 8 defense.
pub(crate) fn warrior(id: &str) -> Hero {
    Hero::new(
        HeroId::from(id),
        "Warrior Hero",
        HeroClass::Warrior,
        BaseStats::new(120, 12, 8),
    )
}
