//! Built-in content and the oracle implementations backing it.
//!
//! The structs here double as the deserialization targets for the RON
//! loaders, so file-based content and built-in content share one shape.

use std::collections::BTreeMap;

use game_core::{
    BuildingId, EncounterDef, EncounterId, EncounterOracle, EnemySpec, EquipSlot, ItemDefinition,
    ItemId, ItemOracle, LevelGrowth, LootEntry, StatModifiers, TablesOracle, UpgradeCost,
};
use serde::{Deserialize, Serialize};

/// Item definitions keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemCatalog {
    items: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemCatalog {
    pub fn new(definitions: impl IntoIterator<Item = ItemDefinition>) -> Self {
        Self {
            items: definitions
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    /// The default catalog: starter gear plus the forge-unlocked upgrade.
    pub fn builtin() -> Self {
        Self::new([
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
            // The hp modifier doubles as the heal amount when drunk in battle.
            ItemDefinition::new(
                ItemId::from("health_potion"),
                "Health Potion",
                EquipSlot::Accessory,
                StatModifiers::new(25, 0, 0),
            ),
        ])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemOracle for ItemCatalog {
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition> {
        self.items.get(id)
    }
}

/// Encounter definitions keyed by id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncounterBook {
    encounters: BTreeMap<EncounterId, EncounterDef>,
}

impl EncounterBook {
    pub fn new(definitions: impl IntoIterator<Item = EncounterDef>) -> Self {
        Self {
            encounters: definitions
                .into_iter()
                .map(|def| (def.id.clone(), def))
                .collect(),
        }
    }

    pub fn builtin() -> Self {
        Self::new([
            EncounterDef {
                id: EncounterId::from("goblin_patrol"),
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
            },
            EncounterDef {
                id: EncounterId::from("forest_wolves"),
                name: "Forest Wolves".to_owned(),
                enemies: vec![
                    EnemySpec {
                        id: "wolf_1".to_owned(),
                        hp: 40,
                        attack: 10,
                        defense: 1,
                    },
                    EnemySpec {
                        id: "wolf_2".to_owned(),
                        hp: 40,
                        attack: 10,
                        defense: 1,
                    },
                    EnemySpec {
                        id: "wolf_3".to_owned(),
                        hp: 40,
                        attack: 10,
                        defense: 1,
                    },
                ],
                xp_reward: 90,
                loot: vec![
                    LootEntry {
                        item: ItemId::from("gold"),
                        count: 60,
                    },
                    LootEntry {
                        item: ItemId::from("health_potion"),
                        count: 1,
                    },
                ],
            },
        ])
    }
}

impl EncounterOracle for EncounterBook {
    fn encounter(&self, id: &EncounterId) -> Option<&EncounterDef> {
        self.encounters.get(id)
    }
}

/// Balance tables: XP curve, level growth, and base economy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BalanceTables {
    /// XP required to advance from each level. Levels absent from the map
    /// are the top: heroes there no longer level.
    pub xp_thresholds: BTreeMap<u32, u32>,

    /// Base-stat increase per level-up.
    pub level_growth: LevelGrowth,

    /// Effective-HP bonus granted per level above 1.
    pub hp_bonus_per_level: u32,

    /// Per-building upgrade costs; entry `i` prices the step to level `i+1`.
    pub upgrade_costs: BTreeMap<BuildingId, Vec<UpgradeCost>>,

    /// Items unlocked when a building reaches a given level.
    pub unlocks: BTreeMap<BuildingId, BTreeMap<u32, Vec<ItemId>>>,
}

impl Default for BalanceTables {
    fn default() -> Self {
        Self {
            xp_thresholds: BTreeMap::new(),
            level_growth: LevelGrowth::default(),
            hp_bonus_per_level: 0,
            upgrade_costs: BTreeMap::new(),
            unlocks: BTreeMap::new(),
        }
    }
}

impl BalanceTables {
    pub fn builtin() -> Self {
        let gold = ItemId::from("gold");
        Self {
            xp_thresholds: [(1, 100), (2, 300), (3, 700)].into_iter().collect(),
            level_growth: LevelGrowth::new(10, 2, 1),
            hp_bonus_per_level: 10,
            upgrade_costs: [
                (
                    BuildingId::from("barracks"),
                    vec![
                        UpgradeCost::new(gold.clone(), 100),
                        UpgradeCost::new(gold.clone(), 500),
                    ],
                ),
                (
                    BuildingId::from("forge"),
                    vec![UpgradeCost::new(gold, 150)],
                ),
            ]
            .into_iter()
            .collect(),
            unlocks: [(
                BuildingId::from("forge"),
                [(1, vec![ItemId::from("steel_sword")])].into_iter().collect(),
            )]
            .into_iter()
            .collect(),
        }
    }
}

impl TablesOracle for BalanceTables {
    fn xp_to_next_level(&self, level: u32) -> Option<u32> {
        self.xp_thresholds.get(&level).copied()
    }

    fn level_growth(&self) -> LevelGrowth {
        self.level_growth
    }

    fn level_bonus(&self, level: u32) -> StatModifiers {
        let steps = level.saturating_sub(1);
        StatModifiers::new((self.hp_bonus_per_level * steps) as i32, 0, 0)
    }

    fn upgrade_cost(&self, building: &BuildingId, target_level: u32) -> Option<UpgradeCost> {
        if target_level == 0 {
            return None;
        }
        self.upgrade_costs
            .get(building)
            .and_then(|steps| steps.get(target_level as usize - 1))
            .cloned()
    }

    fn unlocked_items(&self, building: &BuildingId, level: u32) -> &[ItemId] {
        self.unlocks
            .get(building)
            .and_then(|levels| levels.get(&level))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// The full content set the runtime needs: one oracle per concern.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub items: ItemCatalog,
    pub encounters: EncounterBook,
    pub tables: BalanceTables,
}

impl GameContent {
    /// Content compiled into the binary; no data files required.
    pub fn builtin() -> Self {
        Self {
            items: ItemCatalog::builtin(),
            encounters: EncounterBook::builtin(),
            tables: BalanceTables::builtin(),
        }
    }
}
