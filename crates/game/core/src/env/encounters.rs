//! Encounter oracle: predefined enemy rosters keyed by id.

use crate::state::{EncounterId, ItemId};

/// Lookup of encounter definitions.
pub trait EncounterOracle: Send + Sync {
    fn encounter(&self, id: &EncounterId) -> Option<&EncounterDef>;
}

/// A predefined enemy roster plus the rewards for clearing it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterDef {
    pub id: EncounterId,
    pub name: String,
    pub enemies: Vec<EnemySpec>,
    /// XP granted to each surviving hero on victory.
    #[cfg_attr(feature = "serde", serde(default))]
    pub xp_reward: u32,
    /// Items added to the inventory on victory.
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot: Vec<LootEntry>,
}

/// One enemy in an encounter roster.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemySpec {
    pub id: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

/// A loot drop: item id and count.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item: ItemId,
    pub count: u32,
}
