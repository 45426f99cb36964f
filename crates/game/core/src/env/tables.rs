//! Balance tables oracle.
//!
//! Defines the numeric knobs of the game: XP thresholds, level-up growth,
//! level-derived stat bonuses, and base upgrade costs. It does NOT define
//! entity data (use [`super::ItemOracle`] / [`super::EncounterOracle`] for
//! that).

use crate::state::{BuildingId, ItemId, StatModifiers};

/// Oracle providing game rules and balance tables.
pub trait TablesOracle: Send + Sync {
    /// XP required to advance from `level` to `level + 1`.
    ///
    /// `None` at or past the top defined level: heroes there keep
    /// accumulating XP without leveling further.
    fn xp_to_next_level(&self, level: u32) -> Option<u32>;

    /// Permanent base-stat growth applied on each level-up.
    fn level_growth(&self) -> LevelGrowth;

    /// Derived (non-stored) bonus applied to effective stats for `level`.
    fn level_bonus(&self, level: u32) -> StatModifiers;

    /// Cost to bring `building` to `target_level`. `None` if the building
    /// is unknown or `target_level` is past its top defined level.
    fn upgrade_cost(&self, building: &BuildingId, target_level: u32) -> Option<UpgradeCost>;

    /// Item ids unlocked when `building` reaches exactly `level`.
    fn unlocked_items(&self, building: &BuildingId, level: u32) -> &[ItemId];
}

/// Per-level-up increase to stored base stats.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelGrowth {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl LevelGrowth {
    pub const fn new(hp: u32, attack: u32, defense: u32) -> Self {
        Self {
            hp,
            attack,
            defense,
        }
    }
}

/// Price of one building upgrade step, paid from the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeCost {
    pub resource: ItemId,
    pub amount: u32,
}

impl UpgradeCost {
    pub fn new(resource: ItemId, amount: u32) -> Self {
        Self { resource, amount }
    }
}
