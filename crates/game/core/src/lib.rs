//! Deterministic game rules and data types for the terminal RPG core.
//!
//! `game-core` defines the canonical rules (hero model, battle resolution,
//! base progression) and exposes pure APIs reused by the runtime and
//! offline tools. Content (items, encounters, balance tables) is supplied
//! through the oracle traits in [`env`]; persistence lives in the runtime
//! crate. Nothing in here performs I/O or consults a clock or RNG.

pub mod base;
pub mod battle;
pub mod combat;
pub mod env;
pub mod items;
pub mod state;
pub mod stats;

#[cfg(test)]
pub(crate) mod testutil;

pub use base::{BaseEffects, UpgradeDenyReason, UpgradeError, apply_upgrade, can_upgrade, effects_for};
pub use battle::{
    BattleError, BattleOutcome, BattleStartError, BattleState, EnemyCombatant, HeroCombatant,
    PlayerAction, TurnEvent, TurnReport,
};
pub use combat::{AttackOutcome, resolve_attack};
pub use env::{
    EncounterDef, EncounterOracle, EnemySpec, ItemDefinition, ItemOracle, LevelGrowth, LootEntry,
    TablesOracle, UpgradeCost,
};
pub use items::{EquipError, equip, unequip};
pub use state::{
    BaseStats, BaseStatus, BuildingId, EncounterId, EquipSlot, Equipment, GameState, Hero,
    HeroClass, HeroId, Inventory, ItemId, RosterError, StatModifiers,
};
pub use stats::{add_experience, effective_stats};
