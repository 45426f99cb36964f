//! Persistent game state: heroes, inventory, and base progression.
//!
//! Everything in this module survives across sessions and round-trips
//! through the save file. Ephemeral combat state lives in [`crate::battle`].

mod game;
mod types;

pub use game::{GameState, RosterError};
pub use types::{
    BaseStats, BaseStatus, BuildingId, EncounterId, EquipSlot, Equipment, Hero, HeroClass, HeroId,
    Inventory, ItemId, StatModifiers,
};
