//! Oracle traits for externally supplied content.
//!
//! The core never hardcodes catalog data. Item definitions, encounter
//! rosters, and balance tables are provided by the embedding application
//! (normally the `game-content` crate) through these traits, keeping the
//! rules crate pure and content data-driven.

mod encounters;
mod items;
mod tables;

pub use encounters::{EncounterDef, EncounterOracle, EnemySpec, LootEntry};
pub use items::{ItemDefinition, ItemOracle};
pub use tables::{LevelGrowth, TablesOracle, UpgradeCost};
