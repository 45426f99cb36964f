//! Data-driven content definitions and loaders.
//!
//! This crate houses the built-in item catalog, encounter book, and balance
//! tables, and provides RON loaders for overriding them from data files.
//! Content is consumed by the runtime through the `game-core` oracle traits
//! and never appears in persisted game state.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{BalanceTables, EncounterBook, GameContent, ItemCatalog};

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, EncounterLoader, ItemLoader, TablesLoader};
