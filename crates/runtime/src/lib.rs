//! Session orchestration for the terminal RPG core.
//!
//! The [`GameController`] is the single owner of a session's [`game_core::GameState`]
//! and the only surface the presentation layer talks to. All operations are
//! synchronous and run to completion; the controller serializes every
//! mutation through `&mut self`. Persistence goes through [`SaveStore`],
//! which degrades missing or corrupt save files to a fresh default state
//! instead of failing startup.

mod controller;
mod error;
mod store;

pub use controller::GameController;
pub use error::ControllerError;
pub use store::{LoadSource, LoadedState, SaveStore, StoreError};
