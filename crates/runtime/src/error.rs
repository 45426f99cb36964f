//! Runtime error types.

use game_core::{BattleError, BattleStartError, EquipError, UpgradeError};

use crate::store::StoreError;

/// Umbrella error for controller operations.
///
/// Every variant is a result value for the presentation layer to render;
/// none of them abort the session or the process.
#[derive(Debug, thiserror::Error)]
pub enum ControllerError {
    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Upgrade(#[from] UpgradeError),

    #[error(transparent)]
    BattleStart(#[from] BattleStartError),

    #[error(transparent)]
    Battle(#[from] BattleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The referenced hero does not exist in the roster.
    #[error("hero not found")]
    HeroNotFound,

    /// The controller holds at most one battle at a time.
    #[error("a battle is already in progress")]
    BattleAlreadyRunning,

    /// A battle action was submitted with no battle running.
    #[error("no battle in progress")]
    NoBattleInProgress,

    /// A battle item action referenced an item the inventory cannot cover.
    #[error("item not owned")]
    ItemNotOwned,
}
