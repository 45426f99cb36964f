//! Battle errors.

use crate::state::EncounterId;

/// Failures when building the initial battle snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStartError {
    /// The roster has no heroes flagged active.
    #[error("no active heroes to field")]
    NoActiveHeroes,

    /// No encounter is defined under this id.
    #[error("unknown encounter `{0}`")]
    UnknownEncounter(EncounterId),
}

/// Failures while processing a turn. A failed turn does not advance the
/// turn counter or mutate any combatant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleError {
    /// The action references a fainted unit or an out-of-range index.
    #[error("invalid target")]
    InvalidTarget,

    /// The item grants no healing and cannot be consumed in battle.
    #[error("item is not usable in battle")]
    ItemNotUsable,

    /// The battle already reached a terminal outcome.
    #[error("battle already resolved")]
    BattleOver,
}
