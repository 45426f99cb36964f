//! Base progression: building upgrades paid from the inventory.

use crate::env::TablesOracle;
use crate::state::{BuildingId, GameState, ItemId};

/// Why an upgrade was denied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum UpgradeDenyReason {
    /// No cost table exists for this building at all.
    UnknownBuilding,
    /// The building is already at its top defined level.
    MaxLevel,
    /// The inventory lacks the required resource amount.
    InsufficientResources,
}

/// Upgrade failures. Validation runs before any deduction, so a denied
/// upgrade leaves inventory and base status untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UpgradeError {
    #[error("upgrade denied: {0}")]
    UpgradeDenied(UpgradeDenyReason),
}

/// Gameplay effects derived from current building levels.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseEffects {
    /// Item ids made available by the base, in building order.
    pub unlocked_items: Vec<ItemId>,
}

fn check_upgrade(
    state: &GameState,
    building: &BuildingId,
    tables: &dyn TablesOracle,
) -> Result<crate::env::UpgradeCost, UpgradeDenyReason> {
    let target = state.base_status.level(building) + 1;
    let Some(cost) = tables.upgrade_cost(building, target) else {
        return Err(if target == 1 {
            UpgradeDenyReason::UnknownBuilding
        } else {
            UpgradeDenyReason::MaxLevel
        });
    };
    if state.inventory.count(&cost.resource) < cost.amount {
        return Err(UpgradeDenyReason::InsufficientResources);
    }
    Ok(cost)
}

/// Whether `building` can be raised one level right now.
pub fn can_upgrade(state: &GameState, building: &BuildingId, tables: &dyn TablesOracle) -> bool {
    check_upgrade(state, building, tables).is_ok()
}

/// Pays for and applies one upgrade step, returning the new level.
///
/// Revalidates via the same check as [`can_upgrade`]; there is no partial
/// deduction on failure.
pub fn apply_upgrade(
    state: &mut GameState,
    building: &BuildingId,
    tables: &dyn TablesOracle,
) -> Result<u32, UpgradeError> {
    let cost = check_upgrade(state, building, tables).map_err(UpgradeError::UpgradeDenied)?;
    state.inventory.remove(&cost.resource, cost.amount);
    Ok(state.base_status.promote(building))
}

/// Derives the unlocks granted by every built level of every building.
///
/// Pure function of the current base status.
pub fn effects_for(state: &GameState, tables: &dyn TablesOracle) -> BaseEffects {
    let mut unlocked_items = Vec::new();
    for (building, level) in state.base_status.iter() {
        for step in 1..=level {
            unlocked_items.extend_from_slice(tables.unlocked_items(building, step));
        }
    }
    BaseEffects { unlocked_items }
}
