//! Item catalog oracle.

use crate::state::{EquipSlot, Hero, ItemId, StatModifiers};

/// Static item definitions and equip rules.
pub trait ItemOracle: Send + Sync {
    /// Definition for a known item id, `None` for unknown ids.
    fn definition(&self, id: &ItemId) -> Option<&ItemDefinition>;

    /// Stat deltas granted by an item.
    ///
    /// Unknown ids are not an error; they simply contribute nothing.
    fn stats_for(&self, id: &ItemId) -> StatModifiers {
        self.definition(id)
            .map(|def| def.modifiers)
            .unwrap_or_default()
    }

    /// Whether `hero` may equip `id`.
    ///
    /// False for anything absent from the catalog. Class and level gating
    /// is a designed extension point; the default accepts every known item.
    fn can_equip(&self, hero: &Hero, id: &ItemId) -> bool {
        let _ = hero;
        self.definition(id).is_some()
    }
}

/// A catalog entry. Immutable content data, never part of persisted state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemDefinition {
    pub id: ItemId,
    pub name: String,
    pub slot: EquipSlot,
    #[cfg_attr(feature = "serde", serde(default))]
    pub modifiers: StatModifiers,
}

impl ItemDefinition {
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        slot: EquipSlot,
        modifiers: StatModifiers,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            slot,
            modifiers,
        }
    }
}
