//! Equip and unequip operations against the shared inventory.

use crate::env::ItemOracle;
use crate::state::{EquipSlot, GameState, HeroId, ItemId};

/// Equip failures. Every check runs before any mutation, so a failed equip
/// leaves inventory and equipment exactly as they were.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// Hero or item id does not exist.
    #[error("hero or item not found")]
    NotFound,

    /// The inventory holds no copy of the item.
    #[error("item not owned")]
    NotOwned,

    /// The catalog rejects this hero/item pairing.
    #[error("item cannot be equipped")]
    NotEquippable,
}

/// Equips `item_id` onto `hero_id`.
///
/// On success the item previously in the target slot (if any) returns to
/// the inventory, and one copy of the new item leaves it. Atomic:
/// validation happens up front and failure mutates nothing.
pub fn equip(
    state: &mut GameState,
    hero_id: &HeroId,
    item_id: &ItemId,
    items: &dyn ItemOracle,
) -> Result<(), EquipError> {
    let Some(definition) = items.definition(item_id) else {
        return Err(EquipError::NotFound);
    };
    let slot = definition.slot;

    let Some(index) = state.heroes.iter().position(|h| h.id == *hero_id) else {
        return Err(EquipError::NotFound);
    };
    if state.inventory.count(item_id) == 0 {
        return Err(EquipError::NotOwned);
    }
    if !items.can_equip(&state.heroes[index], item_id) {
        return Err(EquipError::NotEquippable);
    }

    // Commit. The count was checked above, so removal cannot fail.
    state.inventory.remove(item_id, 1);
    if let Some(displaced) = state.heroes[index].equipment.equip(slot, item_id.clone()) {
        state.inventory.add(displaced, 1);
    }
    Ok(())
}

/// Clears `slot` on `hero_id`, returning the removed item to the inventory.
///
/// Returns the unequipped item id, or `None` if the slot was already empty.
pub fn unequip(
    state: &mut GameState,
    hero_id: &HeroId,
    slot: EquipSlot,
) -> Result<Option<ItemId>, EquipError> {
    let Some(hero) = state.hero_mut(hero_id) else {
        return Err(EquipError::NotFound);
    };
    let Some(item) = hero.equipment.unequip(slot) else {
        return Ok(None);
    };
    state.inventory.add(item.clone(), 1);
    Ok(Some(item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GameState;
    use crate::testutil::{FixtureCatalog, warrior};

    fn state_with_hero() -> GameState {
        let mut state = GameState::new();
        state.add_hero(warrior("hero_0")).unwrap();
        state
    }

    #[test]
    fn equip_moves_item_from_inventory_to_slot() {
        let items = FixtureCatalog::new();
        let mut state = state_with_hero();
        state.inventory.add(ItemId::from("sword"), 1);

        equip(&mut state, &HeroId::from("hero_0"), &ItemId::from("sword"), &items).unwrap();

        assert_eq!(state.inventory.count(&ItemId::from("sword")), 0);
        let hero = state.hero(&HeroId::from("hero_0")).unwrap();
        assert_eq!(hero.equipment.get(EquipSlot::Weapon), Some(&ItemId::from("sword")));
    }

    #[test]
    fn equip_swap_returns_displaced_item_to_inventory() {
        let items = FixtureCatalog::new();
        let mut state = state_with_hero();
        state.inventory.add(ItemId::from("sword"), 1);
        state.inventory.add(ItemId::from("steel_sword"), 1);

        equip(&mut state, &HeroId::from("hero_0"), &ItemId::from("sword"), &items).unwrap();
        equip(
            &mut state,
            &HeroId::from("hero_0"),
            &ItemId::from("steel_sword"),
            &items,
        )
        .unwrap();

        // The displaced sword is back, the steel sword is gone from stock;
        // aggregate count across both ids is unchanged.
        assert_eq!(state.inventory.count(&ItemId::from("sword")), 1);
        assert_eq!(state.inventory.count(&ItemId::from("steel_sword")), 0);
        let hero = state.hero(&HeroId::from("hero_0")).unwrap();
        assert_eq!(
            hero.equipment.get(EquipSlot::Weapon),
            Some(&ItemId::from("steel_sword"))
        );
    }

    #[test]
    fn equip_unowned_item_fails_without_mutation() {
        let items = FixtureCatalog::new();
        let mut state = state_with_hero();
        let before = state.clone();

        let result = equip(&mut state, &HeroId::from("hero_0"), &ItemId::from("sword"), &items);

        assert_eq!(result, Err(EquipError::NotOwned));
        assert_eq!(state, before);
    }

    #[test]
    fn equip_unknown_item_or_hero_fails_with_not_found() {
        let items = FixtureCatalog::new();
        let mut state = state_with_hero();
        state.inventory.add(ItemId::from("sword"), 1);

        assert_eq!(
            equip(&mut state, &HeroId::from("hero_0"), &ItemId::from("bogus"), &items),
            Err(EquipError::NotFound)
        );
        assert_eq!(
            equip(&mut state, &HeroId::from("nobody"), &ItemId::from("sword"), &items),
            Err(EquipError::NotFound)
        );
        assert_eq!(state.inventory.count(&ItemId::from("sword")), 1);
    }

    #[test]
    fn unequip_returns_item_to_inventory() {
        let items = FixtureCatalog::new();
        let mut state = state_with_hero();
        state.inventory.add(ItemId::from("sword"), 1);
        equip(&mut state, &HeroId::from("hero_0"), &ItemId::from("sword"), &items).unwrap();

        let removed = unequip(&mut state, &HeroId::from("hero_0"), EquipSlot::Weapon).unwrap();
        assert_eq!(removed, Some(ItemId::from("sword")));
        assert_eq!(state.inventory.count(&ItemId::from("sword")), 1);

        let removed = unequip(&mut state, &HeroId::from("hero_0"), EquipSlot::Weapon).unwrap();
        assert_eq!(removed, None);
    }
}
