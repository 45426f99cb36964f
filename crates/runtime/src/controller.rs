//! The game controller: sole owner and orchestrator of session state.

use std::path::PathBuf;

use game_content::GameContent;
use game_core::{
    BaseEffects, BaseStats, BattleOutcome, BattleState, BuildingId, EncounterId, EquipSlot,
    GameState, Hero, HeroClass, HeroId, ItemId, PlayerAction, TurnReport,
};

use crate::error::ControllerError;
use crate::store::{LoadSource, SaveStore};

/// Coordinates the persistent state, the item/encounter/tables content,
/// and at most one running battle.
///
/// The presentation layer calls these operations and renders the returned
/// values; no domain error ever escapes as a panic. Operations take
/// `&mut self`, which makes the controller the unit of mutual exclusion
/// for the session.
pub struct GameController {
    state: GameState,
    battle: Option<BattleState>,
    content: GameContent,
    store: SaveStore,
}

impl GameController {
    /// Creates a controller with an empty state; call [`Self::new_game`] or
    /// [`Self::load_game`] to populate it.
    pub fn new(content: GameContent, save_path: impl Into<PathBuf>) -> Self {
        Self {
            state: GameState::default(),
            battle: None,
            content,
            store: SaveStore::new(save_path),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The running battle, if any. Stays `None` after terminal outcomes:
    /// battles are folded back and discarded, never resumed.
    pub fn battle(&self) -> Option<&BattleState> {
        self.battle.as_ref()
    }

    /// Discards the current session and seeds a fresh starting state:
    /// two heroes, a handful of supplies, and an untouched base.
    pub fn new_game(&mut self) {
        let mut state = GameState::new();

        // Starting roster. The seed never exceeds the cap, so the results
        // are infallible.
        let _ = state.add_hero(Hero::new(
            HeroId::from("hero_0"),
            "Warrior Hero",
            HeroClass::Warrior,
            BaseStats::new(120, 12, 8),
        ));
        let _ = state.add_hero(Hero::new(
            HeroId::from("hero_1"),
            "Mage Hero",
            HeroClass::Mage,
            BaseStats::new(80, 5, 3),
        ));

        state.inventory.add(ItemId::from("health_potion"), 3);
        state.inventory.add(ItemId::from("sword"), 1);
        state.inventory.add(ItemId::from("gold"), 100);

        self.state = state;
        self.battle = None;
        tracing::info!("new game started");
    }

    /// Replaces the session state with the save slot's content.
    ///
    /// A missing or corrupt save file yields a default state and the
    /// corresponding [`LoadSource`]; only genuine I/O failures error.
    pub fn load_game(&mut self) -> Result<LoadSource, ControllerError> {
        let loaded = self.store.load()?;
        self.state = loaded.state;
        self.battle = None;
        Ok(loaded.source)
    }

    /// Persists the current state to the save slot.
    pub fn save_game(&self) -> Result<(), ControllerError> {
        self.store.save(&self.state)?;
        Ok(())
    }

    /// Equips an owned item onto a hero. See [`game_core::equip`] for the
    /// validation and swap semantics.
    pub fn equip_item(&mut self, hero_id: &HeroId, item_id: &ItemId) -> Result<(), ControllerError> {
        game_core::equip(&mut self.state, hero_id, item_id, &self.content.items)?;
        tracing::info!(hero = %hero_id, item = %item_id, "item equipped");
        Ok(())
    }

    /// Clears an equipment slot, returning the item to the inventory.
    pub fn unequip_item(
        &mut self,
        hero_id: &HeroId,
        slot: EquipSlot,
    ) -> Result<Option<ItemId>, ControllerError> {
        Ok(game_core::unequip(&mut self.state, hero_id, slot)?)
    }

    /// Flags a hero as eligible (or not) for the next battle. Heroes are
    /// retired this way rather than deleted.
    pub fn set_hero_active(&mut self, hero_id: &HeroId, active: bool) -> Result<(), ControllerError> {
        let hero = self
            .state
            .hero_mut(hero_id)
            .ok_or(ControllerError::HeroNotFound)?;
        hero.is_active = active;
        Ok(())
    }

    /// Pays for and applies one building upgrade, returning the new level.
    pub fn upgrade_building(&mut self, building: &BuildingId) -> Result<u32, ControllerError> {
        let level = game_core::apply_upgrade(&mut self.state, building, &self.content.tables)?;
        tracing::info!(building = %building, level, "building upgraded");
        Ok(level)
    }

    /// Current gameplay unlocks derived from base levels.
    pub fn base_effects(&self) -> BaseEffects {
        game_core::effects_for(&self.state, &self.content.tables)
    }

    /// Starts a battle against the given encounter.
    pub fn start_battle(
        &mut self,
        encounter_id: &EncounterId,
    ) -> Result<&BattleState, ControllerError> {
        if self.battle.is_some() {
            return Err(ControllerError::BattleAlreadyRunning);
        }
        let battle = BattleState::start(
            &self.state,
            encounter_id,
            &self.content.items,
            &self.content.encounters,
            &self.content.tables,
        )?;
        tracing::info!(
            encounter = %encounter_id,
            heroes = battle.heroes().len(),
            enemies = battle.enemies().len(),
            "battle started"
        );
        Ok(self.battle.insert(battle))
    }

    /// Submits one player action to the running battle.
    ///
    /// On a terminal outcome the battle is folded back into the persistent
    /// state (XP and loot on victory, consumed items always), autosaved,
    /// and discarded before this returns.
    pub fn submit_battle_action(
        &mut self,
        action: &PlayerAction,
    ) -> Result<TurnReport, ControllerError> {
        let Some(battle) = self.battle.as_mut() else {
            return Err(ControllerError::NoBattleInProgress);
        };

        // Item use draws on the shared inventory; copies already drunk
        // this battle are spoken for even though deduction happens at
        // fold-back.
        if let PlayerAction::UseItem { item, .. } = action {
            let pending = battle.items_used().iter().filter(|used| *used == item).count() as u32;
            if self.state.inventory.count(item) <= pending {
                return Err(ControllerError::ItemNotOwned);
            }
        }

        let report = battle.process_turn(action, &self.content.items)?;
        if report.outcome.is_terminal() {
            self.finish_battle();
        }
        Ok(report)
    }

    /// Folds a finished battle back into the persistent state and discards it.
    fn finish_battle(&mut self) {
        let Some(battle) = self.battle.take() else {
            return;
        };

        // Consumables were drunk regardless of how the battle ended.
        for item in battle.items_used() {
            self.state.inventory.remove(item, 1);
        }

        if battle.outcome() == BattleOutcome::Victory {
            let survivors: Vec<HeroId> = battle
                .heroes()
                .iter()
                .filter(|h| h.is_alive())
                .map(|h| h.id.clone())
                .collect();
            for id in survivors {
                if let Some(hero) = self.state.hero_mut(&id) {
                    let leveled =
                        game_core::add_experience(hero, battle.xp_reward(), &self.content.tables);
                    if leveled {
                        tracing::info!(hero = %id, level = hero.level, "level up");
                    }
                }
            }
            for entry in battle.loot() {
                self.state.inventory.add(entry.item.clone(), entry.count);
            }
        }

        tracing::info!(
            outcome = ?battle.outcome(),
            turns = battle.turn(),
            "battle resolved"
        );

        // The session keeps going even if the autosave fails; in-memory
        // state is intact and a later explicit save can retry.
        if let Err(e) = self.store.save(&self.state) {
            tracing::warn!(error = %e, "autosave after battle failed");
        }
    }
}
