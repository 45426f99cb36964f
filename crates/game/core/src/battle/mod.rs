//! Turn-based battle resolution.
//!
//! A [`BattleState`] is an ephemeral snapshot built from the active heroes'
//! effective stats and an encounter's enemy roster. It is never persisted:
//! the controller folds the results back into [`GameState`] when a terminal
//! outcome is reached and discards the battle.
//!
//! State machine: `InProgress → {Victory, Defeat, Fled}`, all terminal.
//! Every mutation flows through [`BattleState::process_turn`], which
//! validates the player action before touching anything.

mod error;

pub use error::{BattleError, BattleStartError};

use crate::combat::resolve_attack;
use crate::env::{EncounterOracle, EnemySpec, ItemOracle, LootEntry, TablesOracle};
use crate::state::{BaseStats, EncounterId, GameState, HeroId, ItemId};
use crate::stats::effective_stats;

/// Where the battle stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BattleOutcome {
    #[default]
    InProgress,
    Victory,
    Defeat,
    Fled,
}

impl BattleOutcome {
    /// Terminal outcomes accept no further turns.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// The player's choice for one turn. Indices refer to the battle's
/// hero/enemy lists in roster order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum PlayerAction {
    /// One hero attacks one living enemy.
    Attack { attacker: usize, target: usize },
    /// A hero drinks a healing consumable; the heal is the item's `hp`
    /// modifier, which must be positive.
    UseItem { hero: usize, item: ItemId },
    /// Abandon the battle immediately; enemies do not act.
    Flee,
}

/// A hero's combat snapshot: effective stats locked at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroCombatant {
    pub id: HeroId,
    pub name: String,
    /// Effective stats at battle start; `stats.hp` doubles as max HP.
    pub stats: BaseStats,
    pub hp: u32,
}

impl HeroCombatant {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// An enemy combatant instantiated from an [`EnemySpec`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyCombatant {
    pub id: String,
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
}

impl EnemyCombatant {
    fn from_spec(spec: &EnemySpec) -> Self {
        Self {
            id: spec.id.clone(),
            hp: spec.hp,
            attack: spec.attack,
            defense: spec.defense,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}

/// One observable thing that happened during a turn, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TurnEvent {
    HeroAttack {
        attacker: usize,
        target: usize,
        damage: u32,
        enemy_hp: u32,
    },
    EnemyAttack {
        enemy: usize,
        target: usize,
        damage: u32,
        hero_hp: u32,
    },
    ItemUsed {
        hero: usize,
        item: ItemId,
        healed: u32,
        hero_hp: u32,
    },
    Fled,
}

/// What one call to [`BattleState::process_turn`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Turn counter after this action resolved.
    pub turn: u32,
    pub events: Vec<TurnEvent>,
    pub outcome: BattleOutcome,
}

/// Ephemeral battle state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    heroes: Vec<HeroCombatant>,
    enemies: Vec<EnemyCombatant>,
    turn: u32,
    outcome: BattleOutcome,
    xp_reward: u32,
    loot: Vec<LootEntry>,
    items_used: Vec<ItemId>,
}

impl BattleState {
    /// Builds the initial snapshot: every active hero at full effective HP
    /// against the encounter's enemy roster, turn 0, outcome `InProgress`.
    pub fn start(
        state: &GameState,
        encounter_id: &EncounterId,
        items: &dyn ItemOracle,
        encounters: &dyn EncounterOracle,
        tables: &dyn TablesOracle,
    ) -> Result<Self, BattleStartError> {
        let Some(encounter) = encounters.encounter(encounter_id) else {
            return Err(BattleStartError::UnknownEncounter(encounter_id.clone()));
        };

        let heroes: Vec<HeroCombatant> = state
            .active_heroes()
            .map(|hero| {
                let stats = effective_stats(hero, items, tables);
                HeroCombatant {
                    id: hero.id.clone(),
                    name: hero.name.clone(),
                    hp: stats.hp,
                    stats,
                }
            })
            .collect();
        if heroes.is_empty() {
            return Err(BattleStartError::NoActiveHeroes);
        }

        Ok(Self {
            heroes,
            enemies: encounter.enemies.iter().map(EnemyCombatant::from_spec).collect(),
            turn: 0,
            outcome: BattleOutcome::InProgress,
            xp_reward: encounter.xp_reward,
            loot: encounter.loot.clone(),
            items_used: Vec::new(),
        })
    }

    pub fn heroes(&self) -> &[HeroCombatant] {
        &self.heroes
    }

    pub fn enemies(&self) -> &[EnemyCombatant] {
        &self.enemies
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn outcome(&self) -> BattleOutcome {
        self.outcome
    }

    /// XP granted per surviving hero on victory.
    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    /// Loot granted on victory.
    pub fn loot(&self) -> &[LootEntry] {
        &self.loot
    }

    /// Items consumed during the battle, to be deducted at fold-back.
    pub fn items_used(&self) -> &[ItemId] {
        &self.items_used
    }

    /// Runs one full turn: the player action, then one action from each
    /// living enemy, then the terminal check. The turn counter advances by
    /// one. `Flee` resolves immediately, skipping the enemy phase and the
    /// counter.
    ///
    /// A rejected action (fainted or out-of-range unit) mutates nothing
    /// and leaves the counter alone.
    pub fn process_turn(
        &mut self,
        action: &PlayerAction,
        items: &dyn ItemOracle,
    ) -> Result<TurnReport, BattleError> {
        if self.outcome.is_terminal() {
            return Err(BattleError::BattleOver);
        }

        let mut events = Vec::new();

        match action {
            PlayerAction::Flee => {
                self.outcome = BattleOutcome::Fled;
                events.push(TurnEvent::Fled);
                return Ok(TurnReport {
                    turn: self.turn,
                    events,
                    outcome: self.outcome,
                });
            }
            PlayerAction::Attack { attacker, target } => {
                let attack = match self.heroes.get(*attacker) {
                    Some(hero) if hero.is_alive() => hero.stats.attack,
                    _ => return Err(BattleError::InvalidTarget),
                };
                let Some(enemy) = self.enemies.get_mut(*target).filter(|e| e.is_alive()) else {
                    return Err(BattleError::InvalidTarget);
                };
                let outcome = resolve_attack(attack, enemy.defense, enemy.hp);
                enemy.hp = outcome.remaining_hp;
                events.push(TurnEvent::HeroAttack {
                    attacker: *attacker,
                    target: *target,
                    damage: outcome.damage,
                    enemy_hp: outcome.remaining_hp,
                });
            }
            PlayerAction::UseItem { hero, item } => {
                // Only healing consumables may be drunk; equipment and
                // resources have no in-battle use and are not destroyed.
                let heal = items.stats_for(item).hp;
                if heal <= 0 {
                    return Err(BattleError::ItemNotUsable);
                }
                let heal = heal as u32;
                let Some(combatant) = self.heroes.get_mut(*hero).filter(|h| h.is_alive()) else {
                    return Err(BattleError::InvalidTarget);
                };
                let restored = combatant.hp.saturating_add(heal).min(combatant.stats.hp);
                let healed = restored - combatant.hp;
                combatant.hp = restored;
                self.items_used.push(item.clone());
                events.push(TurnEvent::ItemUsed {
                    hero: *hero,
                    item: item.clone(),
                    healed,
                    hero_hp: restored,
                });
            }
        }

        // Enemy phase: each living enemy strikes the weakest living hero.
        for enemy_index in 0..self.enemies.len() {
            if !self.enemies[enemy_index].is_alive() {
                continue;
            }
            let Some(target) = self.weakest_living_hero() else {
                break;
            };
            let enemy_attack = self.enemies[enemy_index].attack;
            let hero = &mut self.heroes[target];
            let outcome = resolve_attack(enemy_attack, hero.stats.defense, hero.hp);
            hero.hp = outcome.remaining_hp;
            events.push(TurnEvent::EnemyAttack {
                enemy: enemy_index,
                target,
                damage: outcome.damage,
                hero_hp: outcome.remaining_hp,
            });
        }

        self.turn += 1;

        if self.enemies.iter().all(|e| !e.is_alive()) {
            self.outcome = BattleOutcome::Victory;
        } else if self.heroes.iter().all(|h| !h.is_alive()) {
            self.outcome = BattleOutcome::Defeat;
        }

        Ok(TurnReport {
            turn: self.turn,
            events,
            outcome: self.outcome,
        })
    }

    /// Enemy targeting policy: lowest current HP, ties broken by lowest
    /// roster index.
    fn weakest_living_hero(&self) -> Option<usize> {
        self.heroes
            .iter()
            .enumerate()
            .filter(|(_, h)| h.is_alive())
            .min_by_key(|(index, h)| (h.hp, *index))
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BaseStats, GameState, HeroClass, Hero, HeroId};
    use crate::testutil::{FixtureCatalog, FixtureEncounters, FixtureTables, warrior};

    fn battle_with_party(heroes: Vec<Hero>) -> Result<BattleState, BattleStartError> {
        let mut state = GameState::new();
        for hero in heroes {
            state.add_hero(hero).unwrap();
        }
        BattleState::start(
            &state,
            &"goblin_patrol".into(),
            &FixtureCatalog::new(),
            &FixtureEncounters::new(),
            &FixtureTables::new(),
        )
    }

    #[test]
    fn start_snapshots_active_heroes_at_full_hp() {
        let battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        assert_eq!(battle.turn(), 0);
        assert_eq!(battle.outcome(), BattleOutcome::InProgress);
        assert_eq!(battle.heroes().len(), 1);
        assert_eq!(battle.heroes()[0].hp, 120);
        assert_eq!(battle.enemies().len(), 2);
    }

    #[test]
    fn start_without_active_heroes_fails() {
        let mut retired = warrior("hero_0");
        retired.is_active = false;
        assert_eq!(
            battle_with_party(vec![retired]).unwrap_err(),
            BattleStartError::NoActiveHeroes
        );
    }

    #[test]
    fn start_with_unknown_encounter_fails() {
        let mut state = GameState::new();
        state.add_hero(warrior("hero_0")).unwrap();
        let err = BattleState::start(
            &state,
            &"dragon_lair".into(),
            &FixtureCatalog::new(),
            &FixtureEncounters::new(),
            &FixtureTables::new(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            BattleStartError::UnknownEncounter("dragon_lair".into())
        );
    }

    #[test]
    fn worked_example_first_turn() {
        // Warrior 120/12/8 vs goblins 50/8/2: the attack deals 10, the
        // counter-attacks deal 0, and the battle stays in progress.
        let mut battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        let report = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            )
            .unwrap();

        assert_eq!(report.turn, 1);
        assert_eq!(report.outcome, BattleOutcome::InProgress);
        assert_eq!(
            report.events[0],
            TurnEvent::HeroAttack {
                attacker: 0,
                target: 0,
                damage: 10,
                enemy_hp: 40,
            }
        );
        // Both goblins counter-attack for 8 against 8 defense: no damage.
        assert_eq!(report.events.len(), 3);
        assert_eq!(battle.heroes()[0].hp, 120);
        assert_eq!(battle.enemies()[0].hp, 40);
    }

    #[test]
    fn enemies_focus_the_weakest_hero() {
        let squishy = Hero::new(
            HeroId::from("hero_1"),
            "Mage Hero",
            HeroClass::Mage,
            BaseStats::new(80, 5, 3),
        );
        let mut battle = battle_with_party(vec![warrior("hero_0"), squishy]).unwrap();

        let report = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            )
            .unwrap();

        // Mage has 80 HP vs warrior's 120, so both goblins hit the mage
        // for 8 - 3 = 5 each.
        let enemy_hits: Vec<_> = report
            .events
            .iter()
            .filter_map(|e| match e {
                TurnEvent::EnemyAttack { target, damage, .. } => Some((*target, *damage)),
                _ => None,
            })
            .collect();
        assert_eq!(enemy_hits, vec![(1, 5), (1, 5)]);
        assert_eq!(battle.heroes()[1].hp, 70);
    }

    #[test]
    fn equal_hp_ties_break_to_lowest_index() {
        let twin_a = warrior("hero_0");
        let twin_b = warrior("hero_1");
        let mut battle = battle_with_party(vec![twin_a, twin_b]).unwrap();

        let report = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            )
            .unwrap();

        for event in &report.events {
            if let TurnEvent::EnemyAttack { target, .. } = event {
                assert_eq!(*target, 0);
            }
        }
    }

    #[test]
    fn fleeing_skips_enemy_phase_and_turn_counter() {
        let mut battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        let report = battle
            .process_turn(&PlayerAction::Flee, &FixtureCatalog::new())
            .unwrap();

        assert_eq!(report.outcome, BattleOutcome::Fled);
        assert_eq!(report.events, vec![TurnEvent::Fled]);
        assert_eq!(battle.turn(), 0);
        assert_eq!(battle.heroes()[0].hp, 120);

        // Terminal: no further turns accepted.
        assert_eq!(
            battle.process_turn(&PlayerAction::Flee, &FixtureCatalog::new()),
            Err(BattleError::BattleOver)
        );
    }

    #[test]
    fn invalid_targets_leave_the_battle_untouched() {
        let mut battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        let before = battle.clone();

        for action in [
            PlayerAction::Attack {
                attacker: 7,
                target: 0,
            },
            PlayerAction::Attack {
                attacker: 0,
                target: 9,
            },
        ] {
            assert_eq!(
                battle.process_turn(&action, &FixtureCatalog::new()),
                Err(BattleError::InvalidTarget)
            );
            assert_eq!(battle, before);
        }
    }

    #[test]
    fn attacking_a_fainted_enemy_is_invalid() {
        let mut hero = warrior("hero_0");
        hero.base_stats.attack = 60; // one-shots a goblin
        let mut battle = battle_with_party(vec![hero]).unwrap();

        battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            )
            .unwrap();
        assert_eq!(battle.enemies()[0].hp, 0);

        assert_eq!(
            battle.process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            ),
            Err(BattleError::InvalidTarget)
        );
    }

    #[test]
    fn defeating_all_enemies_yields_victory() {
        let mut hero = warrior("hero_0");
        hero.base_stats.attack = 60;
        let mut battle = battle_with_party(vec![hero]).unwrap();
        let items = FixtureCatalog::new();

        let first = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &items,
            )
            .unwrap();
        assert_eq!(first.outcome, BattleOutcome::InProgress);

        let second = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 1,
                },
                &items,
            )
            .unwrap();
        assert_eq!(second.outcome, BattleOutcome::Victory);
        assert_eq!(second.turn, 2);
    }

    #[test]
    fn party_wipe_yields_defeat() {
        let mut fragile = warrior("hero_0");
        fragile.base_stats = BaseStats::new(5, 1, 0);
        let mut battle = battle_with_party(vec![fragile]).unwrap();

        let report = battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &FixtureCatalog::new(),
            )
            .unwrap();

        // Two goblins at 8 attack vs 0 defense finish 5 HP immediately.
        assert_eq!(report.outcome, BattleOutcome::Defeat);
        assert_eq!(battle.heroes()[0].hp, 0);
    }

    #[test]
    fn potions_heal_up_to_max_and_are_recorded() {
        let mut battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        let items = FixtureCatalog::new();

        // Take some hits first: drop defense so the goblins connect.
        battle.heroes[0].stats.defense = 0;
        battle
            .process_turn(
                &PlayerAction::Attack {
                    attacker: 0,
                    target: 0,
                },
                &items,
            )
            .unwrap();
        assert_eq!(battle.heroes()[0].hp, 104);

        let report = battle
            .process_turn(
                &PlayerAction::UseItem {
                    hero: 0,
                    item: "health_potion".into(),
                },
                &items,
            )
            .unwrap();

        // +25 heal clamps to the 120 max before the enemy phase hits again.
        assert_eq!(
            report.events[0],
            TurnEvent::ItemUsed {
                hero: 0,
                item: "health_potion".into(),
                healed: 16,
                hero_hp: 120,
            }
        );
        assert_eq!(battle.items_used(), ["health_potion".into()]);
    }

    #[test]
    fn non_healing_items_cannot_be_drunk() {
        let mut battle = battle_with_party(vec![warrior("hero_0")]).unwrap();
        let items = FixtureCatalog::new();
        let before = battle.clone();

        // A weapon has no hp modifier; an unknown id has no modifiers at
        // all. Neither is consumed or recorded.
        for item in [ItemId::from("sword"), ItemId::from("mystery_herb")] {
            assert_eq!(
                battle.process_turn(&PlayerAction::UseItem { hero: 0, item }, &items),
                Err(BattleError::ItemNotUsable)
            );
        }
        assert_eq!(battle, before);
        assert!(battle.items_used().is_empty());
    }

    #[test]
    fn using_an_item_on_a_fainted_or_missing_hero_is_invalid() {
        let mut battle = battle_with_party(vec![warrior("hero_0"), warrior("hero_1")]).unwrap();
        battle.heroes[0].hp = 0;
        let items = FixtureCatalog::new();
        let before = battle.clone();

        for hero in [0, 5] {
            assert_eq!(
                battle.process_turn(
                    &PlayerAction::UseItem {
                        hero,
                        item: "health_potion".into(),
                    },
                    &items,
                ),
                Err(BattleError::InvalidTarget)
            );
        }
        assert_eq!(battle, before);
    }
}
