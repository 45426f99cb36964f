//! The persistent aggregate root.

use super::types::{BaseStatus, Hero, HeroId, Inventory};

/// Complete persistent state of a session: roster, inventory, and base.
///
/// Serializes as a single record with exactly these three fields; this is
/// the save-file schema. The runtime controller owns one instance per
/// session and serializes all mutation through itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub heroes: Vec<Hero>,
    pub inventory: Inventory,
    pub base_status: BaseStatus,
}

/// Roster mutation errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterError {
    /// The roster already holds [`GameState::MAX_HEROES`] heroes.
    #[error("party roster is full")]
    RosterFull,

    /// A hero with this id is already in the roster.
    #[error("hero `{0}` already exists")]
    DuplicateHero(HeroId),
}

impl GameState {
    /// Upper bound on roster size.
    pub const MAX_HEROES: usize = 5;

    /// Empty state: no heroes, no items, no buildings. This is also what a
    /// missing or corrupt save file degrades to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a hero, enforcing the roster cap and id uniqueness.
    pub fn add_hero(&mut self, hero: Hero) -> Result<(), RosterError> {
        if self.heroes.len() >= Self::MAX_HEROES {
            return Err(RosterError::RosterFull);
        }
        if self.heroes.iter().any(|h| h.id == hero.id) {
            return Err(RosterError::DuplicateHero(hero.id));
        }
        self.heroes.push(hero);
        Ok(())
    }

    /// Looks up a hero by id.
    pub fn hero(&self, id: &HeroId) -> Option<&Hero> {
        self.heroes.iter().find(|h| h.id == *id)
    }

    /// Mutable hero lookup.
    pub fn hero_mut(&mut self, id: &HeroId) -> Option<&mut Hero> {
        self.heroes.iter_mut().find(|h| h.id == *id)
    }

    /// Heroes flagged eligible for the next battle, in roster order.
    pub fn active_heroes(&self) -> impl Iterator<Item = &Hero> {
        self.heroes.iter().filter(|h| h.is_active)
    }

    /// Checks invariants serde cannot express, for states read from disk.
    pub fn validate(&self) -> Result<(), RosterError> {
        if self.heroes.len() > Self::MAX_HEROES {
            return Err(RosterError::RosterFull);
        }
        for (i, hero) in self.heroes.iter().enumerate() {
            if self.heroes[..i].iter().any(|h| h.id == hero.id) {
                return Err(RosterError::DuplicateHero(hero.id.clone()));
            }
        }
        Ok(())
    }
}
