//! Hero model: effective stats and experience/leveling.
//!
//! Stored state is only `base_stats`, `level`, and `current_xp`. Everything
//! a battle actually uses is derived on demand:
//!
//! ```text
//! effective = base_stats + level_bonus(level) + Σ equipped item modifiers
//! ```
//!
//! Effective stats are never stored, always recomputed.

use crate::env::{ItemOracle, TablesOracle};
use crate::state::{BaseStats, Hero, StatModifiers};

/// Derives a hero's combat stats from base stats, level, and equipment.
///
/// Pure function; unknown equipped items contribute nothing and negative
/// totals clamp at zero.
pub fn effective_stats(
    hero: &Hero,
    items: &dyn ItemOracle,
    tables: &dyn TablesOracle,
) -> BaseStats {
    let mut bonus = tables.level_bonus(hero.level);
    for (_slot, item) in hero.equipment.equipped() {
        bonus += items.stats_for(item);
    }
    hero.base_stats.with_modifiers(bonus)
}

/// Grants `amount` XP and resolves any resulting level-ups.
///
/// Levels are applied one at a time: while the accumulated XP reaches the
/// threshold for the current level, the threshold is subtracted, the level
/// increments, and [`TablesOracle::level_growth`] is added to base stats.
/// A single large grant can therefore advance several levels. At the top
/// defined level XP keeps accumulating without leveling.
///
/// Returns true if at least one level-up occurred.
pub fn add_experience(hero: &mut Hero, amount: u32, tables: &dyn TablesOracle) -> bool {
    hero.current_xp += amount;

    let mut leveled = false;
    while let Some(threshold) = tables.xp_to_next_level(hero.level) {
        if hero.current_xp < threshold {
            break;
        }
        hero.current_xp -= threshold;
        hero.level += 1;
        let growth = tables.level_growth();
        hero.base_stats.hp += growth.hp;
        hero.base_stats.attack += growth.attack;
        hero.base_stats.defense += growth.defense;
        leveled = true;
    }
    leveled
}
