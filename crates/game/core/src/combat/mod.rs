//! Attack resolution.
//!
//! The base rule is fully deterministic:
//!
//! ```text
//! damage = max(0, attack - defense)
//! hp     = max(0, hp - damage)
//! ```
//!
//! Variance (critical hits, randomness, status effects) is a future policy
//! layered on top, not part of this core.

/// Result of one attack: damage dealt and the defender's remaining HP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    pub damage: u32,
    pub remaining_hp: u32,
}

/// Resolves a single attack against a defender with `defender_hp` left.
///
/// Damage never goes negative and HP never drops below zero.
pub fn resolve_attack(attack: u32, defense: u32, defender_hp: u32) -> AttackOutcome {
    let damage = attack.saturating_sub(defense);
    let remaining_hp = defender_hp.saturating_sub(damage);
    AttackOutcome {
        damage,
        remaining_hp,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_is_attack_minus_defense() {
        let outcome = resolve_attack(12, 2, 50);
        assert_eq!(outcome.damage, 10);
        assert_eq!(outcome.remaining_hp, 40);
    }

    #[test]
    fn high_defense_zeroes_damage() {
        let outcome = resolve_attack(8, 8, 120);
        assert_eq!(outcome.damage, 0);
        assert_eq!(outcome.remaining_hp, 120);

        let outcome = resolve_attack(3, 9, 120);
        assert_eq!(outcome.damage, 0);
    }

    #[test]
    fn hp_clamps_at_zero() {
        let outcome = resolve_attack(100, 0, 30);
        assert_eq!(outcome.damage, 100);
        assert_eq!(outcome.remaining_hp, 0);
    }
}
