//! Attack resolution.

use crate::config::BattleConfig;
use crate::stats::EffectiveStats;

use super::damage::{apply_critical, base_damage};
use super::hit::check_dodge;

/// Outcome of an attack attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    /// Defender dodged; no damage.
    Dodged,
    /// Normal hit.
    Hit,
    /// Critical hit.
    Critical,
}

/// Pre-drawn basis-point rolls for one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttackRolls {
    pub critical: u32,
    pub dodge: u32,
}

/// Result of a combat resolution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,

    /// Damage dealt; 0 when dodged.
    pub damage: u32,

    /// Whether the crit roll succeeded. Stays set on a dodged attack.
    pub is_crit: bool,
}

impl AttackResult {
    pub fn is_dodge(&self) -> bool {
        self.outcome == AttackOutcome::Dodged
    }
}

/// Resolve a normal attack: raw damage, then crit, then dodge.
///
/// Crit and dodge are independent rolls; a dodge zeroes the damage regardless
/// of the crit.
pub fn resolve_attack(
    attacker: &EffectiveStats,
    defender: &EffectiveStats,
    rolls: AttackRolls,
    config: &BattleConfig,
) -> AttackResult {
    let mut damage = base_damage(attacker.attack, defender.defense, config);

    let is_crit = rolls.critical < config.crit_chance;
    if is_crit {
        damage = apply_critical(damage, config);
    }

    if check_dodge(defender.speed, rolls.dodge, config) {
        return AttackResult {
            outcome: AttackOutcome::Dodged,
            damage: 0,
            is_crit,
        };
    }

    AttackResult {
        outcome: if is_crit {
            AttackOutcome::Critical
        } else {
            AttackOutcome::Hit
        },
        damage,
        is_crit,
    }
}
