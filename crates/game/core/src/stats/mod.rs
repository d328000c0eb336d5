//! Effective stats: base stats composed with the current buffs and debuffs.
//!
//! ```text
//! attack  = base + Σ ATK buffs − Σ ATK debuffs
//! defense = base + Σ DEF buffs − Σ DEF debuffs
//! speed   = base
//! ```
//!
//! Values may go negative; the combat formulas clamp where they consume them.
//! The sums saturate at the `i32` bounds.

mod modifiers;

pub use modifiers::{Modifier, ModifierKind, Modifiers};

use crate::character::Stats;

/// Stats in effect for one combatant at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EffectiveStats {
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
}

impl EffectiveStats {
    pub fn compute(base: &Stats, buffs: &Modifiers, debuffs: &Modifiers) -> Self {
        let apply = |value: i32, kind| {
            value
                .saturating_add(buffs.total(kind))
                .saturating_sub(debuffs.total(kind))
        };

        Self {
            attack: apply(base.attack, ModifierKind::Attack),
            defense: apply(base.defense, ModifierKind::Defense),
            speed: base.speed,
        }
    }

    /// Speed used for gauge math, floored at 1 so the gauge always moves.
    pub fn gauge_speed(&self) -> u64 {
        u64::try_from(self.speed.max(1)).unwrap_or(1)
    }
}
