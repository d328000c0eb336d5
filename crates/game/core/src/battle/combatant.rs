//! Mutable per-battle state wrapped around an immutable [`Character`].

use crate::character::Character;
use crate::stats::{EffectiveStats, Modifiers};

/// Why a character cannot enter a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantDefect {
    #[error("max HP must be positive")]
    NonPositiveMaxHp,
    #[error("HP must be positive")]
    NonPositiveHp,
    #[error("HP exceeds max HP")]
    HpAboveMax,
    #[error("{0} must not be negative")]
    NegativeStat(&'static str),
    #[error("id is reserved for system log entries")]
    ReservedId,
}

/// Checks the preconditions a character must meet to fight.
pub fn validate(character: &Character) -> Result<(), CombatantDefect> {
    let stats = &character.stats;

    if character.id.is_system() {
        return Err(CombatantDefect::ReservedId);
    }
    if stats.max_hp <= 0 {
        return Err(CombatantDefect::NonPositiveMaxHp);
    }
    if stats.hp <= 0 {
        return Err(CombatantDefect::NonPositiveHp);
    }
    if stats.hp > stats.max_hp {
        return Err(CombatantDefect::HpAboveMax);
    }
    for (name, value) in [
        ("attack", stats.attack),
        ("defense", stats.defense),
        ("speed", stats.speed),
    ] {
        if value < 0 {
            return Err(CombatantDefect::NegativeStat(name));
        }
    }
    Ok(())
}

/// A character in a running battle.
///
/// Starts from the character's current HP with empty modifier lists.
#[derive(Clone, Debug)]
pub struct Combatant<'a> {
    pub character: &'a Character,
    /// May drop below zero on the killing blow.
    pub current_hp: i32,
    pub buffs: Modifiers,
    pub debuffs: Modifiers,
}

impl<'a> Combatant<'a> {
    pub fn new(character: &'a Character) -> Self {
        Self {
            character,
            current_hp: character.stats.hp,
            buffs: Modifiers::new(),
            debuffs: Modifiers::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.character.name
    }

    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn effective_stats(&self) -> EffectiveStats {
        EffectiveStats::compute(&self.character.stats, &self.buffs, &self.debuffs)
    }

    /// Ages this combatant's own modifiers by one acting turn.
    pub fn tick_modifiers(&mut self) {
        self.buffs.tick();
        self.debuffs.tick();
    }

    pub fn take_damage(&mut self, damage: u32) {
        let damage = i32::try_from(damage).unwrap_or(i32::MAX);
        self.current_hp = self.current_hp.saturating_sub(damage);
    }
}
