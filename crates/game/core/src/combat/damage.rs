//! Damage calculation.

use crate::config::BattleConfig;

/// Minimum damage an attack of `attack` deals: `ceil(attack × floor%)`.
///
/// Computed in exact integers, so attack 15 floors at 3. A float evaluation
/// of `15 × 0.2` lands just above 3 and would ceil to 4.
pub fn damage_floor(attack: i32, config: &BattleConfig) -> u32 {
    let attack = u64::from(attack.max(0).unsigned_abs());
    let floor = (attack * u64::from(config.damage_floor_percent)).div_ceil(100);
    saturate(floor)
}

/// Calculate raw damage of a normal attack before crit and dodge.
///
/// # Formula
///
/// ```text
/// atk = max(0, attack)
/// def = max(0, defense)
/// raw = max(ceil(atk × 0.2), atk − def)
/// ```
///
/// The floor keeps high-defense matchups from stalling at zero damage.
pub fn base_damage(attack: i32, defense: i32, config: &BattleConfig) -> u32 {
    let atk = attack.max(0).unsigned_abs();
    let def = defense.max(0).unsigned_abs();

    damage_floor(attack, config).max(atk.saturating_sub(def))
}

/// Critical hit multiplier, floored: `floor(raw × 1.5)`.
pub fn apply_critical(raw: u32, config: &BattleConfig) -> u32 {
    saturate(u64::from(raw) * u64::from(config.crit_multiplier_percent) / 100)
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
