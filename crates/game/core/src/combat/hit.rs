//! Dodge chance.

use crate::config::BattleConfig;

/// Dodge chance in basis points: `min(cap, speed / divisor)`.
///
/// Non-positive speed never dodges. With the default tuning, speed 10 gives
/// 5% and anything from speed 100 upward sits at the 50% cap.
pub fn dodge_chance(speed: i32, config: &BattleConfig) -> u32 {
    if config.dodge_speed_divisor == 0 {
        return config.dodge_cap;
    }

    let speed = u64::from(speed.max(0).unsigned_abs());
    let chance =
        speed * u64::from(BattleConfig::BASIS_POINTS) / u64::from(config.dodge_speed_divisor);

    u32::try_from(chance).unwrap_or(u32::MAX).min(config.dodge_cap)
}

/// Check if the defender dodges, given a roll in `[0, 10_000)`.
pub fn check_dodge(speed: i32, roll: u32, config: &BattleConfig) -> bool {
    roll < dodge_chance(speed, config)
}
