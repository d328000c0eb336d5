//! Combat resolution.
//!
//! Pure functions over effective stats and pre-drawn rolls. The battle engine
//! draws the rolls; nothing here touches randomness directly.
//!
//! - `base_damage`: attack minus defense with a floor of 20% of attack
//! - `apply_critical`: ×1.5, floored
//! - `dodge_chance`: `speed / 200`, capped at 50%
//! - `resolve_attack`: the three above combined into one attack

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_critical, base_damage, damage_floor};
pub use hit::{check_dodge, dodge_chance};
pub use result::{AttackOutcome, AttackResult, AttackRolls, resolve_attack};
