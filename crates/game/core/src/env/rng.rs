//! RNG oracle for seed-addressed random rolls.
//!
//! The battle engine never owns a mutable generator. Every roll is addressed
//! by a seed derived from the battle seed, the turn, the roller, and the
//! kind of roll (see [`compute_seed`]). A battle is therefore reproducible
//! from its seed alone, and a test can swap the oracle for a stub that forces
//! every roll one way.

use crate::config::BattleConfig;

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform roll in `[0, 10_000)` basis points.
    fn roll_basis_points(&self, seed: u64) -> u32 {
        self.next_u32(seed) % BattleConfig::BASIS_POINTS
    }

    /// Returns true with probability `chance / 10_000`.
    ///
    /// A chance of 0 never succeeds; 10 000 or more always does.
    fn check(&self, seed: u64, chance: u32) -> bool {
        self.roll_basis_points(seed) < chance
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// This implementation uses PCG-XSH-RR, which produces 32-bit output from
/// 64-bit state. Fast, small, and statistically solid enough for battle rolls.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// What a roll decides. Used as the `context` input of [`compute_seed`] so
/// the rolls made within one turn are independent of each other.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum RollKind {
    /// Coin flip when both gauges fill in the same step.
    TieBreak = 0,
    /// Whether the acting combatant uses its class skill.
    Skill = 1,
    /// Critical hit check.
    Critical = 2,
    /// Defender dodge check.
    Dodge = 3,
}

/// Roller id used for rolls that belong to neither combatant.
pub const SYSTEM_ROLLER: u32 = u32::MAX;

/// Compute deterministic seed for a single roll.
///
/// # Arguments
///
/// * `battle_seed` - Seed supplied at the API boundary
/// * `nonce` - Turn number the roll belongs to
/// * `roller` - 0 for the first combatant, 1 for the second, [`SYSTEM_ROLLER`]
///   for scheduler rolls
/// * `kind` - Which decision the roll makes
pub fn compute_seed(battle_seed: u64, nonce: u64, roller: u32, kind: RollKind) -> u64 {
    // SplitMix64 / FxHash style multipliers
    let mut hash = battle_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= (roller as u64).wrapping_mul(0x517cc1b727220a95);
    hash ^= (kind as u64).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
