//! Deterministic character generation and battle simulation.
//!
//! `namebrawl-core` turns any name into a [`Character`] via its SHA-256 digest
//! and plays two characters against each other on an action-gauge timeline.
//! Everything here is pure: generation depends only on the name, and a battle
//! only on its characters, its [`BattleConfig`], and a seed. Hashing and
//! randomness are reached through the oracles in [`env`], so tests and
//! alternative front ends can swap them out.
pub mod battle;
pub mod character;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod stats;

pub use battle::{
    Battle, BattleEnd, BattleError, BattleLogEntry, BattleReport, Replay, ReplayFrame, Side,
    Skill, simulate, simulate_with,
};
pub use character::{
    Avatar, Character, CharacterClass, CharacterId, GenerateError, HexColor, Stats, generate,
    generate_with,
};
pub use combat::{AttackOutcome, AttackResult};
pub use config::{BattleConfig, TimeoutPolicy};
pub use env::{
    DigestOracle, Env, GameEnv, OracleError, PcgRng, RngOracle, Sha256Digest, default_env,
};
pub use error::{ErrorSeverity, GameError};
pub use stats::{EffectiveStats, Modifier, ModifierKind, Modifiers};
