//! Client configuration read from the environment.
//!
//! Environment variables (a `.env` file is loaded first by `main`):
//! - `NAMEBRAWL_SEED` - Battle seed (default: drawn from the clock)
//! - `NAMEBRAWL_MAX_LOG_ENTRIES` - Log cap, summary included (default: 200)
//! - `NAMEBRAWL_TIMEOUT_POLICY` - `higher-hp` or `first-combatant`
//! - `NAMEBRAWL_LOG_DIR` - Write logs to `namebrawl.log` in this directory;
//!   set but empty selects the platform cache directory
//! - `NAMEBRAWL_COLOR` - `true` / `false` (default: true)
use std::env;
use std::path::PathBuf;

use namebrawl_core::{BattleConfig, TimeoutPolicy};

/// Settings taken from the environment. Command-line flags override them.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub seed: Option<u64>,
    pub max_log_entries: Option<usize>,
    pub timeout_policy: Option<TimeoutPolicy>,
    pub log: LogDestination,
    pub color: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_log_entries: None,
            timeout_policy: None,
            log: LogDestination::Stderr,
            color: true,
        }
    }
}

/// Where tracing output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogDestination {
    Stderr,
    /// `namebrawl.log` in the given directory.
    Directory(PathBuf),
    /// `namebrawl.log` in the platform cache directory.
    PlatformDefault,
}

impl ClientConfig {
    pub const SEED_VAR: &'static str = "NAMEBRAWL_SEED";
    pub const MAX_LOG_ENTRIES_VAR: &'static str = "NAMEBRAWL_MAX_LOG_ENTRIES";
    pub const TIMEOUT_POLICY_VAR: &'static str = "NAMEBRAWL_TIMEOUT_POLICY";
    pub const LOG_DIR_VAR: &'static str = "NAMEBRAWL_LOG_DIR";
    pub const COLOR_VAR: &'static str = "NAMEBRAWL_COLOR";

    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source. Unparseable values are
    /// ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log = match lookup(Self::LOG_DIR_VAR) {
            None => LogDestination::Stderr,
            Some(dir) if dir.trim().is_empty() => LogDestination::PlatformDefault,
            Some(dir) => LogDestination::Directory(PathBuf::from(dir)),
        };

        Self {
            seed: read_parsed(lookup(Self::SEED_VAR)),
            max_log_entries: read_parsed(lookup(Self::MAX_LOG_ENTRIES_VAR)),
            timeout_policy: read_parsed(lookup(Self::TIMEOUT_POLICY_VAR)),
            log,
            color: read_parsed(lookup(Self::COLOR_VAR)).unwrap_or(true),
        }
    }

    /// Battle config with the environment overrides applied.
    pub fn battle_config(&self) -> BattleConfig {
        let mut battle = BattleConfig::default();
        if let Some(max) = self.max_log_entries {
            battle = battle.with_max_log_entries(max);
        }
        if let Some(policy) = self.timeout_policy {
            battle = battle.with_timeout_policy(policy);
        }
        battle
    }
}

fn read_parsed<T>(value: Option<String>) -> Option<T>
where
    T: std::str::FromStr,
{
    value?.trim().parse().ok()
}
