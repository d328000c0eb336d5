//! Command-line arguments and their merge with the environment config.
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use namebrawl_core::{BattleConfig, TimeoutPolicy};

use crate::config::ClientConfig;

/// Turn two names into fighters and let them brawl
#[derive(Debug, Parser)]
#[command(name = "namebrawl")]
#[command(about = "Turn two names into fighters and let them brawl", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Name of the first fighter
    #[arg(default_value = "Trae")]
    pub first: String,

    /// Name of the second fighter
    #[arg(default_value = "Bug")]
    pub second: String,

    /// Battle seed; the same names and seed always replay the same battle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Maximum log entries, closing summary included
    #[arg(long)]
    pub max_log_entries: Option<usize>,

    /// Winner when the log cap is hit: higher-hp or first-combatant
    #[arg(long, value_parser = parse_timeout_policy)]
    pub timeout_policy: Option<TimeoutPolicy>,

    /// Print the fighters and report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

fn parse_timeout_policy(value: &str) -> Result<TimeoutPolicy, String> {
    value.parse().map_err(|_| {
        format!("unknown timeout policy '{value}' (expected higher-hp or first-combatant)")
    })
}

/// How results are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Text { color: bool },
    Json,
}

/// Fully resolved run parameters.
#[derive(Clone, Debug)]
pub struct Settings {
    pub first: String,
    pub second: String,
    pub seed: u64,
    /// True when no seed was configured and one was drawn from the clock.
    pub random_seed: bool,
    pub battle: BattleConfig,
    pub output: OutputMode,
}

impl Settings {
    /// Flags win over environment values; anything unset keeps its default.
    pub fn resolve(cli: Cli, config: &ClientConfig) -> Self {
        let mut battle = config.battle_config();
        if let Some(max) = cli.max_log_entries {
            battle = battle.with_max_log_entries(max);
        }
        if let Some(policy) = cli.timeout_policy {
            battle = battle.with_timeout_policy(policy);
        }

        let (seed, random_seed) = match cli.seed.or(config.seed) {
            Some(seed) => (seed, false),
            None => (clock_seed(), true),
        };

        let output = if cli.json {
            OutputMode::Json
        } else {
            OutputMode::Text {
                color: config.color && !cli.no_color,
            }
        };

        Self {
            first: cli.first,
            second: cli.second,
            seed,
            random_seed,
            battle,
            output,
        }
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
