//! Terminal front end for namebrawl.
//!
//! # Architecture
//!
//! ```text
//! main
//!   ├─→ config        environment (NAMEBRAWL_*)
//!   ├─→ cli           flags, merged over the environment into Settings
//!   ├─→ logging       tracing subscriber (stderr or file)
//!   └─→ run           generate → simulate → presentation (text or JSON)
//! ```
//!
//! The core crate does all the game logic; this crate only wires it to a
//! terminal.
pub mod cli;
pub mod config;
pub mod logging;
pub mod presentation;

use std::io::Write;

use anyhow::{Context, Result};
use namebrawl_core::{default_env, generate_with, simulate_with};

use cli::{OutputMode, Settings};
use presentation::{BattleView, Theme};

/// Generates both fighters, runs the battle, and writes the result.
///
/// # Errors
///
/// Returns an error if a fighter cannot be generated or cannot fight, or if
/// writing to `out` fails.
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let env = default_env();

    let first = generate_with(&env, &settings.first)
        .with_context(|| format!("failed to generate '{}'", settings.first))?;
    let second = generate_with(&env, &settings.second)
        .with_context(|| format!("failed to generate '{}'", settings.second))?;

    tracing::info!(
        first = %first.id,
        second = %second.id,
        seed = settings.seed,
        "Starting battle"
    );

    let report = simulate_with(&first, &second, &env, &settings.battle, settings.seed)
        .context("battle could not start")?;

    let view = BattleView {
        first: &first,
        second: &second,
        report: &report,
        seed: settings.seed,
        random_seed: settings.random_seed,
    };

    match settings.output {
        OutputMode::Json => presentation::write_json(out, &view)?,
        OutputMode::Text { color } => presentation::write_text(out, &Theme::new(color), &view)?,
    }

    out.flush().context("failed to flush output")
}
