//! `namebrawl` binary: two names in, one battle out.
//!
//! ```bash
//! namebrawl Alice Bob --seed 42
//! namebrawl --json | jq '.report.winnerId'
//! RUST_LOG=namebrawl_core=debug NAMEBRAWL_LOG_DIR=./logs namebrawl
//! ```

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use namebrawl_client::cli::{Cli, OutputMode, Settings};
use namebrawl_client::config::ClientConfig;
use namebrawl_client::logging;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config.log)?;

    let mut settings = Settings::resolve(cli, &config);
    let stdout = io::stdout();
    if let OutputMode::Text { color } = &mut settings.output {
        *color = *color && stdout.is_terminal();
    }

    tracing::debug!(?settings, "Resolved settings");

    namebrawl_client::run(&settings, &mut stdout.lock())
}
