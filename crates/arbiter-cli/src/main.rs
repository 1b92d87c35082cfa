//! Arbiter - Referee for two-player chess at a shared terminal.
//!
//! Renders the board between turns, enforces the rules of play, and
//! saves or resumes games as JSON files.

mod config;
mod notation;
mod render;
mod session;
mod storage;

use clap::Parser;
use config::CliConfig;
use session::Session;
use std::path::PathBuf;

/// Arbiter - Referee for two-player chess at a shared terminal.
#[derive(Parser)]
#[command(name = "arbiter")]
#[command(about = "Referee for two-player chess at a shared terminal")]
struct Args {
    /// Resume the game saved at this path instead of starting fresh
    #[arg(long)]
    load: Option<PathBuf>,

    /// Read settings from this file
    #[arg(long, default_value = "arbiter.toml")]
    config: PathBuf,

    /// Draw the board without ANSI colors
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let mut config = CliConfig::load_from(&args.config).unwrap_or_default();
    if args.no_color {
        config.color = false;
    }

    let mut session = match &args.load {
        Some(path) => {
            let game = storage::load_game(path)?;
            tracing::info!("Resuming saved game: {:?}", path);
            Session::with_game(game, config)
        }
        None => Session::new(config),
    };
    session.run()?;
    Ok(())
}
