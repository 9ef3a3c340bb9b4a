//! Strictly SOS - terminal front end.
//!
//! Plays SOS between humans and computer players at a shared keyboard.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod render;
mod session;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command, PlayArgs};
use config::GameConfig;
use session::Session;
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command {
        Command::Play(args) => run_play(args),
        Command::Rules => {
            println!("{}", render::RULES);
            Ok(())
        }
    }
}

/// Logs go to stderr so they never mix with the board.
fn initialize_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[instrument(skip_all)]
fn run_play(args: PlayArgs) -> Result<()> {
    let config = GameConfig::resolve(&args).context("Failed to load game settings")?;
    info!(?config, "Starting play");
    terminal::run(Session::new(config))
}
