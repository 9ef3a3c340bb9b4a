//! Command-line interface for strictly_sos.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use strictly_sos::{PlayerKind, Variant};

/// Strictly SOS - the SOS letter game in your terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_sos")]
#[command(about = "Play SOS against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game
    Play(PlayArgs),

    /// Print a summary of the rules
    Rules,
}

/// Game settings; each one overrides the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct PlayArgs {
    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board edge length (values below 3 become 3, at most 64)
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Rule set: simple or general
    #[arg(short, long)]
    pub mode: Option<Variant>,

    /// Who plays blue: human or computer
    #[arg(long)]
    pub blue: Option<PlayerKind>,

    /// Who plays red: human or computer
    #[arg(long)]
    pub red: Option<PlayerKind>,

    /// Seed for computer players
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_flags() {
        let cli = Cli::try_parse_from([
            "strictly_sos",
            "play",
            "--size",
            "5",
            "--mode",
            "general",
            "--red",
            "computer",
            "--seed",
            "9",
        ])
        .unwrap();
        let Command::Play(args) = cli.command else {
            panic!("expected play");
        };
        assert_eq!(args.size, Some(5));
        assert_eq!(args.mode, Some(Variant::General));
        assert_eq!(args.red, Some(PlayerKind::Computer));
        assert_eq!(args.blue, None);
        assert_eq!(args.seed, Some(9));
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["strictly_sos", "play", "--mode", "blitz"]).is_err());
    }

    #[test]
    fn test_rules_command() {
        let cli = Cli::try_parse_from(["strictly_sos", "rules"]).unwrap();
        assert!(matches!(cli.command, Command::Rules));
    }
}
