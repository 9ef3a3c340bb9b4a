//! Game configuration: TOML file plus command-line overrides.

use crate::cli::PlayArgs;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use strictly_sos::{PlayerKind, Variant, MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use tracing::{debug, info, instrument};

/// Settings for one game session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board edge length.
    board_size: usize,

    /// Rule set.
    variant: Variant,

    /// Who plays blue.
    blue: PlayerKind,

    /// Who plays red.
    red: PlayerKind,

    /// Seed for computer players; random when absent.
    seed: Option<u64>,

    /// Pause before each computer move.
    computer_delay_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: MIN_BOARD_SIZE,
            variant: Variant::Simple,
            blue: PlayerKind::Human,
            red: PlayerKind::Human,
            seed: None,
            computer_delay_ms: 500,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file. Missing keys keep defaults.
    ///
    /// Board sizes below 3 are raised to 3; sizes above [`MAX_BOARD_SIZE`]
    /// are an error.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(variant = %config.variant, size = config.board_size, "Config loaded");
        config.checked()
    }

    /// Builds the effective config: file (if given), then flags on top.
    ///
    /// Fails if the file cannot be loaded or the resulting board size is
    /// larger than [`MAX_BOARD_SIZE`].
    #[instrument(skip(args))]
    pub fn resolve(args: &PlayArgs) -> Result<Self, ConfigError> {
        let base = match &args.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(args).checked()
    }

    /// Applies command-line flags over this config.
    pub fn with_overrides(mut self, args: &PlayArgs) -> Self {
        if let Some(size) = args.size {
            self.board_size = size;
        }
        if let Some(variant) = args.mode {
            self.variant = variant;
        }
        if let Some(blue) = args.blue {
            self.blue = blue;
        }
        if let Some(red) = args.red {
            self.red = red;
        }
        if args.seed.is_some() {
            self.seed = args.seed;
        }
        if let Some(delay) = args.delay_ms {
            self.computer_delay_ms = delay;
        }
        self.clamped()
    }

    fn clamped(mut self) -> Self {
        self.board_size = self.board_size.max(MIN_BOARD_SIZE);
        self
    }

    fn checked(self) -> Result<Self, ConfigError> {
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size {} is larger than the maximum of {}",
                self.board_size, MAX_BOARD_SIZE
            )));
        }
        Ok(self.clamped())
    }

    /// Pause before each computer move.
    pub fn computer_delay(&self) -> Duration {
        Duration::from_millis(self.computer_delay_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.variant(), Variant::Simple);
        assert_eq!(*config.blue(), PlayerKind::Human);
        assert_eq!(config.computer_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_load_partial_file() {
        let file = write_config("board_size = 6\nvariant = \"general\"\nred = \"computer\"\n");
        let config = GameConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.board_size(), 6);
        assert_eq!(*config.variant(), Variant::General);
        assert_eq!(*config.red(), PlayerKind::Computer);
        assert_eq!(*config.blue(), PlayerKind::Human);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_small_size_in_file_is_clamped() {
        let file = write_config("board_size = 1\n");
        assert_eq!(*GameConfig::from_file(file.path()).unwrap().board_size(), 3);
    }

    #[test]
    fn test_oversized_board_in_file_is_an_error() {
        let file = write_config("board_size = 100000\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("larger than the maximum"));
    }

    #[test]
    fn test_oversized_size_flag_is_an_error() {
        let args = PlayArgs {
            size: Some(usize::MAX),
            ..PlayArgs::default()
        };
        let err = GameConfig::resolve(&args).unwrap_err();
        assert!(err.message.contains("larger than the maximum"));

        let args = PlayArgs {
            size: Some(MAX_BOARD_SIZE),
            ..PlayArgs::default()
        };
        assert_eq!(*GameConfig::resolve(&args).unwrap().board_size(), MAX_BOARD_SIZE);
    }

    #[test]
    fn test_bad_variant_is_an_error() {
        let file = write_config("variant = \"blitz\"\n");
        let err = GameConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let err = GameConfig::from_file("/definitely/not/here.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
    }

    #[test]
    fn test_flags_override_file() {
        let file = write_config("board_size = 6\nvariant = \"general\"\nseed = 4\n");
        let args = PlayArgs {
            config: Some(file.path().to_path_buf()),
            size: Some(2),
            blue: Some(PlayerKind::Computer),
            delay_ms: Some(0),
            ..PlayArgs::default()
        };
        let config = GameConfig::resolve(&args).unwrap();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.variant(), Variant::General);
        assert_eq!(*config.blue(), PlayerKind::Computer);
        assert_eq!(*config.seed(), Some(4));
        assert_eq!(config.computer_delay(), Duration::ZERO);
    }
}
