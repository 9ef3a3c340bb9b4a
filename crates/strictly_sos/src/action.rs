//! Move types for SOS.
//!
//! A [`Move`] is a proposal: it says where a letter should go, not who
//! places it. The game attributes it to the side to move when applied.

use super::rules::SosLine;
use super::{Letter, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A proposed placement of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Row index (0-based).
    pub row: usize,
    /// Column index (0-based).
    pub col: usize,
    /// The letter to place.
    pub letter: Letter,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(row: usize, col: usize, letter: Letter) -> Self {
        Self { row, col, letter }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at ({}, {})", self.letter, self.row, self.col)
    }
}

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The target cell is off the board or already filled.
    #[display("Cell ({}, {}) is off the board or already filled", row, col)]
    InvalidMove {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The letter is not S or O.
    #[display("Invalid letter {:?} (expected S or O)", _0)]
    InvalidLetter(#[error(not(source))] String),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,
}

/// What an accepted move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Player the move was attributed to.
    pub player: Player,
    /// The move that was applied.
    pub placed: Move,
    /// SOS lines completed by this move.
    pub lines: Vec<SosLine>,
    /// Whether this move ended the game.
    pub game_over: bool,
}

impl MoveReport {
    /// Returns true if the move completed at least one SOS.
    pub fn scored(&self) -> bool {
        !self.lines.is_empty()
    }
}
