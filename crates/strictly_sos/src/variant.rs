//! The interface shared by the simple and general game variants.

use super::action::{Move, MoveError, MoveReport};
use super::contracts::GameNotOver;
use super::rules::Outcome;
use super::table::Table;
use super::Letter;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which rule set a game is played under.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// First completed SOS wins.
    #[default]
    Simple,
    /// Play until the board is full; each SOS scores a point.
    General,
}

/// A playable SOS rule set.
///
/// Implementors own a [`Table`] and decide what an accepted placement
/// means for the turn order and the end of the game.
pub trait SosVariant {
    /// Returns the shared board and turn state.
    fn table(&self) -> &Table;

    /// Applies an already-parsed move for the side to move.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::InvalidMove`]. A rejected
    /// move leaves the game untouched.
    fn apply(&mut self, mv: Move) -> Result<MoveReport, MoveError>;

    /// Final result, once the game can no longer continue.
    fn outcome(&self) -> Option<Outcome>;

    /// Starts over on an empty board of the same size.
    fn reset(&mut self);

    /// Validates raw input and applies it.
    ///
    /// Checks run in order: game over, then the letter (trimmed and
    /// uppercased), then the target cell.
    #[instrument(skip(self))]
    fn try_move(&mut self, row: usize, col: usize, letter: &str) -> Result<MoveReport, MoveError> {
        GameNotOver::check(self.table())?;
        let letter = Letter::parse(letter)?;
        self.apply(Move::new(row, col, letter))
    }

    /// Boolean form of [`try_move`](Self::try_move): true if accepted.
    fn make_move(&mut self, row: usize, col: usize, letter: &str) -> bool {
        match self.try_move(row, col, letter) {
            Ok(_) => true,
            Err(err) => {
                debug!(%err, row, col, letter, "Move rejected");
                false
            }
        }
    }

    /// Returns true once the game has ended.
    fn is_over(&self) -> bool {
        self.table().is_over()
    }
}
