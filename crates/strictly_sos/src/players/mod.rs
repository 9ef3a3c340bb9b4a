//! Move sources: where the next move comes from.
//!
//! A source only proposes moves. Applying them is always the caller's job,
//! through [`SosVariant::apply`](crate::SosVariant::apply).

mod computer;
mod human;

pub use computer::ComputerPlayer;
pub use human::HumanPlayer;

use super::{Board, Move, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Something that can propose moves for one side.
pub trait MoveSource {
    /// Returns the display name.
    fn name(&self) -> &str;

    /// Returns the side this source plays.
    fn color(&self) -> Player;

    /// Proposes a move for the given board, or `None` if this source has
    /// nothing to offer (a human, or a full board).
    ///
    /// Never changes game state.
    fn choose_move(&mut self, board: &Board) -> Option<Move>;

    /// True if the source moves on its own without outside input.
    fn is_automatic(&self) -> bool;
}

/// Kind of player seated at one side of the board.
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
pub enum PlayerKind {
    /// Moves come from the caller (keyboard, clicks, ...).
    #[default]
    Human,
    /// Moves are picked at random among empty cells.
    Computer,
}

/// Builds the move source for one side.
///
/// A `seed` makes a computer player deterministic; humans ignore it.
#[instrument]
pub fn seat(kind: PlayerKind, color: Player, seed: Option<u64>) -> Box<dyn MoveSource> {
    let name = match color {
        Player::Blue => "Blue",
        Player::Red => "Red",
    };
    match (kind, seed) {
        (PlayerKind::Human, _) => Box::new(HumanPlayer::new(name, color)),
        (PlayerKind::Computer, Some(seed)) => Box::new(ComputerPlayer::seeded(name, color, seed)),
        (PlayerKind::Computer, None) => Box::new(ComputerPlayer::new(name, color)),
    }
}
