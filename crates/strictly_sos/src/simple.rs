//! Simple mode: the first player to complete an SOS wins.

use super::action::{Move, MoveError, MoveReport};
use super::rules::Outcome;
use super::table::Table;
use super::variant::SosVariant;
use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// A simple-mode game.
///
/// The turn passes after every move that does not score. A scoring move
/// ends the game at once and the turn stays with the winner. Filling the
/// board without an SOS does not end the game; [`outcome`](SosVariant::outcome)
/// reports it as a draw so callers can stop asking for moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleGame {
    pub(crate) table: Table,
    pub(crate) winner: Option<Player>,
}

impl SimpleGame {
    /// Creates a new simple game on a `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            table: Table::new(size),
            winner: None,
        }
    }

    /// Returns the winner, if someone has completed an SOS.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }
}

impl SosVariant for SimpleGame {
    fn table(&self) -> &Table {
        &self.table
    }

    #[instrument(skip(self))]
    fn apply(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let (player, lines) = self.table.place(mv)?;

        if lines.is_empty() {
            self.table.toggle_turn();
        } else {
            self.winner = Some(player);
            self.table.finish();
            info!(winner = %player, "SOS formed, game over");
        }

        Ok(MoveReport {
            player,
            placed: mv,
            lines,
            game_over: self.table.is_over(),
        })
    }

    fn outcome(&self) -> Option<Outcome> {
        match self.winner {
            Some(player) => Some(Outcome::Winner(player)),
            None if self.table.board().is_full() => Some(Outcome::Draw),
            None => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::new(self.table.board().size());
    }
}
