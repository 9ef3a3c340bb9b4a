//! Board and turn state shared by both game variants.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::rules::{detect_lines, SosLine};
use super::{Board, Cell, Letter, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Everything a variant needs to place letters and take turns.
///
/// Variants own a `Table` and decide what happens after a placement:
/// whether the turn passes and whether the game ends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub(crate) board: Board,
    pub(crate) to_move: Player,
    pub(crate) over: bool,
    pub(crate) last_lines: Vec<SosLine>,
    pub(crate) last_mover: Option<Player>,
}

impl Table {
    /// Creates an empty table; blue moves first.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
            to_move: Player::Blue,
            over: false,
            last_lines: Vec::new(),
            last_mover: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Lines completed by the most recent move.
    pub fn last_lines(&self) -> &[SosLine] {
        &self.last_lines
    }

    /// Player who made the most recent move.
    pub fn last_mover(&self) -> Option<Player> {
        self.last_mover
    }

    /// Places a letter for the side to move and scans for new lines.
    ///
    /// The turn is not passed; that is up to the variant.
    ///
    /// # Errors
    ///
    /// [`MoveError::GameOver`] or [`MoveError::InvalidMove`]; nothing is
    /// changed on error.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub(crate) fn place(&mut self, mv: Move) -> Result<(Player, Vec<SosLine>), MoveError> {
        MoveContract::pre(self, &mv)?;

        let player = self.to_move;
        self.board.place(mv.row, mv.col, mv.letter, player)?;
        self.last_mover = Some(player);

        let lines = detect_lines(&self.board, mv.row, mv.col);
        self.last_lines = lines.clone();
        debug!(lines = lines.len(), move_count = self.board.move_count(), "Letter placed");

        if cfg!(debug_assertions) {
            let post = MoveContract::post(self);
            if let Err(violations) = &post {
                warn!(?violations, "Table invariants violated after move");
            }
            debug_assert!(post.is_ok(), "Table invariants violated after move");
        }

        Ok((player, lines))
    }

    /// Passes the turn to the other player.
    pub(crate) fn toggle_turn(&mut self) {
        self.to_move = self.to_move.opponent();
    }

    /// Marks the game as finished. There is no way back.
    pub(crate) fn finish(&mut self) {
        self.over = true;
    }

    /// Counts filled cells by scanning the board.
    pub fn filled_cells(&self) -> usize {
        self.board
            .cells()
            .iter()
            .filter(|cell| **cell != Cell::Empty)
            .count()
    }

    /// Checks that a line really is S-O-S on the current board.
    pub fn line_is_sos(&self, line: &SosLine) -> bool {
        let (mr, mc) = line.middle();
        self.board.get(line.r1, line.c1) == Some(Letter::S)
            && self.board.get(mr, mc) == Some(Letter::O)
            && self.board.get(line.r2, line.c2) == Some(Letter::S)
    }
}
