//! A game in either variant, behind one type.

use super::action::{Move, MoveError, MoveReport};
use super::general::GeneralGame;
use super::rules::{Outcome, Scores, SosLine};
use super::simple::SimpleGame;
use super::table::Table;
use super::variant::{SosVariant, Variant};
use super::{Board, Letter, Player};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// An SOS game under either rule set.
///
/// This is what front ends hold: construct it with [`SosGame::new`], feed
/// it moves through [`SosVariant::make_move`] or [`SosVariant::try_move`],
/// and read everything else back through the query methods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SosGame {
    /// Simple mode.
    Simple(SimpleGame),
    /// General mode.
    General(GeneralGame),
}

impl SosGame {
    /// Starts a new game. Sizes below 3 are clamped up to 3 and sizes above
    /// [`MAX_BOARD_SIZE`](crate::MAX_BOARD_SIZE) down to it.
    #[instrument]
    pub fn new(board_size: usize, variant: Variant) -> Self {
        info!("Starting new game");
        match variant {
            Variant::Simple => SosGame::Simple(SimpleGame::new(board_size)),
            Variant::General => SosGame::General(GeneralGame::new(board_size)),
        }
    }

    fn inner(&self) -> &dyn SosVariant {
        match self {
            SosGame::Simple(game) => game,
            SosGame::General(game) => game,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn SosVariant {
        match self {
            SosGame::Simple(game) => game,
            SosGame::General(game) => game,
        }
    }

    /// Returns the rule set in play.
    pub fn variant(&self) -> Variant {
        match self {
            SosGame::Simple(_) => Variant::Simple,
            SosGame::General(_) => Variant::General,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.table().board()
    }

    /// Returns the edge length of the board.
    pub fn board_size(&self) -> usize {
        self.board().size()
    }

    /// Letter at a coordinate; `None` if empty or off the board.
    pub fn cell(&self, row: usize, col: usize) -> Option<Letter> {
        self.board().get(row, col)
    }

    /// Owner of a coordinate; `None` if empty or off the board.
    pub fn cell_owner(&self, row: usize, col: usize) -> Option<Player> {
        self.board().owner(row, col)
    }

    /// Player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.table().to_move()
    }

    /// Simple-mode winner. Always `None` in general mode.
    pub fn winner(&self) -> Option<Player> {
        match self {
            SosGame::Simple(game) => game.winner(),
            SosGame::General(_) => None,
        }
    }

    /// General-mode scores. Always `None` in simple mode.
    pub fn scores(&self) -> Option<Scores> {
        match self {
            SosGame::Simple(_) => None,
            SosGame::General(game) => Some(game.scores()),
        }
    }

    /// Lines completed by the most recent move.
    pub fn last_sos_lines(&self) -> &[SosLine] {
        self.table().last_lines()
    }

    /// Player who made the most recent move.
    pub fn last_move_player(&self) -> Option<Player> {
        self.table().last_mover()
    }

    /// Checks if every cell has been filled.
    pub fn is_board_full(&self) -> bool {
        self.board().is_full()
    }
}

impl SosVariant for SosGame {
    fn table(&self) -> &Table {
        self.inner().table()
    }

    fn apply(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        self.inner_mut().apply(mv)
    }

    fn outcome(&self) -> Option<Outcome> {
        self.inner().outcome()
    }

    fn reset(&mut self) {
        self.inner_mut().reset()
    }
}
