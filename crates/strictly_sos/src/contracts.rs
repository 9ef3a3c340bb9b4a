//! Contract-based validation for SOS moves.
//!
//! Preconditions decide whether a move may be applied at all. The
//! postcondition re-checks the table invariants after a placement.

use super::action::{Move, MoveError};
use super::invariants::{InvariantSet, InvariantViolation, TableInvariants};
use super::table::Table;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks the state after the action was applied.
    fn post(after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is over.
    #[instrument(skip(table))]
    pub fn check(table: &Table) -> Result<(), MoveError> {
        if table.is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is on the board and empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto filled or off-board cells.
    #[instrument(skip(table))]
    pub fn check(mov: &Move, table: &Table) -> Result<(), MoveError> {
        if table.board().is_empty(mov.row, mov.col) {
            Ok(())
        } else {
            Err(MoveError::InvalidMove {
                row: mov.row,
                col: mov.col,
            })
        }
    }
}

/// Composite precondition: game still running and the cell is free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(table))]
    pub fn check(mov: &Move, table: &Table) -> Result<(), MoveError> {
        GameNotOver::check(table)?;
        CellIsEmpty::check(mov, table)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a letter.
///
/// Preconditions:
/// - Game not over
/// - Cell on the board and empty
///
/// Postconditions:
/// - Owners mirror cells
/// - Move count matches filled cells
/// - Last lines are real SOS lines anchored on the last mover's S
pub struct MoveContract;

impl Contract<Table, Move> for MoveContract {
    fn pre(table: &Table, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, table)
    }

    fn post(after: &Table) -> Result<(), Vec<InvariantViolation>> {
        TableInvariants::check_all(after)
    }
}
