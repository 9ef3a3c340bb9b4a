//! Move count invariant: one accepted move per filled cell.

use super::super::table::Table;
use super::Invariant;
use tracing::warn;

/// Invariant: the move counter equals the number of filled cells.
///
/// Cells never revert to empty, so every accepted move adds exactly one
/// filled cell.
pub struct MoveCountInvariant;

impl Invariant<Table> for MoveCountInvariant {
    fn holds(table: &Table) -> bool {
        let filled = table.filled_cells();
        let move_count = table.board().move_count();
        let valid = filled == move_count;
        if !valid {
            warn!(filled, move_count, "Move count out of step with board");
        }
        valid
    }

    fn description() -> &'static str {
        "Move count equals filled cells"
    }
}
