//! Owner grid invariant: a cell has an owner exactly when it has a letter.

use super::super::table::Table;
use super::Invariant;

/// Invariant: owners mirror cells.
///
/// For every coordinate, `owner(r, c)` is set if and only if `get(r, c)`
/// is set.
pub struct OwnersMirrorCellsInvariant;

impl Invariant<Table> for OwnersMirrorCellsInvariant {
    fn holds(table: &Table) -> bool {
        let board = table.board();
        (0..board.size()).all(|row| {
            (0..board.size())
                .all(|col| board.get(row, col).is_some() == board.owner(row, col).is_some())
        })
    }

    fn description() -> &'static str {
        "Cell owners mirror filled cells"
    }
}
