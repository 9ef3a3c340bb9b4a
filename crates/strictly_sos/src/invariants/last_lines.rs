//! Last-lines invariant: reported lines are real and belong to the mover.

use super::super::table::Table;
use super::Invariant;

/// Invariant: every line from the last move is an S-O-S on the board whose
/// anchoring S was placed by the last mover.
pub struct LastLinesAnchoredInvariant;

impl Invariant<Table> for LastLinesAnchoredInvariant {
    fn holds(table: &Table) -> bool {
        table.last_lines().iter().all(|line| {
            table.line_is_sos(line) && table.board().owner(line.r1, line.c1) == table.last_mover()
        })
    }

    fn description() -> &'static str {
        "Last move's lines are SOS lines anchored on the mover's S"
    }
}
