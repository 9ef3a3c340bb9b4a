//! SOS line detection.

use super::super::{Board, Letter};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Axis directions scanned from a placed cell: horizontal, vertical,
/// down-right diagonal, down-left diagonal. Each is also walked backwards.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A completed S-O-S, recorded by its two S endpoints.
///
/// The O sits halfway between them and is not stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SosLine {
    /// Row of the anchoring S (the cell just played).
    pub r1: usize,
    /// Column of the anchoring S.
    pub c1: usize,
    /// Row of the far S.
    pub r2: usize,
    /// Column of the far S.
    pub c2: usize,
}

impl SosLine {
    /// Returns the coordinate of the O between the endpoints.
    pub fn middle(&self) -> (usize, usize) {
        ((self.r1 + self.r2) / 2, (self.c1 + self.c2) / 2)
    }

    /// Same segment with the endpoints in row-major order.
    ///
    /// Useful for comparing lines regardless of which S anchored them.
    pub fn normalized(&self) -> SosLine {
        if (self.r1, self.c1) <= (self.r2, self.c2) {
            *self
        } else {
            SosLine {
                r1: self.r2,
                c1: self.c2,
                r2: self.r1,
                c2: self.c1,
            }
        }
    }
}

impl std::fmt::Display for SosLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}) -> ({}, {})", self.r1, self.c1, self.r2, self.c2)
    }
}

fn step(board: &Board, row: usize, col: usize, dr: isize, dc: isize) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    board.in_bounds(r, c).then_some((r, c))
}

/// Returns the far endpoint if `(row, col)` is an S followed by O then S
/// when walking `(dr, dc)`. All three cells must be on the board.
pub fn forms_sos(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
) -> Option<(usize, usize)> {
    if board.get(row, col) != Some(Letter::S) {
        return None;
    }
    let (mr, mc) = step(board, row, col, dr, dc)?;
    let (er, ec) = step(board, mr, mc, dr, dc)?;
    (board.get(mr, mc) == Some(Letter::O) && board.get(er, ec) == Some(Letter::S))
        .then_some((er, ec))
}

/// Finds every SOS anchored on the S at `(row, col)`.
///
/// Only an S at the given cell can anchor a line: if the cell holds an O
/// (or is empty) the result is empty, even when that O sits between two
/// existing S's. Lines come out in [`DIRECTIONS`] order, forward before
/// backward within each direction.
#[instrument(skip(board))]
pub fn detect_lines(board: &Board, row: usize, col: usize) -> Vec<SosLine> {
    let mut lines = Vec::new();
    for (dr, dc) in DIRECTIONS {
        for (sr, sc) in [(dr, dc), (-dr, -dc)] {
            if let Some((r2, c2)) = forms_sos(board, row, col, sr, sc) {
                lines.push(SosLine {
                    r1: row,
                    c1: col,
                    r2,
                    c2,
                });
            }
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    fn board_from(rows: &[&str]) -> Board {
        let mut board = Board::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let letter = match ch {
                    'S' => Letter::S,
                    'O' => Letter::O,
                    _ => continue,
                };
                board.place(r, c, letter, Player::Blue).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_horizontal_forward() {
        let board = board_from(&["SOS", "...", "..."]);
        assert_eq!(
            detect_lines(&board, 0, 0),
            vec![SosLine { r1: 0, c1: 0, r2: 0, c2: 2 }]
        );
    }

    #[test]
    fn test_horizontal_backward() {
        let board = board_from(&["SOS", "...", "..."]);
        assert_eq!(
            detect_lines(&board, 0, 2),
            vec![SosLine { r1: 0, c1: 2, r2: 0, c2: 0 }]
        );
    }

    #[test]
    fn test_vertical_and_diagonals() {
        let board = board_from(&["S.S", "OO.", "S.S"]);
        let lines = detect_lines(&board, 0, 0);
        assert_eq!(
            lines,
            vec![
                SosLine { r1: 0, c1: 0, r2: 2, c2: 0 },
                SosLine { r1: 0, c1: 0, r2: 2, c2: 2 },
            ]
        );

        // Down-left diagonal walked backwards from the bottom-left S.
        let lines = detect_lines(&board, 2, 0);
        assert!(lines.contains(&SosLine { r1: 2, c1: 0, r2: 0, c2: 2 }));
    }

    #[test]
    fn test_placed_o_never_anchors() {
        let board = board_from(&["SOS", "...", "..."]);
        assert!(detect_lines(&board, 0, 1).is_empty());
    }

    #[test]
    fn test_empty_cell_finds_nothing() {
        let board = board_from(&["S.S", "...", "..."]);
        assert!(detect_lines(&board, 1, 1).is_empty());
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let board = board_from(&["..S", "OS.", "..."]);
        assert!(detect_lines(&board, 0, 2).is_empty());
    }

    #[test]
    fn test_multiple_lines_in_direction_order() {
        // Centre S on a 5x5 board completes five lines at once.
        let board = board_from(&[
            "S.S.S",
            ".OOO.",
            "SOSOS",
            ".....",
            ".....",
        ]);
        let lines = detect_lines(&board, 2, 2);
        assert_eq!(
            lines,
            vec![
                SosLine { r1: 2, c1: 2, r2: 2, c2: 4 },
                SosLine { r1: 2, c1: 2, r2: 2, c2: 0 },
                SosLine { r1: 2, c1: 2, r2: 0, c2: 2 },
                SosLine { r1: 2, c1: 2, r2: 0, c2: 0 },
                SosLine { r1: 2, c1: 2, r2: 0, c2: 4 },
            ]
        );
    }

    #[test]
    fn test_middle() {
        let line = SosLine { r1: 2, c1: 2, r2: 0, c2: 4 };
        assert_eq!(line.middle(), (1, 3));
    }

    #[test]
    fn test_normalized() {
        let backward = SosLine { r1: 0, c1: 2, r2: 0, c2: 0 };
        assert_eq!(backward.normalized(), SosLine { r1: 0, c1: 0, r2: 0, c2: 2 });
        let diagonal = SosLine { r1: 2, c1: 0, r2: 0, c2: 2 };
        assert_eq!(diagonal.normalized(), SosLine { r1: 0, c1: 2, r2: 2, c2: 0 });
        assert_eq!(diagonal.normalized().normalized(), diagonal.normalized());
    }
}
