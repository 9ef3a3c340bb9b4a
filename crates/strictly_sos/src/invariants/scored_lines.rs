//! Scored-lines invariant: every credited line is on the board.

use super::super::general::GeneralGame;
use super::super::variant::SosVariant;
use super::Invariant;

/// Invariant: every scored line is an S-O-S on the board, and its anchoring
/// S belongs to the player the point went to.
pub struct ScoredLinesOnBoardInvariant;

impl Invariant<GeneralGame> for ScoredLinesOnBoardInvariant {
    fn holds(game: &GeneralGame) -> bool {
        let table = game.table();
        game.scored_lines().iter().all(|(player, line)| {
            table.line_is_sos(line) && table.board().owner(line.r1, line.c1) == Some(*player)
        })
    }

    fn description() -> &'static str {
        "Scored lines are SOS lines anchored on the scorer's S"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SosLine;
    use crate::Player;

    fn scored_game() -> GeneralGame {
        let mut game = GeneralGame::new(3);
        for (row, col, letter) in [(0, 0, "S"), (1, 0, "S"), (0, 1, "O"), (1, 1, "O"), (0, 2, "S")] {
            assert!(game.make_move(row, col, letter));
        }
        game
    }

    #[test]
    fn test_holds_for_played_game() {
        assert!(ScoredLinesOnBoardInvariant::holds(&GeneralGame::new(4)));
        assert!(ScoredLinesOnBoardInvariant::holds(&scored_game()));
    }

    #[test]
    fn test_line_credited_to_non_owner_violates() {
        let mut game = scored_game();
        game.scored[0].0 = Player::Red;
        assert!(!ScoredLinesOnBoardInvariant::holds(&game));
    }

    #[test]
    fn test_line_not_on_board_violates() {
        let mut game = scored_game();
        game.scored.push((Player::Blue, SosLine { r1: 0, c1: 0, r2: 2, c2: 0 }));
        assert!(!ScoredLinesOnBoardInvariant::holds(&game));
    }
}
