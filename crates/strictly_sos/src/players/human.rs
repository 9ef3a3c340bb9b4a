//! Human player: moves arrive from outside.

use super::MoveSource;
use crate::{Board, Move, Player};

/// A human seated at the board.
///
/// Never proposes anything; the front end reads the move from its own
/// input and applies it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HumanPlayer {
    name: String,
    color: Player,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, color: Player) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl MoveSource for HumanPlayer {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Player {
        self.color
    }

    fn choose_move(&mut self, _board: &Board) -> Option<Move> {
        None
    }

    fn is_automatic(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_never_proposes() {
        let mut human = HumanPlayer::new("Blue", Player::Blue);
        assert_eq!(human.choose_move(&Board::new(3)), None);
    }
}
