//! Scores and result derivation.

use super::super::Player;
use serde::{Deserialize, Serialize};

/// Points per player in a general game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// Points scored by blue.
    pub blue: u32,
    /// Points scored by red.
    pub red: u32,
}

impl Scores {
    /// Returns the points of one player.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Blue => self.blue,
            Player::Red => self.red,
        }
    }

    /// Adds points to one player.
    pub fn add(&mut self, player: Player, points: u32) {
        match player {
            Player::Blue => self.blue += points,
            Player::Red => self.red += points,
        }
    }

    /// Sum of both players' points.
    pub fn total(&self) -> u32 {
        self.blue + self.red
    }

    /// Compares the two scores: the higher one wins, a tie is a draw.
    pub fn outcome(&self) -> Outcome {
        match self.blue.cmp(&self.red) {
            std::cmp::Ordering::Greater => Outcome::Winner(Player::Blue),
            std::cmp::Ordering::Less => Outcome::Winner(Player::Red),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Blue: {} | Red: {}", self.blue, self.red)
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Player won the game.
    Winner(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "{} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
