//! Computer player that picks uniformly at random.

use super::MoveSource;
use crate::{Board, Letter, Move, Player};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Random computer opponent.
///
/// Picks an empty cell uniformly, then S or O with equal odds.
#[derive(Debug, Clone)]
pub struct ComputerPlayer<R = StdRng> {
    name: String,
    color: Player,
    rng: R,
}

impl ComputerPlayer<StdRng> {
    /// Creates a computer player seeded from OS entropy.
    #[instrument(skip(name))]
    pub fn new(name: impl Into<String>, color: Player) -> Self {
        Self::with_rng(name, color, StdRng::from_entropy())
    }

    /// Creates a computer player with a fixed seed, for repeatable games.
    #[instrument(skip(name))]
    pub fn seeded(name: impl Into<String>, color: Player, seed: u64) -> Self {
        Self::with_rng(name, color, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ComputerPlayer<R> {
    /// Creates a computer player drawing from `rng`.
    pub fn with_rng(name: impl Into<String>, color: Player, rng: R) -> Self {
        Self {
            name: name.into(),
            color,
            rng,
        }
    }
}

impl<R: Rng> MoveSource for ComputerPlayer<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Player {
        self.color
    }

    fn choose_move(&mut self, board: &Board) -> Option<Move> {
        let empty: Vec<(usize, usize)> = board.empty_cells().collect();
        let &(row, col) = empty.choose(&mut self.rng)?;
        let letter = *[Letter::S, Letter::O].choose(&mut self.rng)?;
        debug!(ai = %self.name, row, col, %letter, "Computer chose move");
        Some(Move::new(row, col, letter))
    }

    fn is_automatic(&self) -> bool {
        true
    }
}
