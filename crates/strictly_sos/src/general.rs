//! General mode: play until the board is full, one point per SOS.

use super::action::{Move, MoveError, MoveReport};
use super::invariants::{GeneralInvariants, InvariantSet};
use super::rules::{Outcome, Scores, SosLine};
use super::table::Table;
use super::variant::SosVariant;
use super::Player;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// A general-mode game.
///
/// Every accepted move passes the turn, scoring or not. The game ends on
/// the move that fills the last cell. The winner is not stored; compare
/// the [`scores`](Self::scores) or use [`outcome`](SosVariant::outcome).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralGame {
    pub(crate) table: Table,
    pub(crate) scores: Scores,
    pub(crate) scored: Vec<(Player, SosLine)>,
}

impl GeneralGame {
    /// Creates a new general game on a `size` x `size` board.
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            table: Table::new(size),
            scores: Scores::default(),
            scored: Vec::new(),
        }
    }

    /// Returns the current scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Every line scored so far, in order, with the player it was credited to.
    pub fn scored_lines(&self) -> &[(Player, SosLine)] {
        &self.scored
    }
}

impl SosVariant for GeneralGame {
    fn table(&self) -> &Table {
        &self.table
    }

    #[instrument(skip(self))]
    fn apply(&mut self, mv: Move) -> Result<MoveReport, MoveError> {
        let (player, lines) = self.table.place(mv)?;
        self.scores.add(player, lines.len() as u32);
        self.scored.extend(lines.iter().map(|line| (player, *line)));
        self.table.toggle_turn();

        if self.table.board().is_full() {
            self.table.finish();
            info!(scores = %self.scores, "Board full, game over");
        }

        if cfg!(debug_assertions) {
            let post = GeneralInvariants::check_all(self);
            if let Err(violations) = &post {
                warn!(scores = %self.scores, ?violations, "General game invariants violated");
            }
            debug_assert!(post.is_ok(), "Scores out of step with completed lines");
        }

        Ok(MoveReport {
            player,
            placed: mv,
            lines,
            game_over: self.table.is_over(),
        })
    }

    fn outcome(&self) -> Option<Outcome> {
        self.table.is_over().then(|| self.scores.outcome())
    }

    fn reset(&mut self) {
        *self = Self::new(self.table.board().size());
    }
}
