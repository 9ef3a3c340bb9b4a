//! Score invariant for general games.

use super::super::general::GeneralGame;
use super::super::Player;
use super::Invariant;

/// Invariant: each player's score equals the lines credited to them.
///
/// Counts are re-derived per player from the log of scored lines.
pub struct ScoresMatchLinesInvariant;

impl Invariant<GeneralGame> for ScoresMatchLinesInvariant {
    fn holds(game: &GeneralGame) -> bool {
        [Player::Blue, Player::Red].into_iter().all(|player| {
            let credited = game
                .scored_lines()
                .iter()
                .filter(|(owner, _)| *owner == player)
                .count();
            game.scores().get(player) as usize == credited
        })
    }

    fn description() -> &'static str {
        "Each player's score equals the SOS lines credited to them"
    }
}
