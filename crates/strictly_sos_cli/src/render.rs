//! Terminal rendering of boards, status and events.

use crate::session::{GameEvent, Session};
use colored::{ColoredString, Colorize};
use std::collections::HashSet;
use strictly_sos::{Board, Player, SosLine, SosVariant};

/// Rules summary printed by the `rules` command.
pub const RULES: &str = "\
SOS is played on a square grid, 3x3 or larger.
Blue moves first. On your turn, write an S or an O into any empty cell.
Spelling S-O-S across, down or diagonally completes a line.

Simple mode:  the first player to complete an SOS wins.
              A full board with no SOS is a draw.
General mode: each SOS scores a point and the turn passes either way.
              When the board is full, the higher score wins.";

fn paint(text: &str, player: Player) -> ColoredString {
    match player {
        Player::Blue => text.bright_blue(),
        Player::Red => text.bright_red(),
    }
}

/// Cells covered by the given lines: both S endpoints plus the O.
fn covered(lines: &[SosLine]) -> HashSet<(usize, usize)> {
    lines
        .iter()
        .flat_map(|line| [(line.r1, line.c1), line.middle(), (line.r2, line.c2)])
        .collect()
}

/// Draws the board with row and column numbers.
///
/// Letters take their owner's color. Cells of lines completed by the last
/// move are highlighted.
pub fn board(board: &Board, highlight: &[SosLine]) -> String {
    let size = board.size();
    let marked = covered(highlight);
    let width = (size - 1).to_string().len();

    let header = (0..size)
        .map(|col| format!("{:>width$}", col, width = width))
        .collect::<Vec<_>>()
        .join(" ");
    let mut out = format!("{:width$}  {}\n", "", header.dimmed(), width = width);

    for row in 0..size {
        let cells = (0..size)
            .map(|col| {
                let text = match board.get(row, col) {
                    Some(letter) => format!("{:>width$}", letter, width = width),
                    None => format!("{:>width$}", ".", width = width),
                };
                let styled = match board.owner(row, col) {
                    Some(owner) => paint(&text, owner),
                    None => text.dimmed(),
                };
                if marked.contains(&(row, col)) {
                    styled.bold().underline().to_string()
                } else {
                    styled.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&format!(
            "{}  {}\n",
            format!("{:>width$}", row, width = width).dimmed(),
            cells
        ));
    }
    out
}

/// One-line status: whose turn, plus scores in general mode.
pub fn status(session: &Session) -> String {
    let game = session.game();
    let mut line = format!("Mode: {}", game.variant());
    if let Some(scores) = game.scores() {
        line.push_str(&format!(
            " | {}: {} | {}: {}",
            paint(session.name_of(Player::Blue), Player::Blue),
            scores.blue,
            paint(session.name_of(Player::Red), Player::Red),
            scores.red
        ));
    }
    if !session.is_finished() {
        let turn = game.current_turn();
        line.push_str(&format!(
            " | Turn: {} ({})",
            paint(session.name_of(turn), turn),
            session.chosen_letter(turn)
        ));
    }
    line
}

/// Describes an event for the player. Rejections come back as warnings.
pub fn event(session: &Session, event: &GameEvent) -> String {
    match event {
        GameEvent::MoveMade { name, report } => {
            let mover = paint(name, report.player);
            let mut text = format!("{} plays {}", mover, report.placed);
            for line in &report.lines {
                text.push_str(&format!("\n  SOS! {}", paint(&line.to_string(), report.player)));
            }
            if let Some(scores) = session.game().scores().filter(|_| report.scored()) {
                text.push_str(&format!("\n  {}", scores));
            }
            text
        }
        GameEvent::MoveRejected(err) => err.to_string().yellow().to_string(),
        GameEvent::NotYourTurn => "Wait for the computer to move".yellow().to_string(),
    }
}

/// Game-over banner, colored for the winner.
pub fn game_over(session: &Session) -> Option<String> {
    let message = session.game_over_message()?;
    let styled = match session.game().outcome().and_then(|o| o.winner()) {
        Some(player) => paint(&message, player).bold(),
        None => message.bold(),
    };
    Some(styled.to_string())
}
