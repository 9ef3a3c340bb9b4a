//! Interactive terminal loop.

use crate::input::{parse_command, Command, HELP};
use crate::render;
use crate::session::{GameEvent, Session};
use anyhow::{Context, Result};
use colored::Colorize;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, info, instrument};

fn show_board(session: &Session) {
    let game = session.game();
    println!();
    print!("{}", render::board(game.board(), game.last_sos_lines()));
    println!("{}", render::status(session));
}

fn show_event(session: &Session, event: &GameEvent) {
    println!("{}", render::event(session, event));
    if matches!(event, GameEvent::MoveMade { .. }) {
        show_board(session);
    }
}

/// Runs a session until the player quits or input ends.
///
/// Computer seats move on their own after the configured pause. Once the
/// game is over only `new`, `board`, `help` and `quit` are accepted.
#[instrument(skip(session))]
pub fn run(mut session: Session) -> Result<()> {
    let mut editor = DefaultEditor::new().context("Failed to open terminal input")?;
    let delay = session.config().computer_delay();
    let mut announced = false;

    println!("{}", "Strictly SOS".bold());
    println!("Type `help` for commands.");
    show_board(&session);

    loop {
        if session.is_finished() {
            if !announced {
                if let Some(banner) = render::game_over(&session) {
                    println!("\n{}", banner);
                }
                println!("Type `new` to play again or `quit` to leave.");
                announced = true;
            }
        } else if !session.awaiting_human() {
            std::thread::sleep(delay);
            if let Some(event) = session.play_computer_turn() {
                show_event(&session, &event);
            }
            continue;
        }

        let prompt = if session.is_finished() {
            "> ".to_string()
        } else {
            format!("{} > ", session.name_of(session.game().current_turn()))
        };
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                info!("Input closed");
                break;
            }
            Err(err) => return Err(err).context("Failed to read input"),
        };
        let _ = editor.add_history_entry(line.as_str());

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{}", err.to_string().yellow());
                continue;
            }
        };
        debug!(?command, "Command");

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", HELP),
            Command::Board => show_board(&session),
            Command::New => {
                session.restart();
                announced = false;
                show_board(&session);
            }
            _ if session.is_finished() => {
                println!("{}", "The game is over.".yellow());
            }
            Command::Letter(letter) => {
                session.choose_letter(letter);
                println!("{}", render::status(&session));
            }
            Command::Place { row, col, letter } => {
                let event = session.submit(row, col, letter.as_deref());
                show_event(&session, &event);
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}
