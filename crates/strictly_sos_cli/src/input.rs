//! Parsing of typed commands.

use derive_more::{Display, Error};
use strictly_sos::Letter;

/// One line of player input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a letter. Without a letter the player's chosen letter is used.
    Place {
        /// Row index.
        row: usize,
        /// Column index.
        col: usize,
        /// Raw letter as typed; validated by the game.
        letter: Option<String>,
    },
    /// Change the letter used when none is typed.
    Letter(Letter),
    /// Start a new game with the same settings.
    New,
    /// Show the board again.
    Board,
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct InputError {
    /// What was wrong.
    pub message: String,
}

impl InputError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Help text shown for `help`.
pub const HELP: &str = "\
Commands:
  <row> <col> [S|O]   place a letter (rows and columns start at 0)
  letter <S|O>        set your default letter
  board               show the board
  new                 start a new game
  help                show this help
  quit                leave";

fn coordinate(token: &str, axis: &str) -> Result<usize, InputError> {
    token
        .parse()
        .map_err(|_| InputError::new(format!("{} must be a number, got {:?}", axis, token)))
}

/// Parses one line. Tokens may be separated by spaces or commas.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let tokens: Vec<&str> = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Err(InputError::new("Type a move like `1 2 S`, or `help`")),
        [cmd] if cmd.eq_ignore_ascii_case("quit") || cmd.eq_ignore_ascii_case("q") => {
            Ok(Command::Quit)
        }
        [cmd] if cmd.eq_ignore_ascii_case("new") || cmd.eq_ignore_ascii_case("n") => {
            Ok(Command::New)
        }
        [cmd] if cmd.eq_ignore_ascii_case("help") || *cmd == "?" => Ok(Command::Help),
        [cmd] if cmd.eq_ignore_ascii_case("board") || cmd.eq_ignore_ascii_case("b") => {
            Ok(Command::Board)
        }
        [cmd, letter] if cmd.eq_ignore_ascii_case("letter") => Letter::parse(letter)
            .map(Command::Letter)
            .map_err(|e| InputError::new(e.to_string())),
        [row, col] => Ok(Command::Place {
            row: coordinate(row, "Row")?,
            col: coordinate(col, "Column")?,
            letter: None,
        }),
        [row, col, letter] => Ok(Command::Place {
            row: coordinate(row, "Row")?,
            col: coordinate(col, "Column")?,
            letter: Some((*letter).to_string()),
        }),
        _ => Err(InputError::new(format!("Unrecognized command: {}", line.trim()))),
    }
}
