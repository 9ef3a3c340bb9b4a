//! Core domain types for SOS.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Smallest board edge accepted; smaller requests are clamped up to this.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest board edge accepted; larger requests are clamped down to this.
pub const MAX_BOARD_SIZE: usize = 64;

/// Player in the game.
///
/// The same two-valued enum is used for the side to move and for
/// cell ownership.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Player {
    /// Blue player (moves first).
    Blue,
    /// Red player.
    Red,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Blue => Player::Red,
            Player::Red => Player::Blue,
        }
    }
}

/// A letter that can be written into a cell.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Letter {
    /// The letter S (ends of an SOS line).
    S,
    /// The letter O (middle of an SOS line).
    O,
}

impl Letter {
    /// Parses player input into a letter.
    ///
    /// Surrounding whitespace is ignored and lowercase is accepted, so
    /// `" s "` parses as [`Letter::S`].
    pub fn parse(input: &str) -> Result<Self, MoveError> {
        match input.trim().to_uppercase().as_str() {
            "S" => Ok(Letter::S),
            "O" => Ok(Letter::O),
            _ => Err(MoveError::InvalidLetter(input.to_string())),
        }
    }
}

impl std::str::FromStr for Letter {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Letter::parse(s)
    }
}

/// A cell on the SOS board.
///
/// Letter and owner are written together, so a filled cell always has an
/// owner and an empty one never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Nothing placed yet.
    #[default]
    Empty,
    /// A letter placed by a player.
    Filled {
        /// The letter in the cell.
        letter: Letter,
        /// The player who placed it.
        owner: Player,
    },
}

impl Cell {
    /// Returns the letter, if any.
    pub fn letter(self) -> Option<Letter> {
        match self {
            Cell::Empty => None,
            Cell::Filled { letter, .. } => Some(letter),
        }
    }

    /// Returns the owner, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Filled { owner, .. } => Some(owner),
        }
    }
}

/// Square SOS board with per-cell ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Edge length.
    pub(crate) size: usize,
    /// Cells in row-major order.
    pub(crate) cells: Vec<Cell>,
    /// Accepted placements so far.
    pub(crate) move_count: usize,
}

impl Board {
    /// Creates an empty `size` x `size` board, with the edge clamped to
    /// [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`].
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = size.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
            move_count: 0,
        }
    }

    /// Returns the edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns how many letters have been placed.
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Checks whether a coordinate lies on the board.
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        self.in_bounds(row, col).then(|| row * self.size + col)
    }

    /// Returns the cell at a coordinate; out of bounds reads as empty.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.index(row, col)
            .map(|i| self.cells[i])
            .unwrap_or(Cell::Empty)
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.in_bounds(row, col) && self.cell(row, col) == Cell::Empty
    }

    /// Returns the letter at a coordinate.
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        self.cell(row, col).letter()
    }

    /// Returns the player who filled a coordinate.
    pub fn owner(&self, row: usize, col: usize) -> Option<Player> {
        self.cell(row, col).owner()
    }

    /// Writes a letter for `owner`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::InvalidMove`] if the coordinate is off the board
    /// or already filled. The board is left untouched in that case.
    #[instrument(skip(self))]
    pub fn place(
        &mut self,
        row: usize,
        col: usize,
        letter: Letter,
        owner: Player,
    ) -> Result<(), MoveError> {
        let idx = self
            .index(row, col)
            .filter(|&i| self.cells[i] == Cell::Empty)
            .ok_or(MoveError::InvalidMove { row, col })?;
        self.cells[idx] = Cell::Filled { letter, owner };
        self.move_count += 1;
        Ok(())
    }

    /// Checks if every cell has been filled.
    pub fn is_full(&self) -> bool {
        self.move_count >= self.size * self.size
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterates over empty coordinates in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| (i / self.size, i % self.size))
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            let line = (0..self.size)
                .map(|col| match self.get(row, col) {
                    Some(letter) => letter.to_string(),
                    None => ".".to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_sizes_are_clamped() {
        assert_eq!(Board::new(0).size(), 3);
        assert_eq!(Board::new(2).size(), 3);
        assert_eq!(Board::new(7).size(), 7);
    }

    #[test]
    fn test_huge_sizes_are_clamped() {
        assert_eq!(Board::new(MAX_BOARD_SIZE).size(), MAX_BOARD_SIZE);
        assert_eq!(Board::new(MAX_BOARD_SIZE + 1).size(), MAX_BOARD_SIZE);
        let board = Board::new(usize::MAX / 2);
        assert_eq!(board.size(), MAX_BOARD_SIZE);
        assert_eq!(board.cells().len(), MAX_BOARD_SIZE * MAX_BOARD_SIZE);
        assert_eq!(Board::new(usize::MAX).size(), MAX_BOARD_SIZE);
    }

    #[test]
    fn test_out_of_bounds_reads_are_empty() {
        let board = Board::new(3);
        assert!(!board.in_bounds(3, 0));
        assert!(!board.is_empty(0, 3));
        assert_eq!(board.get(usize::MAX, 0), None);
        assert_eq!(board.owner(5, 5), None);
        assert_eq!(board.cell(9, 9), Cell::Empty);
    }

    #[test]
    fn test_place_sets_letter_and_owner() {
        let mut board = Board::new(3);
        board.place(1, 2, Letter::O, Player::Red).unwrap();
        assert_eq!(board.get(1, 2), Some(Letter::O));
        assert_eq!(board.owner(1, 2), Some(Player::Red));
        assert_eq!(board.move_count(), 1);
        assert!(!board.is_empty(1, 2));
    }

    #[test]
    fn test_place_rejects_filled_and_out_of_bounds() {
        let mut board = Board::new(3);
        board.place(0, 0, Letter::S, Player::Blue).unwrap();
        let before = board.clone();

        assert_eq!(
            board.place(0, 0, Letter::O, Player::Red),
            Err(MoveError::InvalidMove { row: 0, col: 0 })
        );
        assert_eq!(
            board.place(3, 1, Letter::S, Player::Red),
            Err(MoveError::InvalidMove { row: 3, col: 1 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3);
        for (row, col) in board.empty_cells().collect::<Vec<_>>() {
            assert!(!board.is_full());
            board.place(row, col, Letter::O, Player::Blue).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut board = Board::new(3);
        board.place(0, 1, Letter::S, Player::Blue).unwrap();
        let empty: Vec<_> = board.empty_cells().take(3).collect();
        assert_eq!(empty, vec![(0, 0), (0, 2), (1, 0)]);
    }

    #[test]
    fn test_letter_parse_normalizes() {
        assert_eq!(Letter::parse(" s "), Ok(Letter::S));
        assert_eq!(Letter::parse("O"), Ok(Letter::O));
        assert_eq!("o\n".parse::<Letter>(), Ok(Letter::O));
        assert_eq!(
            Letter::parse("x"),
            Err(MoveError::InvalidLetter("x".to_string()))
        );
        assert!(Letter::parse("").is_err());
        assert!(Letter::parse("SO").is_err());
    }

    #[test]
    fn test_player_names() {
        assert_eq!(Player::Blue.to_string(), "blue");
        assert_eq!("RED".parse::<Player>().unwrap(), Player::Red);
        assert_eq!(Player::Blue.opponent(), Player::Red);
        assert_eq!(Player::Red.opponent(), Player::Blue);
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new(3);
        board.place(0, 0, Letter::S, Player::Blue).unwrap();
        board.place(2, 2, Letter::O, Player::Red).unwrap();
        assert_eq!(board.to_string(), "S . .\n. . .\n. . O\n");
    }
}
