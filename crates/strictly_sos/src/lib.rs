//! Strictly SOS - rules engine for the SOS letter game.
//!
//! Two players take turns writing S or O into a square grid. Completing
//! S-O-S in a row, column or diagonal either wins outright (simple mode)
//! or scores a point (general mode).
//!
//! # Architecture
//!
//! - **Board**: cells with letters and owners
//! - **Rules**: SOS line detection and result derivation
//! - **Table**: board plus turn state shared by both variants
//! - **Variants**: [`SimpleGame`], [`GeneralGame`] and the [`SosGame`] union
//! - **Players**: move sources for humans and the random computer
//!
//! # Example
//!
//! ```
//! use strictly_sos::{Player, SosGame, SosVariant, Variant};
//!
//! let mut game = SosGame::new(3, Variant::Simple);
//! assert!(game.make_move(0, 0, "S"));
//! assert_eq!(game.current_turn(), Player::Red);
//! assert!(!game.make_move(0, 0, "O"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod general;
mod simple;
mod table;
mod types;
mod variant;

pub mod invariants;
pub mod players;
pub mod rules;

// Crate-level exports - Domain types
pub use types::{Board, Cell, Letter, Player, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

// Crate-level exports - Moves
pub use action::{Move, MoveError, MoveReport};

// Crate-level exports - Contracts
pub use contracts::{CellIsEmpty, Contract, GameNotOver, LegalMove, MoveContract};

// Crate-level exports - Variants
pub use game::SosGame;
pub use general::GeneralGame;
pub use simple::SimpleGame;
pub use table::Table;
pub use variant::{SosVariant, Variant};

// Crate-level exports - Rules and players
pub use players::{ComputerPlayer, HumanPlayer, MoveSource, PlayerKind};
pub use rules::{Outcome, Scores, SosLine};
