//! Game rules for SOS.
//!
//! Pure functions over a [`Board`](crate::Board): line detection and
//! result derivation. Both game variants build on these.

pub mod lines;
pub mod outcome;

pub use lines::{detect_lines, forms_sos, SosLine, DIRECTIONS};
pub use outcome::{Outcome, Scores};
