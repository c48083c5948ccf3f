//! `flank-othello` implements the rules of Othello on a plain 8x8 grid.
//!
//! This package implements two levels of abstraction:
//!
//!  - [`Board`] holds the tiles and answers rule questions: which moves are legal,
//!    which tiles a move flips, and what the material score is. Boards are small
//!    `Copy` values, so search code can branch by copying them.
//!  - [`Game`] adds the player to move and the passing rule, and reports when the
//!    game is finished and who won.

pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;

/// Largest absolute material score a board can have.
pub const MAX_SCORE: i8 = NUM_SPACES as i8;
