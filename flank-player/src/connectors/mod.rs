//! Connectors let a game session talk to the outside world: a way to show the board
//! and a way to ask the human for moves.

mod connector;
mod terminal;

pub use connector::{InputSource, Renderer};
pub use terminal::{LineInput, TerminalRenderer};
