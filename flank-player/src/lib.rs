//! `flank-player` is the computer opponent: a depth-limited minimax search, and a
//! [`Session`] that plays it against a human through [`connectors`].

pub mod connectors;
pub mod search;
pub mod session;

pub use search::{Decision, Pruning, SearchStats, Searcher, SEARCH_DEPTH};
pub use session::{Session, SessionError};
