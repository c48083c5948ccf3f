//! Implements game-level Othello logic: whose turn it is, passing, and the final result.
//!
//! [`Board`] only knows about tiles; [`Game`] tracks the active player on top of it.

use crate::board::{Board, MoveError};
use crate::location::{Location, MoveList};
use derive_more::{Display, Error};
use std::fmt;

/// One of the two players in a game.
#[derive(Clone, Copy, Debug, Display, Hash, PartialEq, Eq)]
pub enum Player {
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "white")]
    White,
}

impl Player {
    /// The value of this player's tiles: -1 for black, +1 for white.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Player::Black => -1,
            Player::White => 1,
        }
    }
}

impl Default for Player {
    /// Gets the starting player (black).
    fn default() -> Self {
        Self::Black
    }
}

impl std::ops::Not for Player {
    type Output = Self;

    /// Gets the other player.
    fn not(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Display, Error, PartialEq, Eq)]
#[display(fmt = "expected a player color (black or white)")]
pub struct ParsePlayerError;

impl std::str::FromStr for Player {
    type Err = ParsePlayerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" | "b" | "x" => Ok(Player::Black),
            "white" | "w" | "o" => Ok(Player::White),
            _ => Err(ParsePlayerError),
        }
    }
}

/// The result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

impl Outcome {
    /// Decide the result from a material score (positive favors white).
    pub fn from_score(score: i8) -> Self {
        match score.signum() {
            1 => Outcome::Winner(Player::White),
            -1 => Outcome::Winner(Player::Black),
            _ => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} is the winner!", player),
            Outcome::Draw => f.write_str("It's a tie!"),
        }
    }
}

/// What happens next in a game, as reported by [`Game::advance`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    /// This player has a legal move and should play it.
    Play(Player),
    /// `skipped` had no legal move, so the turn passed to `next`, who does.
    Pass { skipped: Player, next: Player },
    /// Neither player can move.
    Finished(Outcome),
}

/// The complete state of an Othello game.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Game {
    pub board: Board,
    pub active_player: Player,
}

impl Default for Game {
    /// Gets the starting position with black to move.
    fn default() -> Self {
        Self::new(Board::new(), Player::default())
    }
}

impl Game {
    pub const fn new(board: Board, active_player: Player) -> Self {
        Self {
            board,
            active_player,
        }
    }

    /// Get the legal moves for the active player.
    #[inline]
    pub fn get_moves(&self) -> MoveList {
        self.board.legal_moves(self.active_player)
    }

    /// Place a tile for the active player and hand the turn to the opponent.
    pub fn apply_move(self, loc: Location) -> Result<Self, MoveError> {
        Ok(Self {
            board: self.board.play(loc, self.active_player)?,
            active_player: !self.active_player,
        })
    }

    /// Hand the turn to the opponent without moving.
    #[inline]
    pub fn pass(self) -> Self {
        Self {
            board: self.board,
            active_player: !self.active_player,
        }
    }

    /// Resolve whose turn it is. If the active player is stuck but the opponent is not,
    /// the turn passes once; if both are stuck the game is over.
    pub fn advance(&mut self) -> Turn {
        if self.board.has_any_legal_move(self.active_player) {
            return Turn::Play(self.active_player);
        }

        let skipped = self.active_player;
        if self.board.has_any_legal_move(!skipped) {
            *self = self.pass();
            return Turn::Pass {
                skipped,
                next: self.active_player,
            };
        }

        Turn::Finished(Outcome::from_score(self.board.material_score()))
    }

    /// Returns true if neither player can move.
    pub fn is_finished(&self) -> bool {
        !self.board.has_any_legal_move(self.active_player)
            && !self.board.has_any_legal_move(!self.active_player)
    }

    /// The result of the game, if it is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_finished() {
            Some(Outcome::from_score(self.board.material_score()))
        } else {
            None
        }
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "Player {} to move.", self.active_player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn players_alternate() {
        let game = Game::default();
        assert_eq!(game.active_player, Player::Black);

        let next = game.apply_move(Location::from_str("D3").unwrap()).unwrap();
        assert_eq!(next.active_player, Player::White);
        assert_eq!(next.pass().active_player, Player::Black);
    }

    #[test]
    fn illegal_move_keeps_turn() {
        let game = Game::default();
        assert_eq!(
            game.apply_move(Location::from_str("A1").unwrap()),
            Err(MoveError::NoFlips)
        );
    }

    #[test]
    fn advance_plays_when_moves_exist() {
        let mut game = Game::default();
        assert_eq!(game.advance(), Turn::Play(Player::Black));
        assert_eq!(game, Game::default());
    }

    #[test]
    fn advance_passes_stuck_player() {
        // White cannot move, black can take C1.
        let board = Board::from_str(&format!("XO{}", ".".repeat(62))).unwrap();
        let mut game = Game::new(board, Player::White);

        assert_eq!(
            game.advance(),
            Turn::Pass {
                skipped: Player::White,
                next: Player::Black,
            }
        );
        assert_eq!(game.active_player, Player::Black);
        assert!(!game.is_finished());
        assert_eq!(game.outcome(), None);
    }

    #[test]
    fn advance_finishes_when_both_stuck() {
        let board = Board::from_str(&format!("XX{}", ".".repeat(62))).unwrap();
        let mut game = Game::new(board, Player::Black);

        assert_eq!(
            game.advance(),
            Turn::Finished(Outcome::Winner(Player::Black))
        );
        assert_eq!(game.outcome(), Some(Outcome::Winner(Player::Black)));
    }

    #[test]
    fn tie_on_zero_score() {
        let board = Board::from_str(&"XO".repeat(32)).unwrap();
        let mut game = Game::new(board, Player::White);
        assert_eq!(game.advance(), Turn::Finished(Outcome::Draw));
        assert_eq!(Outcome::Draw.to_string(), "It's a tie!");
    }

    #[test]
    fn outcome_from_score() {
        assert_eq!(Outcome::from_score(0), Outcome::Draw);
        assert_eq!(Outcome::from_score(5), Outcome::Winner(Player::White));
        assert_eq!(Outcome::from_score(-64), Outcome::Winner(Player::Black));
        assert_eq!(
            Outcome::Winner(Player::White).to_string(),
            "Player white is the winner!"
        );
    }

    #[test]
    fn parse_player() {
        assert_eq!(Player::from_str("Black"), Ok(Player::Black));
        assert_eq!(Player::from_str("w"), Ok(Player::White));
        assert_eq!(Player::from_str("red"), Err(ParsePlayerError));
    }
}
