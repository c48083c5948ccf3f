//! A game between a human and the search engine.
//!
//! The session owns the authoritative [`Game`]. The search engine only ever sees copies
//! of its board.

use crate::connectors::{InputSource, Renderer};
use crate::search::Searcher;
use derive_more::{Display, Error};
use flank_othello::{Game, Location, Outcome, Player, Turn};
use std::io;
use tracing::{info, warn};

/// Why a session stopped before the game was over.
#[derive(Debug, Display, Error)]
pub enum SessionError {
    #[display(fmt = "I/O error: {}", _0)]
    Io(io::Error),
    #[display(fmt = "input closed before the game finished")]
    InputClosed,
}

impl From<io::Error> for SessionError {
    fn from(err: io::Error) -> Self {
        SessionError::Io(err)
    }
}

pub struct Session<I, R> {
    game: Game,
    human: Player,
    searcher: Searcher,
    input: I,
    renderer: R,
}

impl<I: InputSource, R: Renderer> Session<I, R> {
    /// A session from the starting position. The computer plays the side `human` does not.
    pub fn new(human: Player, searcher: Searcher, input: I, renderer: R) -> Self {
        Self {
            game: Game::default(),
            human,
            searcher,
            input,
            renderer,
        }
    }

    /// Start from `game` instead of the starting position.
    pub fn with_game(self, game: Game) -> Self {
        Self { game, ..self }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Play until neither side can move, then announce and return the result.
    pub fn run(&mut self) -> Result<Outcome, SessionError> {
        self.renderer.render(&self.game.board)?;

        loop {
            let player = match self.game.advance() {
                Turn::Play(player) => player,
                Turn::Pass { skipped, next } => {
                    info!(%skipped, "no legal moves, passing");
                    self.renderer.announce(&format!(
                        "There are no legal moves available for player {}. Player {}, it is now your turn.",
                        skipped, next
                    ))?;
                    next
                }
                Turn::Finished(outcome) => {
                    info!(?outcome, score = self.game.board.material_score(), "game over");
                    self.renderer
                        .announce("There are no more legal moves available.")?;
                    self.renderer.announce(&outcome.to_string())?;
                    return Ok(outcome);
                }
            };

            let prompt = format!("Player {}, enter coordinates: ", player);
            self.game = if player == self.human {
                self.human_turn(&prompt)?
            } else {
                self.computer_turn(&prompt)?
            };

            self.renderer.render(&self.game.board)?;
        }
    }

    /// Ask for moves until the human enters a legal one.
    fn human_turn(&mut self, prompt: &str) -> Result<Game, SessionError> {
        loop {
            let text = self
                .input
                .read_coordinate(prompt)?
                .ok_or(SessionError::InputClosed)?;

            let loc: Location = match text.parse() {
                Ok(loc) => loc,
                Err(err) => {
                    self.renderer.announce(&err.to_string())?;
                    continue;
                }
            };

            match self.game.apply_move(loc) {
                Ok(next) => {
                    info!(player = %self.human, %loc, "human move");
                    return Ok(next);
                }
                Err(err) => self.renderer.announce(&err.to_string())?,
            }
        }
    }

    fn computer_turn(&mut self, prompt: &str) -> Result<Game, SessionError> {
        let player = self.game.active_player;
        let decision = match self.searcher.choose_move(&self.game.board, player) {
            Some(decision) => decision,
            None => {
                // `advance` only hands us the turn when a move exists.
                warn!(%player, "search found no move, passing");
                return Ok(self.game.pass());
            }
        };

        self.renderer
            .announce(&format!("{}{}", prompt, decision.best_move))?;
        info!(%player, mv = %decision.best_move, score = decision.score, "computer move");

        match self.game.apply_move(decision.best_move) {
            Ok(next) => Ok(next),
            Err(err) => {
                warn!(%player, mv = %decision.best_move, %err, "search chose an illegal move");
                Ok(self.game.pass())
            }
        }
    }
}
