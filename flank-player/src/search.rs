//! Depth-limited minimax search used to pick the computer's move.
//!
//! Scores are material scores (# own tiles - # opponent tiles) seen from the side to move,
//! so every level maximizes and negates its children (negamax). Each recursive call gets its
//! own copy of the board; nothing is undone on the way back up.

use arrayvec::ArrayVec;
use flank_othello::{Board, Location, Player, MAX_SCORE, NUM_SPACES};
use tracing::{debug, trace};

/// Number of plies the computer looks ahead by default.
pub const SEARCH_DEPTH: u8 = 6;

/// A bound strictly outside every reachable score.
const INFINITY: i8 = MAX_SCORE + 1;

/// How much of the tree the search may skip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pruning {
    /// Alpha-beta window: skip siblings once a line is refuted.
    AlphaBeta,
    /// Visit every node. Slow, but useful as a reference.
    Exhaustive,
}

impl Default for Pruning {
    fn default() -> Self {
        Pruning::AlphaBeta
    }
}

/// Counters collected during one search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub leaves: u64,
    pub cutoffs: u64,
}

/// The move chosen by a search, with its projected score for the moving side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub best_move: Location,
    pub score: i8,
    pub stats: SearchStats,
}

/// Chooses moves by searching a fixed number of plies ahead.
#[derive(Clone, Copy, Debug)]
pub struct Searcher {
    depth: u8,
    pruning: Pruning,
}

impl Default for Searcher {
    fn default() -> Self {
        Self::new(SEARCH_DEPTH)
    }
}

impl Searcher {
    pub fn new(depth: u8) -> Self {
        assert!(depth > 0, "requires depth>0 to find a move");
        Self {
            depth,
            pruning: Pruning::default(),
        }
    }

    pub fn with_pruning(self, pruning: Pruning) -> Self {
        Self { pruning, ..self }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn pruning(&self) -> Pruning {
        self.pruning
    }

    /// Pick the move for `player` on `board`, or None if `player` has no legal move.
    ///
    /// Candidates are tried in row-major order and a later move must score strictly
    /// better to replace an earlier one, so ties go to the first location.
    pub fn choose_move(&self, board: &Board, player: Player) -> Option<Decision> {
        let mut search = Search {
            pruning: self.pruning,
            stats: SearchStats::default(),
        };

        let candidates: ArrayVec<(Location, Board), NUM_SPACES> = board
            .legal_moves(player)
            .filter_map(|mv| board.play(mv, player).ok().map(|next| (mv, next)))
            .collect();

        let mut best: Option<(Location, i8)> = None;
        let mut alpha = -INFINITY;

        for (mv, next) in candidates {
            let score = -search.negamax(next, !player, self.depth - 1, -INFINITY, -alpha);
            trace!(%mv, score, "root move");

            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((mv, score));
                alpha = alpha.max(score);
            }
        }

        let stats = search.stats;
        match best {
            Some((best_move, score)) => {
                debug!(
                    %player,
                    %best_move,
                    score,
                    depth = self.depth,
                    nodes = stats.nodes,
                    leaves = stats.leaves,
                    cutoffs = stats.cutoffs,
                    "search finished"
                );
                Some(Decision {
                    best_move,
                    score,
                    stats,
                })
            }
            None => {
                debug!(%player, "no legal move to search");
                None
            }
        }
    }
}

/// State owned by a single top-level search.
struct Search {
    pruning: Pruning,
    stats: SearchStats,
}

impl Search {
    /// Fail-soft negamax: the value of `board` for `player` with `depth` plies left.
    /// Results at or below `alpha` are upper bounds, results at or above `beta` lower bounds.
    fn negamax(&mut self, board: Board, player: Player, depth: u8, mut alpha: i8, beta: i8) -> i8 {
        self.stats.nodes += 1;

        if depth == 0 {
            self.stats.leaves += 1;
            return board.score_for(player);
        }

        let moves = board.legal_moves(player);
        if moves.is_empty() {
            // Both players stuck: game over
            if !board.has_any_legal_move(!player) {
                self.stats.leaves += 1;
                return board.score_for(player);
            }

            // I pass, and the pass uses up a ply
            return -self.negamax(board, !player, depth - 1, -beta, -alpha);
        }

        let mut best = -INFINITY;
        for mv in moves {
            let next = match board.play(mv, player) {
                Ok(next) => next,
                Err(_) => continue,
            };
            let score = -self.negamax(next, !player, depth - 1, -beta, -alpha);
            best = best.max(score);

            if self.pruning == Pruning::AlphaBeta {
                alpha = alpha.max(score);
                // Fail high: my opponent won't allow this line
                if alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flank_othello::Game;
    use std::str::FromStr;

    fn loc(s: &str) -> Location {
        Location::from_str(s).unwrap()
    }

    #[test]
    fn opening_tie_goes_to_first_location() {
        let decision = Searcher::new(1)
            .choose_move(&Board::new(), Player::Black)
            .unwrap();
        assert_eq!(decision.best_move, loc("D3"));
        assert_eq!(decision.score, 3);
        assert_eq!(decision.stats.leaves, 4);
    }

    #[test]
    fn reply_to_opening() {
        let board = Board::new().play(loc("D3"), Player::Black).unwrap();
        let decision = Searcher::new(1).choose_move(&board, Player::White).unwrap();
        assert_eq!(decision.best_move, loc("C3"));
        assert_eq!(decision.score, 0);
    }

    #[test]
    fn greedy_at_depth_one() {
        // C1 flips one tile, the later E4 flips three.
        let board = Board::from_str(
            "
            X O . . . . . .
            . . . . . . . .
            . . . . . . . .
            X O O O . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .
            . . . . . . . .",
        )
        .unwrap();

        let decision = Searcher::new(1).choose_move(&board, Player::Black).unwrap();
        assert_eq!(decision.best_move, loc("E4"));
        assert_eq!(decision.score, 5);

        assert_eq!(Searcher::new(1).choose_move(&board, Player::White), None);
    }

    #[test]
    fn no_legal_move_is_none() {
        let board = Board::from_str(&format!("XX{}", ".".repeat(62))).unwrap();
        assert_eq!(Searcher::default().choose_move(&board, Player::White), None);
        assert_eq!(Searcher::default().choose_move(&board, Player::Black), None);
    }

    #[test]
    fn search_continues_after_a_pass() {
        // Either white move leaves black stuck; white then captures the other black tile.
        let board = Board::from_str(&format!("OX{}OX{}", ".".repeat(14), ".".repeat(46))).unwrap();
        let decision = Searcher::new(3).choose_move(&board, Player::White).unwrap();

        assert_eq!(decision.best_move, loc("C1"));
        assert_eq!(decision.score, 6);
    }

    #[test]
    fn search_is_deterministic() {
        let game = Game::default()
            .apply_move(loc("F5"))
            .and_then(|g| g.apply_move(loc("D6")))
            .unwrap();

        let searcher = Searcher::new(4);
        let first = searcher.choose_move(&game.board, game.active_player);
        let second = searcher.choose_move(&game.board, game.active_player);
        assert_eq!(first, second);
    }

    #[test]
    fn pruning_matches_full_search_from_opening() {
        let pruned = Searcher::new(4)
            .choose_move(&Board::new(), Player::Black)
            .unwrap();
        let full = Searcher::new(4)
            .with_pruning(Pruning::Exhaustive)
            .choose_move(&Board::new(), Player::Black)
            .unwrap();

        assert_eq!(pruned.best_move, full.best_move);
        assert_eq!(pruned.score, full.score);
        assert_eq!(full.stats.cutoffs, 0);
        assert!(pruned.stats.nodes <= full.stats.nodes);
    }

    #[test]
    #[should_panic]
    fn zero_depth_is_rejected() {
        Searcher::new(0);
    }
}
