//! Random positions for property tests, reached by playing random legal moves
//! from the starting position.

use crate::game::{Game, Turn};
use rand::seq::IteratorRandom;
use rand::Rng;

/// Play up to `plies` random moves from the start, passing when forced.
/// Stops early if the game finishes.
pub fn random_game(plies: u32, rng: &mut impl Rng) -> Game {
    let mut game = Game::default();

    for _ in 0..plies {
        match game.advance() {
            Turn::Finished(_) => break,
            Turn::Play(_) | Turn::Pass { .. } => {}
        }

        let mv = match game.get_moves().choose(rng) {
            Some(mv) => mv,
            None => break,
        };
        game = match game.apply_move(mv) {
            Ok(next) => next,
            Err(_) => break,
        };
    }

    game
}

/// `count` random games, each with a random length in `min_plies..=max_plies`.
pub fn random_games(
    count: usize,
    min_plies: u32,
    max_plies: u32,
    rng: &mut impl Rng,
) -> Vec<Game> {
    (0..count)
        .map(|_| {
            let plies = rng.gen_range(min_plies..=max_plies);
            random_game(plies, rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_game_is_reproducible() {
        let first = random_game(20, &mut StdRng::seed_from_u64(7));
        let second = random_game(20, &mut StdRng::seed_from_u64(7));
        assert_eq!(first, second);
    }

    #[test]
    fn random_game_places_one_tile_per_ply() {
        let game = random_game(8, &mut StdRng::seed_from_u64(3));
        assert_eq!(game.board.count_empty(), 52);
    }

    #[test]
    fn full_length_game_finishes() {
        let game = random_game(200, &mut StdRng::seed_from_u64(11));
        assert!(game.is_finished());
    }
}
