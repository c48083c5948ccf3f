use criterion::*;

#[cfg(unix)]
use pprof::criterion::{Output, PProfProfiler};

use flank_othello::test_utils::random_game;
use flank_othello::{Board, Player};
use flank_player::{Pruning, Searcher};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn criterion_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(10);

    let midgame = random_game(20, &mut StdRng::seed_from_u64(20));

    for depth in 2..=6 {
        group.bench_with_input(BenchmarkId::new("opening", depth), &depth, |b, &depth| {
            let searcher = Searcher::new(depth);
            b.iter(|| searcher.choose_move(black_box(&Board::new()), Player::Black))
        });

        group.bench_with_input(BenchmarkId::new("midgame", depth), &depth, |b, &depth| {
            let searcher = Searcher::new(depth);
            b.iter(|| searcher.choose_move(black_box(&midgame.board), midgame.active_player))
        });
    }

    group.bench_function("opening_exhaustive_4", |b| {
        let searcher = Searcher::new(4).with_pruning(Pruning::Exhaustive);
        b.iter(|| searcher.choose_move(black_box(&Board::new()), Player::Black))
    });

    group.finish();
}

#[cfg(unix)]
criterion_group! {
    name = search;
    config = Criterion::default().with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)));
    targets = criterion_search
}

#[cfg(not(unix))]
criterion_group! {
    name = search;
    config = Criterion::default();
    targets = criterion_search
}

criterion_main!(search);
