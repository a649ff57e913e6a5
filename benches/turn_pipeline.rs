//! Benchmarks for the turn pipeline.
//!
//! Random walks over seeded games: setup, legal-move generation, and full
//! action resolution including reveals and trap damage.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use queens_garden::{GameEngine, GameRules, Suit};

/// Play up to `steps` legal moves, cycling through `valid_moves`.
fn random_walk(seed: u64, steps: usize) -> u32 {
    let Ok(mut game) = GameEngine::with_seed(GameRules::default(), seed) else {
        return 0;
    };
    game.initialize(Suit::Hearts);

    for step in 0..steps {
        if game.is_game_over() {
            break;
        }
        let moves = game.valid_moves();
        let Some(&(target, _)) = moves.get(step % moves.len().max(1)) else {
            break;
        };
        let _ = game.move_to(target);
    }
    game.turn()
}

fn bench_initialize(c: &mut Criterion) {
    c.bench_function("initialize", |b| {
        b.iter(|| {
            let mut game = GameEngine::with_seed(GameRules::default(), black_box(42)).unwrap();
            black_box(game.initialize(black_box(Suit::Spades)))
        });
    });
}

fn bench_valid_moves(c: &mut Criterion) {
    let mut game = GameEngine::with_seed(GameRules::default(), 7).unwrap();
    game.initialize(Suit::Diamonds);
    for step in 0..20 {
        let moves = game.valid_moves();
        if game.is_game_over() || moves.is_empty() {
            break;
        }
        let _ = game.move_to(moves[step % moves.len()].0);
    }

    c.bench_function("valid_moves", |b| {
        b.iter(|| black_box(black_box(&game).valid_moves()));
    });
}

fn bench_random_walk(c: &mut Criterion) {
    c.bench_function("random_walk_50", |b| {
        b.iter(|| black_box(random_walk(black_box(42), black_box(50))));
    });
}

fn bench_walk_batch(c: &mut Criterion) {
    c.bench_function("10_walks_sequential", |b| {
        b.iter(|| {
            for seed in 0..10u64 {
                let _ = black_box(random_walk(black_box(seed), 50));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_initialize,
    bench_valid_moves,
    bench_random_walk,
    bench_walk_batch
);
criterion_main!(benches);
