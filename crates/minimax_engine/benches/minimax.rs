use criterion::{Criterion, black_box, criterion_group, criterion_main};
use minimax_board::{Board, Player};
use minimax_engine::{Engine, SearchMode};
use std::time::Duration;

fn criterion_benchmark(c: &mut Criterion) {
    for mode in [SearchMode::Exhaustive, SearchMode::AlphaBeta] {
        let engine = Engine::new(mode);
        c.bench_function(&format!("best_move empty board {mode}"), |b| {
            let mut board = Board::new();
            b.iter(|| engine.best_move(black_box(&mut board), black_box(Player::X)))
        });
    }
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = criterion_benchmark
}
criterion_main!(benches);
