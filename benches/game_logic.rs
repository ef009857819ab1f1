use std::time::{Duration, Instant};

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridfall::core::{offsets, Board, GameSession};
use gridfall::types::{GameCommand, GameConfig, GameStatus, ShapeKind};

fn bench_fall_tick(c: &mut Criterion) {
    let tick = Duration::from_millis(250);

    c.bench_function("fall_tick", |b| {
        let mut t = Instant::now();
        let mut session = GameSession::new(GameConfig::default(), 12345, ());
        session.start(t);
        b.iter(|| {
            t += tick;
            session.poll(black_box(t));
            if session.status() == GameStatus::GameOver {
                session.handle(GameCommand::ToggleRun, t);
            }
        })
    });
}

fn bench_collapse_four_rows(c: &mut Criterion) {
    c.bench_function("collapse_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new(12, 20);
            let cells: Vec<(u8, u8)> = (16..20).flat_map(|y| (0..12).map(move |x| (x, y))).collect();
            board.set_taken(&cells, ShapeKind::I);
            let completed = board.completed_rows();
            board.collapse(black_box(&completed));
        })
    });
}

fn bench_can_place(c: &mut Criterion) {
    let board = Board::new(12, 20);
    let shape = offsets(ShapeKind::T);

    c.bench_function("can_place", |b| {
        b.iter(|| board.can_place(black_box(&shape), black_box(4), black_box(10)))
    });
}

fn bench_shift(c: &mut Criterion) {
    let now = Instant::now();
    let mut session = GameSession::new(GameConfig::default(), 12345, ());
    session.start(now);

    c.bench_function("shift", |b| {
        b.iter(|| {
            session.handle(black_box(GameCommand::MoveRight), now);
            session.handle(black_box(GameCommand::MoveLeft), now);
        })
    });
}

criterion_group!(
    benches,
    bench_fall_tick,
    bench_collapse_four_rows,
    bench_can_place,
    bench_shift
);
criterion_main!(benches);
