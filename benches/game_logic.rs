use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_tetris::core::{Board, Game, Piece};
use term_tetris::types::{Command, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut game = Game::new(12345);
    let mut now = Duration::ZERO;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += Duration::from_millis(16);
            game.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_completed_lines()
        })
    });
}

fn bench_soft_drop_to_lock(c: &mut Criterion) {
    c.bench_function("soft_drop_to_lock", |b| {
        b.iter(|| {
            let mut game = Game::new(7);
            while game.take_last_event().is_none() {
                game.apply(black_box(Command::SoftDrop));
            }
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::T);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            if !piece.try_move(1, 0, &board) {
                piece = Piece::spawn(PieceKind::T);
            }
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let board = Board::new();
    let mut piece = Piece::spawn(PieceKind::L);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            piece.try_rotate(black_box(&board));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_soft_drop_to_lock,
    bench_try_move,
    bench_try_rotate
);
criterion_main!(benches);
