use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use common::game::engine::{is_move_possible, resolve};
use common::game::spawner::spawn_tile;
use common::game::{Board, Direction};
use common::rng::SessionRng;

fn mid_game_board() -> Board {
    Board::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![8, 16, 8, 0],
        vec![2, 0, 32, 2],
        vec![64, 2, 0, 4],
    ])
}

fn dense_board() -> Board {
    Board::from_rows(vec![
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
        vec![2, 4, 2, 4],
        vec![4, 2, 4, 2],
    ])
}

fn bench_full_game() {
    let mut rng = SessionRng::new(42);
    let mut board = Board::empty(4);
    spawn_tile(&mut board, &mut rng);
    spawn_tile(&mut board, &mut rng);

    let directions = [
        Direction::Left,
        Direction::Up,
        Direction::Right,
        Direction::Down,
    ];
    let mut i = 0;
    while is_move_possible(&board) {
        let outcome = resolve(&board, directions[i % 4]);
        if outcome.moved {
            board = outcome.board;
            spawn_tile(&mut board, &mut rng);
        }
        i += 1;
    }
}

fn engine_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("move_engine");

    let board = mid_game_board();
    group.bench_function("resolve_left", |b| {
        b.iter(|| resolve(black_box(&board), Direction::Left))
    });

    group.bench_function("resolve_down", |b| {
        b.iter(|| resolve(black_box(&board), Direction::Down))
    });

    let dense = dense_board();
    group.bench_function("is_move_possible_dense", |b| {
        b.iter(|| is_move_possible(black_box(&dense)))
    });

    group.bench_function("full_game", |b| b.iter(bench_full_game));

    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
