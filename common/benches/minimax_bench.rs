use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use triki_common::games::tictactoe::{Board, Mark, best_move, evaluate};

fn bench_full_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;

    while !evaluate(&board).is_terminal() {
        let Ok(position) = best_move(&board, current_mark) else {
            break;
        };
        if board.place(position, current_mark).is_err() {
            break;
        }
        current_mark = current_mark.opponent().unwrap_or(Mark::X);
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.bench_function("empty_board", |b| {
        let board = Board::new();
        b.iter(|| best_move(black_box(&board), Mark::O))
    });

    group.bench_function("reply_to_center", |b| {
        let board = Board::from_rows([
            [Mark::Empty, Mark::Empty, Mark::Empty],
            [Mark::Empty, Mark::X, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::Empty],
        ]);
        b.iter(|| best_move(black_box(&board), Mark::O))
    });

    group.bench_function("mid_game", |b| {
        let board = Board::from_rows([
            [Mark::X, Mark::Empty, Mark::Empty],
            [Mark::Empty, Mark::O, Mark::Empty],
            [Mark::Empty, Mark::Empty, Mark::X],
        ]);
        b.iter(|| best_move(black_box(&board), Mark::O))
    });

    group.bench_function("self_play", |b| b.iter(bench_full_self_play));

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
