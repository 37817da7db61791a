use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gridlock::core::{analyze, clear_lines, Board, Piece, PieceSelector};
use gridlock::engine::Game;
use gridlock::types::{Color, PieceKind};

fn half_full_board() -> Board {
    let mut board = Board::new();
    for row in 0..8i8 {
        for col in 0..8i8 {
            if (row + col) % 2 == 0 {
                board.set(row, col, Some(Color::Cyan));
            }
        }
    }
    board
}

fn bench_place_piece(c: &mut Criterion) {
    let piece = Piece::new(PieceKind::Square2);

    c.bench_function("try_place_piece", |b| {
        b.iter(|| {
            let mut board = Board::new();
            board.try_place_piece(black_box(&piece), 3, 3)
        })
    });
}

fn bench_clear_lines(c: &mut Criterion) {
    c.bench_function("clear_row_and_col", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for i in 0..8i8 {
                board.set(4, i, Some(Color::Red));
                board.set(i, 2, Some(Color::Red));
            }
            clear_lines(&mut board)
        })
    });
}

fn bench_analyze(c: &mut Criterion) {
    let board = half_full_board();

    c.bench_function("analyze_board", |b| {
        b.iter(|| analyze(black_box(&board)))
    });
}

fn bench_valid_positions(c: &mut Criterion) {
    let board = half_full_board();
    let piece = Piece::new(PieceKind::T);

    c.bench_function("valid_positions", |b| {
        b.iter(|| board.valid_positions(black_box(&piece)))
    });
}

fn bench_generate_hand(c: &mut Criterion) {
    let board = half_full_board();
    let mut selector = PieceSelector::new(12345);

    c.bench_function("generate_hand", |b| {
        b.iter(|| selector.generate(black_box(&board), 10, 3))
    });
}

fn bench_placement_transaction(c: &mut Criterion) {
    c.bench_function("place_piece_transaction", |b| {
        b.iter(|| {
            let mut game = Game::new(black_box(12345));
            let (row, col) = game.board().valid_positions(&game.hand()[0])[0];
            game.place_piece(0, row, col)
        })
    });
}

criterion_group!(
    benches,
    bench_place_piece,
    bench_clear_lines,
    bench_analyze,
    bench_valid_positions,
    bench_generate_hand,
    bench_placement_transaction
);
criterion_main!(benches);
