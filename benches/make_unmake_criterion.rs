use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use plum_board::utils::long_algebraic::long_algebraic_to_move;
use plum_board::{Move, Piece, Position};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    line: &'static [&'static str],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "opening",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        line: &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f6e4"],
    },
    BenchCase {
        name: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        line: &["e1c1", "h3g2", "e5f7", "e8g8", "d5e6", "b4c3"],
    },
];

fn resolve_line(position: &Position, line: &[&str]) -> Vec<Move> {
    let mut scratch = position.clone();
    line.iter()
        .map(|text| {
            let mv = long_algebraic_to_move(text, &scratch).expect("benchmark move should parse");
            scratch.make_move(mv);
            mv
        })
        .collect()
}

fn bench_make_unmake(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unmake");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let root = Position::from_fen(case.fen).expect("benchmark FEN should parse");
        let moves = resolve_line(&root, case.line);

        group.throughput(Throughput::Elements(moves.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &moves, |b, moves| {
            let mut position = root.clone();
            b.iter(|| {
                for &mv in moves {
                    position.make_move(black_box(mv));
                }
                let key = position.hash();
                for _ in moves {
                    position.undo_move();
                }
                black_box(key)
            });
        });
    }

    group.finish();
}

fn bench_primitives(c: &mut Criterion) {
    let mut group = c.benchmark_group("primitives");

    group.bench_function("set_place_and_clear", |b| {
        let mut position = Position::startpos();
        b.iter(|| {
            position.set(black_box(27), Some(Piece::LightQueen));
            position.set(black_box(27), None);
        });
    });

    group.bench_function("hash", |b| {
        let position = Position::startpos();
        b.iter(|| black_box(&position).hash());
    });

    group.bench_function("null_move", |b| {
        let mut position = Position::startpos();
        b.iter(|| {
            position.make_null();
            position.undo_null();
        });
    });

    group.finish();
}

criterion_group!(make_unmake_benches, bench_make_unmake, bench_primitives);
criterion_main!(make_unmake_benches);
