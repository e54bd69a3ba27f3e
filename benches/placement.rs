//! Placement throughput: full playouts and single moves on a busy board.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dots_boxes::{initialize, place_line, GridSize, Line};

fn full_playout(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_playout");
    for side in [4usize, 8, 16] {
        let size = GridSize::square(side).unwrap();
        let lines: Vec<Line> = Line::all(size).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &lines, |b, lines| {
            b.iter(|| {
                lines
                    .iter()
                    .fold(initialize(size), |state, &line| place_line(&state, black_box(line)))
            });
        });
    }
    group.finish();
}

fn single_move(c: &mut Criterion) {
    let size = GridSize::square(16).unwrap();
    let lines: Vec<Line> = Line::all(size).collect();
    let (last, rest) = lines.split_last().unwrap();
    let almost_done = rest
        .iter()
        .fold(initialize(size), |state, &line| place_line(&state, line));

    c.bench_function("closing_move_16x16", |b| {
        b.iter(|| place_line(black_box(&almost_done), black_box(*last)));
    });
    c.bench_function("duplicate_move_16x16", |b| {
        b.iter(|| place_line(black_box(&almost_done), black_box(rest[0])));
    });
}

criterion_group!(benches, full_playout, single_move);
criterion_main!(benches);
