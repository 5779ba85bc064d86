//! Stroke generation benchmarks.
//!
//! A full re-render of a long story redraws every mark, so stroke generation
//! sits on the hot path of each scroll frame. These benchmarks measure a
//! single stroke and a 100-mark board for both backends.
//!
//! Run with: `cargo bench --bench sketch_benchmarks`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use inktally_sketch::prelude::*;

fn mark_lines(count: u32) -> Vec<Line> {
    // Five-per-row vertical marks at the original layout's spacing.
    (0..count)
        .map(|i| {
            let x = 20.0 + (i % 5) as f64 * 18.0 * 1.25;
            let y = (i / 5) as f64 * 30.0 * 1.25 + 15.0;
            Line::new(x, y, x, y + 31.25)
        })
        .collect()
}

fn bench_single_stroke(c: &mut Criterion) {
    let style = StrokeStyle::default();
    let line = Line::new(20.0, 15.0, 20.0, 46.25);

    c.bench_function("sketch_single_stroke", |b| {
        b.iter(|| SketchBackend.stroke(black_box(line), &style, black_box(42)))
    });
    c.bench_function("plain_single_stroke", |b| {
        b.iter(|| PlainBackend.stroke(black_box(line), &style, black_box(42)))
    });
}

fn bench_full_board(c: &mut Criterion) {
    let style = StrokeStyle::default();
    let mut group = c.benchmark_group("full_board");

    for count in [25u32, 100] {
        let lines = mark_lines(count);
        group.bench_with_input(BenchmarkId::new("sketch", count), &lines, |b, lines| {
            b.iter(|| {
                for (i, line) in lines.iter().enumerate() {
                    let seed = stroke_seed(0, "a", i as u32);
                    black_box(SketchBackend.stroke(*line, &style, seed));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single_stroke, bench_full_board);
criterion_main!(benches);
