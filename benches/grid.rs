//! Benchmarks for grid edits, segment math and dimension expressions.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sashgrid::{compute_segments, evaluate, CellId, Grid, GridLayout, Selection};

/// `n` x `n` grid filled with 1x1 cells.
fn filled(n: u32) -> Grid<()> {
    let mut grid = Grid::with_dimensions(vec![100.0; n as usize], vec![100.0; n as usize]);
    for r in 0..n {
        for c in 0..n {
            grid = grid.place_cell(r, c, ());
        }
    }
    grid
}

/// Select the top-left `k` x `k` block row by row.
fn block(grid: &Grid<()>, k: u32) -> Selection {
    let mut sel = Selection::new();
    for r in 0..k {
        for c in 0..k {
            sel = sel.toggle(grid, CellId::at(r, c));
        }
    }
    sel
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for n in [4u32, 16, 32] {
        let grid = filled(n);
        let sel = block(&grid, n / 2);
        group.throughput(Throughput::Elements(u64::from(n * n)));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| grid.merge(black_box(&sel), None).expect("rectangular block"))
        });
    }
    group.finish();
}

fn bench_segments(c: &mut Criterion) {
    let sizes: Vec<f64> = (0..1000).map(|i| f64::from(i % 7 + 1) * 25.0).collect();
    c.bench_function("compute_segments_1000", |b| {
        b.iter(|| compute_segments(black_box(&sizes)))
    });

    let segs = compute_segments(&sizes);
    let total = segs.total();
    c.bench_function("index_at_1000", |b| {
        b.iter(|| segs.index_at(black_box(total * 0.73)))
    });
}

fn bench_hit_test(c: &mut Criterion) {
    let grid = filled(32);
    let layout = GridLayout::new(&grid);
    c.bench_function("cell_at_point_32x32", |b| {
        b.iter(|| layout.cell_at_point(&grid, black_box(1550.0), black_box(2950.0)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    for (name, text) in [
        ("plain", "1200"),
        ("chain", "600 + 2 * 25 - 100 / 4"),
        ("rejected", "alert(document.cookie)"),
    ] {
        group.bench_with_input(BenchmarkId::from_parameter(name), text, |b, text| {
            b.iter(|| evaluate(black_box(text)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_merge,
    bench_segments,
    bench_hit_test,
    bench_evaluate
);
criterion_main!(benches);
