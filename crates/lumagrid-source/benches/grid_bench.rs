// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Criterion benchmarks for the lumagrid-source crate. Covers the three
// allocating operations a scanner calls per frame: row fetch, crop, and
// counter-clockwise rotation on a VGA-sized synthetic grid.

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use lumagrid_source::LuminanceGrid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// 640x480 grid with a horizontal gradient and a bright centre block.
fn synthetic_grid() -> LuminanceGrid {
    let (width, height) = (640usize, 480usize);
    let mut samples = vec![0u8; width * height];
    for y in 0..height {
        for x in 0..width {
            let inside = (160..480).contains(&x) && (120..360).contains(&y);
            samples[y * width + x] = if inside { 240 } else { (x % 256) as u8 };
        }
    }
    LuminanceGrid::from_samples(&samples, width, height).expect("synthetic grid fits limits")
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

/// Fetch every row through one reused scratch buffer, as a 1D reader does.
fn bench_row_scan(c: &mut Criterion) {
    let grid = synthetic_grid();
    c.bench_function("row scan with reuse (640x480)", |b| {
        b.iter(|| {
            let mut scratch = Some(Vec::with_capacity(grid.width()));
            for y in 0..grid.height() {
                let row = grid.row(black_box(y), scratch.take()).expect("row in range");
                black_box(&row);
                scratch = Some(row);
            }
        });
    });
}

fn bench_crop(c: &mut Criterion) {
    let grid = synthetic_grid();
    c.bench_function("crop centre (320x240 of 640x480)", |b| {
        b.iter(|| {
            let cropped = grid
                .crop(black_box(160), black_box(120), 320, 240)
                .expect("crop fits");
            black_box(cropped);
        });
    });
}

fn bench_rotate(c: &mut Criterion) {
    let grid = synthetic_grid();
    c.bench_function("rotate counter-clockwise (640x480)", |b| {
        b.iter(|| black_box(grid.rotate_counter_clockwise()));
    });
}

criterion_group!(benches, bench_row_scan, bench_crop, bench_rotate);
criterion_main!(benches);
