// Copyright 2025 the Latchkey Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use latchkey_grid::GridLayout;
use latchkey_pattern::lock::PatternLock;
use latchkey_pattern::types::PointerEvent;

const BOUNDS: Rect = Rect::new(0.0, 0.0, 300.0, 300.0);

/// Pointer samples along a diagonal sweep across the whole grid.
fn sweep(samples: usize) -> Vec<Point> {
    (0..samples)
        .map(|i| {
            let t = i as f64 / (samples - 1) as f64;
            Point::new(300.0 * t, 300.0 * t)
        })
        .collect()
}

fn bench_hit_scan(c: &mut Criterion) {
    let grid = GridLayout::with_bounds(3, BOUNDS);
    let samples = sweep(64);
    c.bench_function("grid/hit_scan_64_samples", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &pt in &samples {
                hits += grid.nodes_hit(black_box(pt), 5.0, 6).count();
            }
            hits
        });
    });
}

fn bench_full_gesture(c: &mut Criterion) {
    let samples = sweep(64);
    c.bench_function("lock/full_gesture_64_moves", |b| {
        b.iter_batched(
            || PatternLock::with_bounds(BOUNDS),
            |mut lock| {
                for &pt in &samples {
                    lock.handle_pointer(PointerEvent::Move(black_box(pt)));
                }
                lock.handle_pointer(PointerEvent::Up(Point::new(300.0, 300.0)))
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_render_model(c: &mut Criterion) {
    let mut lock = PatternLock::with_bounds(BOUNDS);
    lock.set_pointer_overlay(true);
    for &pt in &sweep(64) {
        lock.handle_pointer(PointerEvent::Move(pt));
    }
    c.bench_function("lock/render_model_mid_gesture", |b| {
        b.iter(|| black_box(lock.render_model()));
    });
}

criterion_group!(
    benches,
    bench_hit_scan,
    bench_full_gesture,
    bench_render_model
);
criterion_main!(benches);
