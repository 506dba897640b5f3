// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for gallery viewer operations.
//!
//! Measures the performance of:
//! - Opening a gallery (direct and grid)
//! - Navigation operations (next/previous)
//! - Click classification of a news image element

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use pitchside::gallery::{classify, GalleryViewer, ImageMarkers};
use std::hint::black_box;

fn gallery(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("assets/news/match-{i:03}.jpg"))
        .collect()
}

/// Benchmark opening galleries of increasing size.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    for count in [3_usize, 50, 500] {
        group.bench_function(format!("open_direct_{count}"), |b| {
            b.iter_batched(
                || (GalleryViewer::new(), gallery(count)),
                |(mut viewer, images)| {
                    viewer.open_direct(images, black_box(count as i64 / 2), "Match");
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(format!("open_grid_then_choose_{count}"), |b| {
            b.iter_batched(
                || (GalleryViewer::new(), gallery(count)),
                |(mut viewer, images)| {
                    viewer.open_grid(images, "Match");
                    viewer.choose_thumbnail(black_box(count - 1));
                    black_box(viewer);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

/// Benchmark navigation operations (next/previous).
fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let mut viewer = GalleryViewer::new();
    viewer.open_direct(gallery(50), 0, "Match");

    group.bench_function("navigate_next", |b| {
        b.iter(|| {
            viewer.next();
            black_box(viewer.index());
        });
    });

    group.bench_function("navigate_previous", |b| {
        b.iter(|| {
            viewer.previous();
            black_box(viewer.index());
        });
    });

    group.finish();
}

/// Benchmark decoding the marker attributes of a news image.
fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("gallery_navigation");

    let element = ImageMarkers::news(gallery(20), 7, "Final").to_element();
    group.bench_function("classify_news_image", |b| {
        b.iter(|| black_box(classify(black_box(&element))));
    });

    group.finish();
}

criterion_group!(benches, bench_open, bench_navigate, bench_classify);
criterion_main!(benches);
