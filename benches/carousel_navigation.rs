// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for carousel navigation operations.
//!
//! Measures the performance of:
//! - Flattening the bundled catalog into the featured lane
//! - Navigation operations (advance/retreat/go_to)
//! - Rebuilding the featured lane after a catalog change

use criterion::{criterion_group, criterion_main, Criterion};
use f2p_showcase::carousel::{Carousel, Message};
use f2p_showcase::catalog::Catalog;
use f2p_showcase::domain::Game;
use f2p_showcase::featured::FeaturedLane;
use f2p_showcase::flatten::flatten_additional_images;
use std::hint::black_box;

/// A catalog large enough for flattening to show up in profiles.
fn large_catalog() -> Vec<Game> {
    (1..=1_000)
        .map(|id| {
            Game::new(id, format!("Game {id}"), "PC", format!("main{id}.png"))
                .with_additional_images((0..id % 4).map(|n| format!("g{id}-{n}.png")))
        })
        .collect()
}

fn bench_flatten(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let bundled = Catalog::bundled().unwrap();
    group.bench_function("flatten_bundled", |b| {
        b.iter(|| black_box(flatten_additional_images(bundled.games())));
    });

    let large = large_catalog();
    group.bench_function("flatten_large", |b| {
        b.iter(|| black_box(flatten_additional_images(&large)));
    });

    group.finish();
}

fn bench_navigate(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let images = flatten_additional_images(&large_catalog());
    let len = images.len();
    let mut carousel = Carousel::new(images);

    group.bench_function("advance", |b| {
        b.iter(|| black_box(carousel.advance().unwrap()));
    });

    group.bench_function("retreat", |b| {
        b.iter(|| black_box(carousel.retreat().unwrap()));
    });

    group.bench_function("go_to_last_dot", |b| {
        b.iter(|| black_box(carousel.handle(Message::GoTo(len - 1)).unwrap()));
    });

    group.finish();
}

fn bench_sync(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let mut catalog = Catalog::new(large_catalog());
    let mut lane = FeaturedLane::from_catalog(&catalog);

    group.bench_function("sync_unchanged", |b| {
        b.iter(|| black_box(lane.sync(&catalog)));
    });

    group.bench_function("sync_after_change", |b| {
        b.iter(|| {
            catalog.replace_games(large_catalog()).unwrap();
            black_box(lane.sync(&catalog));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_flatten, bench_navigate, bench_sync);
criterion_main!(benches);
