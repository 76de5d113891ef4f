//! Benchmarks for filtering, paging and favorites persistence
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use pokedex::catalog::{paginate, FilterCriteria, Pokemon, Region, TYPE_TAGS};
use pokedex::favorites::{FavoritesSet, FavoritesStore, JsonFileStore};
use tempfile::tempdir;

fn create_dataset(count: u32) -> Vec<Pokemon> {
    (1..=count)
        .map(|id| {
            Pokemon::new(id, format!("pokemon-{}", id))
                .with_type(TYPE_TAGS[id as usize % TYPE_TAGS.len()])
                .with_stat("hp", 40 + id % 60)
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter");

    for size in [151, 1000, 10000] {
        let dataset = create_dataset(size);
        let favorites: FavoritesSet = (1..=size).step_by(7).collect();

        group.throughput(Throughput::Elements(size as u64));

        let search = FilterCriteria::new().search("MON-1");
        group.bench_function(format!("search_{}", size), |b| {
            b.iter(|| search.apply(black_box(&dataset), &favorites).len())
        });

        let combined = FilterCriteria::new()
            .search("mon")
            .type_tag("fire")
            .region(Region::Kanto)
            .favorites_only(true);
        group.bench_function(format!("combined_{}", size), |b| {
            b.iter(|| combined.apply(black_box(&dataset), &favorites).len())
        });
    }

    group.finish();
}

fn bench_paginate(c: &mut Criterion) {
    let dataset = create_dataset(1000);
    let favorites = FavoritesSet::new();
    let matching = FilterCriteria::new().apply(&dataset, &favorites);

    c.bench_function("paginate_1000_last_page", |b| {
        b.iter(|| paginate(black_box(&matching), 50, 20).items.len())
    });
}

fn bench_favorites(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let mut store = FavoritesStore::load(JsonFileStore::new(dir.path().join("favorites.json")));
    for id in 1..=100 {
        store.toggle(id).unwrap();
    }

    c.bench_function("favorites_toggle_persist_100", |b| {
        b.iter(|| store.toggle(black_box(25)).unwrap())
    });
}

criterion_group!(benches, bench_filter, bench_paginate, bench_favorites);
criterion_main!(benches);
