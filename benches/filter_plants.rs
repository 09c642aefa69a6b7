//! Criterion benchmarks for category filtering.
//!
//! The keyword matcher runs on every category click, so it should stay
//! comfortably cheap even for catalogs far larger than the real one.
//!
//! Run with: cargo bench --bench filter_plants

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use plant_storefront::{Classifier, KeywordClassifier, Plant};

fn synthetic_catalog(n: usize) -> Vec<Plant> {
    let categories = ["Fruit", "Flowering", "Shade", "Timber", "Evergreen", "Bamboo"];
    let descriptions = [
        "Sweet tropical fruit tree",
        "Crimson blossom canopy",
        "Wide shade canopy",
        "Prized timber species",
        "Dense evergreen screen",
        "Fast-growing bamboo grove",
    ];

    (0..n)
        .map(|i| Plant {
            id: i.to_string(),
            name: format!("Plant {}", i),
            image: "https://cdn.example.com/p.png".to_string(),
            category: categories[i % categories.len()].to_string(),
            price: (i % 50) as f64,
            short_description: descriptions[i % descriptions.len()].to_string(),
            description: String::new(),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_plants");

    let classifier = KeywordClassifier::new();
    let plants = synthetic_catalog(10_000);

    // "all" is the fast path: one clone of the whole list
    group.bench_function("all_10k", |b| {
        b.iter(|| black_box(classifier.filter(black_box(&plants), "all")));
    });

    // keyword scan across three fields per plant
    group.bench_function("fruit_10k", |b| {
        b.iter(|| black_box(classifier.filter(black_box(&plants), "fruit")));
    });

    // unknown slug short-circuits without touching the plants
    group.bench_function("unknown_10k", |b| {
        b.iter(|| black_box(classifier.filter(black_box(&plants), "succulents")));
    });

    group.finish();
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
