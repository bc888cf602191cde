// Refresh and recommend throughput over synthetic catalogs
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use giftrec::prelude::*;
use rand::prelude::*;

const CATEGORIES: [&str; 8] = [
    "Technology", "Books", "Accessories", "Arts & Crafts", "Music", "Gaming", "Food", "Wellness",
];
const STYLES: [&str; 5] = ["Modern", "Classic", "Traditional", "Creative", "Minimalist"];
const AGES: [&str; 4] = ["Any", "Adult", "Teen", "Child"];
const OCCASIONS: [&str; 4] = ["Any", "Birthday", "Anniversary", "Holiday"];

fn generate_catalog(size: usize) -> Vec<CatalogItem> {
    let mut rng = rand::rng();
    (0..size)
        .map(|i| {
            CatalogItem::new(
                i as u64,
                format!("Gift {}", i),
                rng.random_range(5.0f32..500.0f32),
                *CATEGORIES.choose(&mut rng).unwrap(),
            )
            .with_attributes(
                GiftAttributes::default()
                    .with_target_age(*AGES.choose(&mut rng).unwrap())
                    .with_style(*STYLES.choose(&mut rng).unwrap())
                    .with_occasion(*OCCASIONS.choose(&mut rng).unwrap())
                    .with_popularity(rng.random_range(0.0f32..100.0f32)),
            )
        })
        .collect()
}

fn survey() -> Survey {
    Survey::new()
        .with_answer("budget", 180)
        .with_answer("interests", "Technology")
        .with_answer("style", "Modern")
}

fn benchmark_refresh(c: &mut Criterion) {
    let mut group = c.benchmark_group("refresh");

    for size in [100, 1000, 10000].iter() {
        let catalog = generate_catalog(*size);
        let service = RecommendationService::default();
        group.bench_with_input(BenchmarkId::new("giftrec", size), size, |b, _| {
            b.iter(|| {
                service.refresh(black_box(&catalog)).unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_recommend(c: &mut Criterion) {
    let mut group = c.benchmark_group("recommend");
    let survey = survey();

    for size in [100, 1000, 10000].iter() {
        let service = RecommendationService::default();
        service.refresh(&generate_catalog(*size)).unwrap();

        group.bench_with_input(BenchmarkId::new("top10", size), size, |b, _| {
            b.iter(|| {
                let results = service.recommend(black_box(&survey), 10).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

fn benchmark_parallel_threshold(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_threshold");
    let catalog = generate_catalog(10000);
    let survey = survey();

    for threshold in [1usize, usize::MAX].iter() {
        let service = RecommendationService::new(ServiceConfig {
            parallel_threshold: *threshold,
            ..ServiceConfig::default()
        })
        .unwrap();
        service.refresh(&catalog).unwrap();

        let label = if *threshold == 1 { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| {
                let results = service.recommend(black_box(&survey), 10).unwrap();
                black_box(results);
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_refresh,
    benchmark_recommend,
    benchmark_parallel_threshold
);
criterion_main!(benches);
