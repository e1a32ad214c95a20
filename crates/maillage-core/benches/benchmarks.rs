use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use maillage_core::proximity::rank_proximity;
use maillage_core::search::rank_search;
use maillage_core::{Centre, LatLng, Level, MeshUnit};
use std::hint::black_box;

/// `n` synthetic communes spread over a 1°×1° square around Dijon.
fn communes(n: usize) -> Vec<MeshUnit> {
    (0..n)
        .map(|i| {
            let lat = 47.0 + (i % 97) as f64 / 97.0;
            let lon = 4.5 + (i % 89) as f64 / 89.0;
            MeshUnit {
                id: format!("2121{:05}", i % 100_000),
                code: format!("{:05}", i % 100_000),
                libelle: format!("Saint-Commune-{i}"),
                niveau: Level::Commune,
                shape: None,
                centre: Some(Centre::Pair(vec![lat, lon])),
            }
        })
        .collect()
}

fn bench_proximity(c: &mut Criterion) {
    let origin = LatLng { lat: 47.3220, lon: 5.0415 };
    let mut group = c.benchmark_group("rank_proximity");
    for n in [100usize, 1_000, 5_000] {
        let candidates = communes(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &candidates, |b, cands| {
            b.iter(|| rank_proximity(black_box(origin), cands.clone(), 9))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let candidates = communes(2_000);
    c.bench_function("rank_search/2000", |b| {
        b.iter(|| rank_search(black_box("saint commune 1"), candidates.clone(), 100))
    });
}

criterion_group!(benches, bench_proximity, bench_search);
criterion_main!(benches);
