use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectCalculator;
use urania::chart::config::ChartConfig;
use urania::chart::types::Planet;
use urania::ephemeris::PlanetId;

fn bench_compute_pair(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let config = ChartConfig::default();
    let planets = vec![
        Planet::new(PlanetId::Sun, 100.0, 0.985),
        Planet::new(PlanetId::Moon, 102.0, 13.176),
    ];

    c.bench_function("compute_aspects_pair", |b| {
        b.iter(|| calculator.compute(black_box(&planets), black_box(&config)))
    });
}

fn bench_compute_full_chart(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let config = ChartConfig::default();
    let planets: Vec<Planet> = PlanetId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| Planet::new(id, i as f64 * 33.0, 1.0))
        .collect();

    c.bench_function("compute_aspects_full_chart", |b| {
        b.iter(|| calculator.compute(black_box(&planets), black_box(&config)))
    });
}

criterion_group!(benches, bench_compute_pair, bench_compute_full_chart);
criterion_main!(benches);
