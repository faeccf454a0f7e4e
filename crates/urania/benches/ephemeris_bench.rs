use chrono::{TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::ephemeris::{
    all_positions, house_cusps, julian_day, planet_longitude, GeoLocation, HouseSystem, PlanetId,
};

fn bench_julian_day(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
    c.bench_function("julian_day", |b| b.iter(|| julian_day(black_box(dt))));
}

fn bench_planet_longitude(c: &mut Criterion) {
    c.bench_function("planet_longitude_all_bodies", |b| {
        b.iter(|| {
            for planet in PlanetId::ALL {
                planet_longitude(black_box(planet), black_box(2451545.0));
            }
        })
    });
}

fn bench_house_cusps(c: &mut Criterion) {
    c.bench_function("house_cusps_placidus", |b| {
        b.iter(|| {
            house_cusps(
                black_box(2451545.0),
                black_box(51.48),
                black_box(0.0),
                HouseSystem::Placidus,
            )
        })
    });
}

fn bench_all_positions(c: &mut Criterion) {
    let dt = Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap();
    let loc = GeoLocation {
        lat: 51.48,
        lon: 0.0,
    };
    c.bench_function("all_positions", |b| {
        b.iter(|| all_positions(black_box(dt), black_box(loc), HouseSystem::Placidus))
    });
}

criterion_group!(
    benches,
    bench_julian_day,
    bench_planet_longitude,
    bench_house_cusps,
    bench_all_positions
);
criterion_main!(benches);
