use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orrery::bodies::{geo_vector, helio_vector, Aberration, Body};
use orrery::moon::geo_moon;
use orrery::orrery::Orrery;
use orrery::time::AstroTime;

fn bench_helio_vector(c: &mut Criterion) {
    let orrery = Orrery::new();
    let time = AstroTime::from_ut(9_000.0);
    let mut group = c.benchmark_group("helio_vector");
    for body in [Body::Mercury, Body::Earth, Body::Neptune, Body::Pluto] {
        group.bench_function(body.to_string(), |b| {
            b.iter(|| helio_vector(&orrery, black_box(body), black_box(&time)).unwrap())
        });
    }
    group.finish();
}

fn bench_geo_vector(c: &mut Criterion) {
    let orrery = Orrery::new();
    let time = AstroTime::from_ut(9_000.0);
    c.bench_function("geo_vector Mars corrected", |b| {
        b.iter(|| {
            geo_vector(&orrery, Body::Mars, black_box(&time), Aberration::Corrected).unwrap()
        })
    });
    c.bench_function("geo_moon", |b| b.iter(|| geo_moon(black_box(&time))));
}

criterion_group!(benches, bench_helio_vector, bench_geo_vector);
criterion_main!(benches);
