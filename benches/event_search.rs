use criterion::{black_box, criterion_group, criterion_main, Criterion};

use orrery::bodies::Body;
use orrery::events::eclipses::search_lunar_eclipse;
use orrery::events::moon_phase::search_moon_quarter;
use orrery::events::rise_set::{search_rise_set, Direction};
use orrery::events::seasons::seasons;
use orrery::observers::Observer;
use orrery::orrery::Orrery;
use orrery::time::AstroTime;

fn bench_event_search(c: &mut Criterion) {
    let orrery = Orrery::new();
    let start = AstroTime::from_ut(9_000.0);
    let observer = Observer::new(48.85, 2.35, 35.0).unwrap();

    c.bench_function("sunrise", |b| {
        b.iter(|| {
            search_rise_set(&orrery, Body::Sun, &observer, Direction::Rise, black_box(&start), 2.0)
                .unwrap()
        })
    });
    c.bench_function("moon quarter", |b| {
        b.iter(|| search_moon_quarter(&orrery, black_box(&start)).unwrap())
    });
    c.bench_function("seasons", |b| b.iter(|| seasons(&orrery, black_box(2024)).unwrap()));

    let mut group = c.benchmark_group("eclipses");
    group.sample_size(20);
    group.bench_function("lunar eclipse", |b| {
        b.iter(|| search_lunar_eclipse(&orrery, black_box(&start)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_event_search);
criterion_main!(benches);
