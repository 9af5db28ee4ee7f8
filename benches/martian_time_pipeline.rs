use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use marsclock::martian_time::MartianTime;
use marsclock::params::MarsClockParams;
use marsclock::time::EarthInstant;

/// Full pipeline on random instants within ±300 years of the Unix epoch
fn bench_compute(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let params = MarsClockParams::default();
    let samples = 10_000usize;

    c.bench_function("martian_time/compute", |b| {
        b.iter_batched(
            || {
                // Pre-generate inputs to avoid RNG cost in the timed section
                (0..samples)
                    .map(|_| {
                        EarthInstant::from_unix_millis(rng.random_range(-1.0e13..1.0e13)).unwrap()
                    })
                    .collect::<Vec<_>>()
            },
            |instants| {
                for instant in instants {
                    black_box(MartianTime::compute(black_box(instant), &params));
                }
            },
            BatchSize::LargeInput,
        )
    });
}

/// One display refresh: pipeline plus every rendered string
fn bench_refresh_tick(c: &mut Criterion) {
    let params = MarsClockParams::default();
    let instant = EarthInstant::from_unix_millis(1_496_275_200_000.0).unwrap();

    c.bench_function("martian_time/refresh_tick", |b| {
        b.iter(|| {
            let mars = MartianTime::compute(black_box(instant), &params);
            let sol = mars.sol_date().unwrap().to_string();
            let mct = mars.coordinated_clock().unwrap().to_string();
            let lmst = mars.local_mean_clock(black_box(222.6)).unwrap().to_string();
            black_box((sol, mct, lmst, mars.heliocentric_distance));
        })
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_compute, bench_refresh_tick
);
criterion_main!(benches);
