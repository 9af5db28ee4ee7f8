mod common;

use common::{assert_clock_fields_valid, mars_at};
use marsclock::clock::ClockTime;
use marsclock::mars_orbit::AngleReduction;
use marsclock::params::MarsClockParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// About ±300 years around the Unix epoch
const MILLIS_SPAN: f64 = 1.0e13;
const SAMPLES: usize = 2_000;

#[test]
fn test_pipeline_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
    let params = MarsClockParams::default();

    for _ in 0..200 {
        let millis = rng.random_range(-MILLIS_SPAN..MILLIS_SPAN);
        let a = mars_at(millis, &params);
        let b = mars_at(millis, &params);
        assert_eq!(a, b);
        assert_eq!(a.mars_sol_date.to_bits(), b.mars_sol_date.to_bits());
        assert_eq!(a.coordinated_time.to_bits(), b.coordinated_time.to_bits());
    }
}

#[test]
fn test_range_invariants() {
    let mut rng = StdRng::seed_from_u64(0xBADF00D);
    let params = MarsClockParams::default();

    for _ in 0..SAMPLES {
        let millis = rng.random_range(-MILLIS_SPAN..MILLIS_SPAN);
        let longitude = rng.random_range(-360.0..720.0);
        let mars = mars_at(millis, &params);

        for angle in [
            mars.mean_anomaly,
            mars.angle_fiction_mean_sun,
            mars.solar_longitude,
        ] {
            assert!((0.0..360.0).contains(&angle), "{angle} at {millis}");
        }
        assert!((0.0..24.0).contains(&mars.coordinated_time));

        let lmst = mars.local_mean_solar_time(longitude).unwrap();
        assert!((0.0..24.0).contains(&lmst), "{lmst} at {longitude}");

        assert_clock_fields_valid(&mars.coordinated_clock().unwrap());
        assert_clock_fields_valid(&mars.local_mean_clock(longitude).unwrap());
        assert_clock_fields_valid(&mars.local_true_clock(longitude).unwrap());

        assert!(mars.heliocentric_distance > 1.38 && mars.heliocentric_distance < 1.67);
        assert!(mars.sol_date().unwrap().fraction() < 100_000);
    }
}

#[test]
fn test_legacy_truncation_before_j2000() {
    let mut rng = StdRng::seed_from_u64(0xFEEDFACE);
    let legacy = MarsClockParams::legacy();
    let floor = MarsClockParams::default();

    // 1700 .. 1960: Δt J2000 is far enough below zero for M to go negative
    let mut seen_negative = false;
    for _ in 0..500 {
        let millis = rng.random_range(-8.5e12..-3.2e11);
        let trunc = mars_at(millis, &legacy);
        let reduced = mars_at(millis, &floor);

        assert!(trunc.mean_anomaly > -360.0 && trunc.mean_anomaly < 360.0);
        assert!((0.0..360.0).contains(&reduced.mean_anomaly));
        seen_negative |= trunc.mean_anomaly < 0.0;

        // both rules agree modulo one turn
        let gap = (AngleReduction::Floor.reduce(trunc.mean_anomaly) - reduced.mean_anomaly).abs();
        assert!(gap < 1e-9 || gap > 360.0 - 1e-9, "{millis}: {gap}");
    }
    assert!(seen_negative);
}

#[test]
fn test_coordinated_time_is_monotonic_within_a_sol() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let params = MarsClockParams::default();

    for _ in 0..SAMPLES {
        let t1 = rng.random_range(-MILLIS_SPAN..MILLIS_SPAN);
        let dt = rng.random_range(1_000.0..3_600_000.0);
        let first = mars_at(t1, &params);
        let second = mars_at(t1 + dt, &params);

        let advance = 24.0 * (dt / 86_400_000.0) / 1.0274912517;
        if first.coordinated_time + advance < 23.99 {
            assert!(
                second.coordinated_time > first.coordinated_time,
                "{t1} + {dt}: {} -> {}",
                first.coordinated_time,
                second.coordinated_time
            );
        }
    }
}

#[test]
fn test_clock_matches_decimal_to_hms() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..SAMPLES {
        let hours: f64 = rng.random_range(0.0..24.0);
        let clock = ClockTime::from_hours(hours).unwrap();

        let seconds = hours * 3600.0;
        let actual = clock.hours() as f64 * 3600.0
            + clock.minutes() as f64 * 60.0
            + clock.seconds() as f64;

        // truncation: never ahead of the input, never a full second behind
        assert!(actual <= seconds + 1e-6, "{hours}: {clock}");
        assert!(seconds - actual < 1.0, "{hours}: {clock}");
    }
}

#[test]
fn test_clock_whole_seconds_are_exact() {
    for second in 0..86_400u32 {
        let clock = ClockTime::from_hours(second as f64 / 3600.0).unwrap();
        assert_eq!(
            (clock.hours() as u32, clock.minutes() as u32, clock.seconds() as u32),
            (second / 3600, (second % 3600) / 60, second % 60),
            "second {second}"
        );
    }
}

#[test]
fn test_pipeline_beyond_precision_horizon() {
    let params = MarsClockParams::default();
    let legacy = MarsClockParams::legacy();

    for millis in [-1.0e18, -3.0e17, 3.0e17, 1.0e18] {
        let mars = mars_at(millis, &params);
        assert!(mars.beyond_precision_horizon(), "{millis}");

        for angle in [
            mars.mean_anomaly,
            mars.angle_fiction_mean_sun,
            mars.solar_longitude,
        ] {
            assert!((0.0..360.0).contains(&angle), "{angle} at {millis}");
        }
        assert!((0.0..24.0).contains(&mars.coordinated_time), "{millis}");
        assert!(mars.heliocentric_distance > 1.38 && mars.heliocentric_distance < 1.67);

        assert!(mars.sol_date().unwrap().fraction() < 100_000);
        assert_clock_fields_valid(&mars.coordinated_clock().unwrap());
        assert_clock_fields_valid(&mars.local_mean_clock(222.6).unwrap());

        // the legacy rule still stays within one turn of zero
        let raw = mars_at(millis, &legacy);
        assert!(raw.mean_anomaly.abs() < 360.0, "{millis}");
    }

    let near = mars_at(common::REFERENCE_2000_01_06_MS, &params);
    assert!(!near.beyond_precision_horizon());
}

#[test]
fn test_prime_meridian_matches_coordinated_time() {
    let mut rng = StdRng::seed_from_u64(7);
    let params = MarsClockParams::default();

    for _ in 0..200 {
        let mars = mars_at(rng.random_range(-MILLIS_SPAN..MILLIS_SPAN), &params);
        assert_eq!(mars.local_mean_solar_time(0.0).unwrap(), mars.coordinated_time);
    }
}
