use marsclock::clock::ClockTime;
use marsclock::martian_time::MartianTime;
use marsclock::params::MarsClockParams;
use marsclock::time::EarthInstant;

/// 2000-01-06T00:00:00 UTC, reference date of the Mars24 algorithm family
pub const REFERENCE_2000_01_06_MS: f64 = 947_116_800_000.0;

/// Unix milliseconds whose TT Julian Date is exactly J2000.0 (37 leap seconds)
pub const J2000_TT_MS: f64 = 946_727_930_816.0;

pub fn mars_at(unix_millis: f64, params: &MarsClockParams) -> MartianTime {
    let instant = EarthInstant::from_unix_millis(unix_millis).expect("finite instant");
    MartianTime::compute(instant, params)
}

pub fn assert_clock_fields_valid(clock: &ClockTime) {
    let [hh, mm, ss] = clock.fields();
    for field in [&hh, &mm, &ss] {
        assert_eq!(field.len(), 2, "field {field:?} of {clock}");
        assert!(field.chars().all(|c| c.is_ascii_digit()), "{clock}");
    }
    assert!(hh.parse::<u8>().unwrap() <= 23, "{clock}");
    assert!(mm.parse::<u8>().unwrap() <= 59, "{clock}");
    assert!(ss.parse::<u8>().unwrap() <= 59, "{clock}");
}
