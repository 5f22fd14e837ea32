use orrery::orrery::Orrery;
use orrery::time::AstroTime;

pub fn minutes_between(a: &AstroTime, b: &AstroTime) -> f64 {
    (a.ut() - b.ut()).abs() * 1440.0
}

/// Assert that `actual` is within `tolerance_minutes` of a UTC calendar time.
pub fn assert_time_close(
    orrery: &Orrery,
    actual: &AstroTime,
    expected: (i32, u32, u32, u32, u32),
    tolerance_minutes: f64,
) {
    let (year, month, day, hour, minute) = expected;
    let expected = orrery.make_time(year, month, day, hour, minute, 0.0).unwrap();
    let minutes = minutes_between(actual, &expected);
    assert!(
        minutes <= tolerance_minutes,
        "{actual} is {minutes:.2} min away from {expected}"
    );
}
