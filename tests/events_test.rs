mod common;

use approx::assert_abs_diff_eq;

use orrery::bodies::Body;
use orrery::conversion::longitude_offset;
use orrery::coordinates::{angle_from_sun, sun_position};
use orrery::events::eclipses::{
    next_global_solar_eclipse, next_lunar_eclipse, search_global_solar_eclipse,
    search_lunar_eclipse, EclipseKind,
};
use orrery::events::moon_phase::moon_phase;
use orrery::events::rise_set::{search_rise_set, Direction};
use orrery::events::seasons::seasons;
use orrery::events::transit::{next_transit, search_transit};
use orrery::observers::Observer;
use orrery::orrery::Orrery;

use common::{assert_time_close, minutes_between};

#[test]
fn test_eclipses_happen_at_syzygies() {
    let orrery = Orrery::new();
    let start = orrery.make_time(2030, 1, 1, 0, 0, 0.0).unwrap();

    let mut lunar = search_lunar_eclipse(&orrery, &start).unwrap();
    let mut solar = search_global_solar_eclipse(&orrery, &start).unwrap();
    for _ in 0..6 {
        let phase = moon_phase(&orrery, &lunar.peak).unwrap();
        assert!(longitude_offset(phase - 180.0).abs() < 2.0, "lunar eclipse at phase {phase}");
        let phase = moon_phase(&orrery, &solar.peak).unwrap();
        assert!(longitude_offset(phase).abs() < 2.0, "solar eclipse at phase {phase}");
        if solar.kind == EclipseKind::Partial {
            assert!(solar.latitude.is_none());
        } else {
            let lat = solar.latitude.unwrap();
            assert!((-90.0..=90.0).contains(&lat));
        }

        lunar = next_lunar_eclipse(&orrery, &lunar.peak).unwrap();
        solar = next_global_solar_eclipse(&orrery, &solar.peak).unwrap();
    }
}

#[test]
fn test_seasons_match_solar_longitude() {
    let orrery = Orrery::new();
    for year in [1800, 1950, 2024, 2100] {
        let info = seasons(&orrery, year).unwrap();
        for (time, lon) in [
            (info.mar_equinox, 0.0),
            (info.jun_solstice, 90.0),
            (info.sep_equinox, 180.0),
            (info.dec_solstice, 270.0),
        ] {
            let sun = sun_position(&orrery, &time).unwrap();
            assert_abs_diff_eq!(longitude_offset(sun.elon - lon), 0.0, epsilon = 1e-5);
        }
    }
}

#[test]
fn test_daylight_around_june_solstice() {
    let orrery = Orrery::new();
    let paris = Observer::new(48.85, 2.35, 35.0).unwrap();
    let solstice = seasons(&orrery, 2024).unwrap().jun_solstice;
    let start = solstice.add_days(-1.0);

    let rise = search_rise_set(&orrery, Body::Sun, &paris, Direction::Rise, &start, 2.0)
        .unwrap()
        .unwrap();
    let set = search_rise_set(&orrery, Body::Sun, &paris, Direction::Set, &rise, 1.0)
        .unwrap()
        .unwrap();
    // about 16 h 10 min of daylight in Paris at the solstice
    let daylight = minutes_between(&set, &rise);
    assert!(daylight > 960.0 && daylight < 980.0, "{daylight} min");
}

#[test]
fn test_transits_of_mercury() {
    let orrery = Orrery::new();
    let start = orrery.make_time(2000, 1, 1, 0, 0, 0.0).unwrap();
    let expected_peaks = [
        (2003, 5, 7, 7, 52),
        (2006, 11, 8, 21, 41),
        (2016, 5, 9, 14, 57),
        (2019, 11, 11, 15, 20),
    ];

    let mut transit = search_transit(&orrery, Body::Mercury, &start).unwrap();
    for (i, &peak) in expected_peaks.iter().enumerate() {
        if i > 0 {
            transit = next_transit(&orrery, Body::Mercury, &transit.peak).unwrap();
        }
        assert_time_close(&orrery, &transit.peak, peak, 5.0);
        assert!(transit.start.ut() < transit.peak.ut() && transit.peak.ut() < transit.finish.ut());
        let separation = angle_from_sun(&orrery, Body::Mercury, &transit.peak).unwrap() * 60.0;
        assert_abs_diff_eq!(separation, transit.separation, epsilon = 1e-9);
        // the solar disc is about 16 arcminutes in radius
        assert!(transit.separation < 16.5);
    }
}
