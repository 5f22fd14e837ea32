use approx::assert_abs_diff_eq;

use orrery::bodies::{geo_vector, helio_distance, helio_vector, Aberration, Body};
use orrery::moon::geo_moon;
use orrery::coordinates::equator;
use orrery::observers::{observer_vector, EquatorEpoch, Observer};
use orrery::orrery::Orrery;
use orrery::rotation::{rotation_between, Frame};
use orrery::time::AstroTime;

#[test]
fn test_planet_distances_stay_within_orbits() {
    let orrery = Orrery::new();
    let ranges = [
        (Body::Mercury, 0.30, 0.47),
        (Body::Venus, 0.71, 0.73),
        (Body::Earth, 0.98, 1.02),
        (Body::Mars, 1.38, 1.67),
        (Body::Jupiter, 4.95, 5.46),
        (Body::Saturn, 8.9, 10.2),
        (Body::Uranus, 18.2, 20.2),
        (Body::Neptune, 29.7, 30.5),
        (Body::Pluto, 29.5, 49.5),
    ];
    let mut ut = -36_525.0;
    while ut <= 36_525.0 {
        let time = AstroTime::from_ut(ut);
        for &(body, min, max) in &ranges {
            let dist = helio_distance(&orrery, body, &time).unwrap();
            assert!(dist > min && dist < max, "{body} at {dist} AU on {time}");
        }
        ut += 997.0;
    }
}

#[test]
fn test_geocentric_sun_mirrors_earth() {
    let orrery = Orrery::new();
    let time = orrery.make_time(2024, 7, 4, 12, 0, 0.0).unwrap();
    let earth = helio_vector(&orrery, Body::Earth, &time).unwrap();
    let sun = geo_vector(&orrery, Body::Sun, &time, Aberration::None).unwrap();
    assert_abs_diff_eq!((sun.pos + earth.pos).norm(), 0.0, epsilon = 1e-12);

    // aberration moves the apparent Sun by about 20 arcseconds
    let apparent = geo_vector(&orrery, Body::Sun, &time, Aberration::Corrected).unwrap();
    let shift = apparent.pos.angle(&sun.pos).to_degrees() * 3600.0;
    assert!(shift > 19.0 && shift < 22.0, "{shift} arcsec");
}

#[test]
fn test_moon_helio_and_geo_agree() {
    let orrery = Orrery::new();
    let time = AstroTime::from_ut(8_765.4);
    let earth = helio_vector(&orrery, Body::Earth, &time).unwrap();
    let moon = helio_vector(&orrery, Body::Moon, &time).unwrap();
    let geo = geo_moon(&time);
    assert_abs_diff_eq!((moon.pos - earth.pos - geo.pos).norm(), 0.0, epsilon = 1e-12);
    assert_eq!(geo_vector(&orrery, Body::Moon, &time, Aberration::Corrected).unwrap(), geo);
}

#[test]
fn test_rotations_compose_to_identity() {
    let orrery = Orrery::new();
    let time = AstroTime::from_ut(-12_345.6);
    let observer = Observer::new(-33.9, 18.4, 1_200.0).unwrap();
    let frames = [Frame::Eqj, Frame::Eqd, Frame::Ecl, Frame::Ect, Frame::Hor, Frame::Gal];
    for &a in &frames {
        for &b in &frames {
            let ab = rotation_between(&orrery, a, b, &time, Some(&observer)).unwrap();
            let ba = rotation_between(&orrery, b, a, &time, Some(&observer)).unwrap();
            let product = ab.combine(&ba).rot;
            assert_abs_diff_eq!(product, nalgebra::Matrix3::identity(), epsilon = 1e-13);
        }
    }
}

#[test]
fn test_lunar_parallax() {
    let orrery = Orrery::new();
    let time = orrery.make_time(2010, 3, 14, 6, 30, 0.0).unwrap();
    let geocenter = geo_moon(&time);
    for (lat, lon) in [(45.0, -120.0), (-70.5, 160.2), (0.0, 0.0)] {
        let observer = Observer::new(lat, lon, 0.0).unwrap();
        let topo = equator(
            &orrery,
            Body::Moon,
            &time,
            &observer,
            EquatorEpoch::J2000,
            Aberration::None,
        )
        .unwrap();
        // the horizontal parallax of the Moon never exceeds about 1.03 degrees
        let shift = topo.vec.pos.angle(&geocenter.pos).to_degrees();
        assert!(shift < 1.03, "parallax {shift} at ({lat}, {lon})");
        let site = observer_vector(&orrery, &time, &observer, EquatorEpoch::J2000);
        assert_abs_diff_eq!((topo.vec.pos + site.pos - geocenter.pos).norm(), 0.0, epsilon = 1e-15);
    }
}
