use chrono::{TimeZone, Utc};
use urania::ephemeris::{
    all_positions, aspect_angle, house_cusps, julian_day, local_sidereal_time, normalize_angle,
    planet_longitude, validate_coordinates, EphemerisError, GeoLocation, HouseSystem, PlanetId,
};

#[test]
fn test_julian_day_at_j2000_epoch() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
    assert_eq!(julian_day(dt), 2451545.0);
}

#[test]
fn test_julian_day_fractional_day() {
    // Midnight sits half a day before the noon boundary.
    let dt = Utc.with_ymd_and_hms(2000, 1, 2, 0, 0, 0).unwrap();
    assert_eq!(julian_day(dt), 2451545.5);
}

#[test]
fn test_julian_day_is_monotonic() {
    let earlier = Utc.with_ymd_and_hms(1950, 3, 10, 6, 0, 0).unwrap();
    let later = Utc.with_ymd_and_hms(2020, 3, 10, 6, 0, 0).unwrap();
    assert!(julian_day(earlier) < julian_day(later));
}

#[test]
fn test_all_longitudes_normalized() {
    for jd in [2440587.5, 2451545.0, 2459000.25] {
        for planet in PlanetId::ALL {
            let pos = planet_longitude(planet, jd);
            assert!(pos.lon >= 0.0 && pos.lon < 360.0, "{:?} at {}", planet, jd);
        }
    }
}

#[test]
fn test_mean_node_is_always_retrograde() {
    let pos = planet_longitude(PlanetId::MeanNode, 2451545.0);
    assert!(pos.speed_lon < 0.0);
}

#[test]
fn test_planet_speeds_are_constant() {
    let a = planet_longitude(PlanetId::Mars, 2451545.0);
    let b = planet_longitude(PlanetId::Mars, 2460000.0);
    assert_eq!(a.speed_lon, b.speed_lon);
}

#[test]
fn test_validate_coordinates_rejects_out_of_range() {
    assert!(matches!(
        validate_coordinates(90.5, 0.0),
        Err(EphemerisError::LatitudeOutOfRange { .. })
    ));
    assert!(matches!(
        validate_coordinates(0.0, -180.5),
        Err(EphemerisError::LongitudeOutOfRange { .. })
    ));
    assert!(validate_coordinates(90.0, 180.0).is_ok());
    assert!(validate_coordinates(-90.0, -180.0).is_ok());
}

#[test]
fn test_equal_houses_step_thirty_degrees() {
    let cusps = house_cusps(2451545.0, 40.0, -74.0, HouseSystem::Equal);
    for i in 1..12 {
        let step = normalize_angle(cusps[i] - cusps[i - 1]);
        assert!((step - 30.0).abs() < 1e-9);
    }
}

#[test]
fn test_placidus_reduces_to_equal_at_the_equator() {
    // The latitude adjustment vanishes at lat 0.
    let placidus = house_cusps(2451545.0, 0.0, 10.0, HouseSystem::Placidus);
    let equal = house_cusps(2451545.0, 0.0, 10.0, HouseSystem::Equal);
    for i in 0..12 {
        assert!((placidus[i] - equal[i]).abs() < 1e-9);
    }
}

#[test]
fn test_placidus_cusps_are_normalized_and_cover_the_circle() {
    let cusps = house_cusps(2451545.0, 51.5, 0.0, HouseSystem::Placidus);
    for cusp in cusps {
        assert!((0.0..360.0).contains(&cusp));
    }
    // Increments still sum to a full turn.
    let mut total = 0.0;
    for i in 0..12 {
        total += normalize_angle(cusps[(i + 1) % 12] - cusps[i]);
    }
    assert!((total - 360.0).abs() < 1e-6);
}

#[test]
fn test_aspect_angle_minimal_separation() {
    let sep = aspect_angle(10.0, 190.0);
    assert_eq!(sep.angle, 180.0);
    assert_eq!(sep.exactness_hint, 100.0);

    let sep = aspect_angle(350.0, 10.0);
    assert_eq!(sep.angle, 20.0);
}

#[test]
fn test_aspect_angle_hint_scales_within_window() {
    // 95 degrees sits 5 away from the square.
    let sep = aspect_angle(0.0, 95.0);
    assert!((sep.exactness_hint - 50.0).abs() < 1e-9);
}

#[test]
fn test_local_sidereal_time_normalized() {
    let lst = local_sidereal_time(2451545.0, -77.03);
    assert!((0.0..360.0).contains(&lst));
}

#[test]
fn test_all_positions_is_deterministic() {
    let dt = Utc.with_ymd_and_hms(1985, 11, 5, 17, 45, 0).unwrap();
    let loc = GeoLocation {
        lat: 48.85,
        lon: 2.35,
    };

    let a = all_positions(dt, loc, HouseSystem::Placidus).unwrap();
    let b = all_positions(dt, loc, HouseSystem::Placidus).unwrap();

    assert_eq!(a.planets.len(), 11);
    for (pa, pb) in a.planets.iter().zip(b.planets.iter()) {
        assert_eq!(pa.0, pb.0);
        assert_eq!(pa.1.lon.to_bits(), pb.1.lon.to_bits());
        assert_eq!(pa.1.speed_lon.to_bits(), pb.1.speed_lon.to_bits());
    }
    for i in 0..12 {
        assert_eq!(a.cusps[i].to_bits(), b.cusps[i].to_bits());
    }
    assert_eq!(a.ascendant.to_bits(), b.ascendant.to_bits());
    assert_eq!(a.midheaven.to_bits(), b.midheaven.to_bits());
}

#[test]
fn test_all_positions_rejects_bad_coordinates() {
    let dt = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
    let result = all_positions(
        dt,
        GeoLocation {
            lat: 91.0,
            lon: 0.0,
        },
        HouseSystem::Placidus,
    );
    assert!(result.is_err());
}
