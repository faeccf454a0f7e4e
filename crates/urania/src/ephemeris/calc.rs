//! Mean-element astronomy primitives.
//!
//! This is a deliberately low-precision model: mean longitudes as linear
//! polynomials in Julian centuries since J2000.0, constant daily speeds, and
//! a latitude-adjusted approximation of Placidus houses. Good enough for
//! chart work; nowhere near ephemeris-grade.

use crate::ephemeris::types::{
    BodyPosition, GeoLocation, HouseSystem, PlanetId, Positions, Separation,
};
use chrono::{DateTime, Datelike, Timelike, Utc};
use thiserror::Error;

/// Errors raised by input validation before any computation runs
#[derive(Error, Debug)]
pub enum EphemerisError {
    #[error("latitude {lat} out of range [-90, 90]")]
    LatitudeOutOfRange { lat: f64 },
    #[error("longitude {lon} out of range [-180, 180]")]
    LongitudeOutOfRange { lon: f64 },
    #[error("unparseable birth moment {value:?}: {message}")]
    InvalidMoment { value: String, message: String },
    #[error("unparseable coordinate {value:?}: {message}")]
    InvalidCoordinate { value: String, message: String },
}

/// Canonical aspect angles scanned by [`aspect_angle`]'s exactness hint
const CANONICAL_ASPECT_ANGLES: [f64; 9] =
    [0.0, 30.0, 45.0, 60.0, 90.0, 120.0, 135.0, 150.0, 180.0];

const SCAN_WINDOW_DEG: f64 = 10.0;

/// Julian Day Number for a UTC instant, Gregorian calendar, with the
/// fractional-day term (day boundary at noon UTC).
pub fn julian_day(dt: DateTime<Utc>) -> f64 {
    let year = dt.year() as f64;
    let month = dt.month() as f64;
    let day = dt.day() as f64;

    let decimal_hours =
        dt.hour() as f64 + dt.minute() as f64 / 60.0 + dt.second() as f64 / 3600.0;

    let a = ((14.0 - month) / 12.0).floor();
    let y = year + 4800.0 - a;
    let m = month + 12.0 * a - 3.0;

    let jdn = day + ((153.0 * m + 2.0) / 5.0).floor() + 365.0 * y + (y / 4.0).floor()
        - (y / 100.0).floor()
        + (y / 400.0).floor()
        - 32045.0;

    jdn + (decimal_hours - 12.0) / 24.0
}

/// Normalize an angle into [0, 360)
pub fn normalize_angle(angle: f64) -> f64 {
    let mut normalized = angle % 360.0;
    if normalized < 0.0 {
        normalized += 360.0;
    }
    normalized
}

/// Mean ecliptic longitude and constant daily speed for one body.
///
/// Coefficients are mean-longitude linear terms in Julian centuries since
/// J2000.0. The mean node regresses, so its speed is always negative.
pub fn planet_longitude(planet: PlanetId, jd: f64) -> BodyPosition {
    let t = (jd - 2451545.0) / 36525.0;

    let (base, rate, speed) = match planet {
        PlanetId::Sun => (280.460, 36000.771, 0.985),
        PlanetId::Moon => (218.316, 481267.881, 13.176),
        PlanetId::Mercury => (252.251, 149472.675, 1.383),
        PlanetId::Venus => (181.980, 58517.816, 1.202),
        PlanetId::Mars => (355.453, 19140.297, 0.524),
        PlanetId::Jupiter => (34.352, 3034.906, 0.083),
        PlanetId::Saturn => (50.078, 1222.114, 0.033),
        PlanetId::Uranus => (314.055, 428.379, 0.012),
        PlanetId::Neptune => (304.348, 218.486, 0.006),
        PlanetId::Pluto => (238.957, 145.181, 0.004),
        PlanetId::MeanNode => (125.045, -1934.136, -0.053),
    };

    BodyPosition {
        lon: normalize_angle(base + rate * t),
        speed_lon: speed,
    }
}

/// Sidereal time used by the house and Midheaven formulas. Linear-only;
/// [`local_sidereal_time`] carries the full polynomial.
fn simple_sidereal_time(jd: f64) -> f64 {
    normalize_angle(280.460618 + 360.98564736629 * (jd - 2451545.0))
}

/// Twelve house cusps. `Equal` steps 30 degrees from the Ascendant; the
/// default `Placidus` variant skews the first and third quadrants by a
/// latitude term, which approximates the unequal division without the real
/// spherical trigonometry.
pub fn house_cusps(jd: f64, latitude: f64, longitude: f64, system: HouseSystem) -> [f64; 12] {
    let ascendant = normalize_angle(simple_sidereal_time(jd) + longitude);

    let mut houses = [0.0f64; 12];
    match system {
        HouseSystem::Equal => {
            for (i, cusp) in houses.iter_mut().enumerate() {
                *cusp = normalize_angle(ascendant + i as f64 * 30.0);
            }
        }
        HouseSystem::Placidus => {
            houses[0] = ascendant;
            let latitude_adjustment = latitude.to_radians().sin() * 5.0;
            for i in 1..12 {
                let mut increment = 30.0;
                if (1..=3).contains(&i) {
                    increment += latitude_adjustment;
                }
                if (7..=9).contains(&i) {
                    increment -= latitude_adjustment;
                }
                houses[i] = normalize_angle(houses[i - 1] + increment);
            }
        }
    }

    houses
}

/// Midheaven (MC). Sidereal-time based, independent of latitude.
pub fn midheaven(jd: f64, longitude: f64) -> f64 {
    normalize_angle(simple_sidereal_time(jd) + longitude)
}

/// Minimal angular separation between two longitudes plus an exactness hint.
pub fn aspect_angle(degree1: f64, degree2: f64) -> Separation {
    let mut angle = (degree1 - degree2).abs();
    if angle > 180.0 {
        angle = 360.0 - angle;
    }

    let mut exactness_hint: f64 = 0.0;
    for aspect_angle in CANONICAL_ASPECT_ANGLES {
        let difference = (angle - aspect_angle).abs();
        if difference <= SCAN_WINDOW_DEG {
            exactness_hint =
                exactness_hint.max(100.0 - (difference / SCAN_WINDOW_DEG) * 100.0);
        }
    }

    Separation {
        angle,
        exactness_hint,
    }
}

/// Approximate TT-UT difference in seconds
pub fn delta_t(year: i32) -> f64 {
    if year >= 2000 {
        let t = (year - 2000) as f64;
        63.86 + 0.3345 * t - 0.060374 * t * t
            + 0.0017275 * t * t * t
            + 0.000651814 * t * t * t * t
    } else {
        69.2
    }
}

/// Local sidereal time in degrees, full GMST polynomial
pub fn local_sidereal_time(jd: f64, longitude: f64) -> f64 {
    let t = (jd - 2451545.0) / 36525.0;
    let gmst = 280.46061837 + 360.98564736629 * (jd - 2451545.0) + 0.000387933 * t * t
        - t * t * t / 38710000.0;
    normalize_angle(gmst + longitude)
}

/// Reject coordinates outside the geographic ranges
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), EphemerisError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(EphemerisError::LatitudeOutOfRange { lat: latitude });
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(EphemerisError::LongitudeOutOfRange { lon: longitude });
    }
    Ok(())
}

/// Every planet position, the house cusps, and the chart angles for one
/// moment and place.
pub fn all_positions(
    dt: DateTime<Utc>,
    location: GeoLocation,
    system: HouseSystem,
) -> Result<Positions, EphemerisError> {
    validate_coordinates(location.lat, location.lon)?;

    let jd = julian_day(dt);

    let planets = PlanetId::ALL
        .iter()
        .map(|&planet| (planet, planet_longitude(planet, jd)))
        .collect();

    let cusps = house_cusps(jd, location.lat, location.lon, system);
    let ascendant = cusps[0];
    let mc = midheaven(jd, location.lon);

    Ok(Positions {
        planets,
        cusps,
        ascendant,
        midheaven: mc,
    })
}
