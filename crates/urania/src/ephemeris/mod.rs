pub mod calc;
pub mod types;

pub use calc::{
    all_positions, aspect_angle, delta_t, house_cusps, julian_day, local_sidereal_time,
    midheaven, normalize_angle, planet_longitude, validate_coordinates, EphemerisError,
};
pub use types::{BodyPosition, GeoLocation, HouseSystem, PlanetId, Positions, Separation};
