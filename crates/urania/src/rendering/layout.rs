//! Radial placement of planet glyphs with collision avoidance.
//!
//! Greedy and order-dependent: planets are processed in ascending
//! longitude, and each one steps inward in fixed decrements until it clears
//! everything already placed (or hits the inner bound). Not globally
//! optimal; kept exactly this way for rendering parity.

use crate::chart::types::Planet;
use crate::ephemeris::calc::normalize_angle;
use crate::ephemeris::types::PlanetId;

/// Two glyphs conflict when they sit closer than this in angle...
pub const MIN_ANGLE_SEPARATION_DEG: f64 = 12.0;
/// ...and closer than this in radius.
pub const MIN_RADIUS_SEPARATION_PX: f64 = 15.0;
/// Inward step per avoidance iteration.
pub const RADIUS_STEP_PX: f64 = 12.0;

/// A planet glyph's resolved wheel position. The angle is already rotated
/// relative to the Ascendant.
#[derive(Debug, Clone, Copy)]
pub struct PlacedBody {
    pub id: PlanetId,
    pub angle: f64,
    pub radius: f64,
}

pub fn place_planets(
    planets: &[Planet],
    ascendant: f64,
    base_radius: f64,
    ring_thickness: f64,
) -> Vec<PlacedBody> {
    let mut sorted: Vec<&Planet> = planets.iter().collect();
    sorted.sort_by(|a, b| {
        a.longitude
            .partial_cmp(&b.longitude)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut placed: Vec<PlacedBody> = Vec::with_capacity(sorted.len());

    for planet in sorted {
        let angle = planet.longitude - ascendant;

        let mut radius = base_radius;
        let mut has_collision = true;
        while has_collision && radius > base_radius - ring_thickness {
            has_collision = placed.iter().any(|other| {
                let diff = normalize_angle(angle - other.angle);
                let min_angle_diff = diff.min(360.0 - diff);
                min_angle_diff < MIN_ANGLE_SEPARATION_DEG
                    && (radius - other.radius).abs() < MIN_RADIUS_SEPARATION_PX
            });
            if has_collision {
                radius -= RADIUS_STEP_PX;
            }
        }

        placed.push(PlacedBody {
            id: planet.id,
            angle,
            radius,
        });
    }

    placed
}
