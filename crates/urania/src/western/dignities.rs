//! Essential dignities for Western astrology.
//!
//! Rulership, exaltation, detriment, and fall are derived by
//! cross-referencing the sign table against a body's display name rather
//! than from a second per-planet table, so the two can never disagree.

use crate::ephemeris::types::PlanetId;
use crate::western::signs::Sign;

/// Signs ruled by a planet (traditional rulerships; Mars rules both Aries
/// and Scorpio, for example).
pub fn ruled_signs(planet: PlanetId) -> Vec<Sign> {
    Sign::ALL
        .iter()
        .copied()
        .filter(|sign| sign.ruler() == planet.name())
        .collect()
}

/// Is the planet standing in a sign it rules?
pub fn is_in_ruling(planet: PlanetId, sign: Sign) -> bool {
    sign.ruler() == planet.name()
}

pub fn is_in_exaltation(planet: PlanetId, sign: Sign) -> bool {
    sign.exaltation() == planet.name()
}

pub fn is_in_detriment(planet: PlanetId, sign: Sign) -> bool {
    sign.detriment() == planet.name()
}

pub fn is_in_fall(planet: PlanetId, sign: Sign) -> bool {
    sign.fall() == planet.name()
}
