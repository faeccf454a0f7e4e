use crate::ephemeris::types::PlanetId;
use serde::{Deserialize, Serialize};

/// The nine aspect types the engine recognizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Opposition,
    Semisextile,
    Semisquare,
    Sesquiquadrate,
    Quincunx,
}

impl AspectType {
    /// Canonical order: the five majors first, then the minors. Detection
    /// walks this array so aspect lists are deterministic.
    pub const ALL: [AspectType; 9] = [
        AspectType::Conjunction,
        AspectType::Sextile,
        AspectType::Square,
        AspectType::Trine,
        AspectType::Opposition,
        AspectType::Semisextile,
        AspectType::Semisquare,
        AspectType::Sesquiquadrate,
        AspectType::Quincunx,
    ];

    /// Exact angle in degrees
    pub fn angle(self) -> f64 {
        match self {
            AspectType::Conjunction => 0.0,
            AspectType::Sextile => 60.0,
            AspectType::Square => 90.0,
            AspectType::Trine => 120.0,
            AspectType::Opposition => 180.0,
            AspectType::Semisextile => 30.0,
            AspectType::Semisquare => 45.0,
            AspectType::Sesquiquadrate => 135.0,
            AspectType::Quincunx => 150.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AspectType::Conjunction => "Conjunction",
            AspectType::Sextile => "Sextile",
            AspectType::Square => "Square",
            AspectType::Trine => "Trine",
            AspectType::Opposition => "Opposition",
            AspectType::Semisextile => "Semisextile",
            AspectType::Semisquare => "Semisquare",
            AspectType::Sesquiquadrate => "Sesquiquadrate",
            AspectType::Quincunx => "Quincunx",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            AspectType::Conjunction => "☌",
            AspectType::Sextile => "⚹",
            AspectType::Square => "□",
            AspectType::Trine => "△",
            AspectType::Opposition => "☍",
            AspectType::Semisextile => "⚺",
            AspectType::Semisquare => "∠",
            AspectType::Sesquiquadrate => "⚼",
            AspectType::Quincunx => "⚻",
        }
    }

    pub fn is_major(self) -> bool {
        matches!(
            self,
            AspectType::Conjunction
                | AspectType::Sextile
                | AspectType::Square
                | AspectType::Trine
                | AspectType::Opposition
        )
    }
}

/// An undirected aspect relation between two planets.
///
/// Stored once per (pair, type); the same pair may carry records for
/// several types when its separation sits within more than one configured
/// orb.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Aspect {
    pub a: PlanetId,
    pub b: PlanetId,
    pub kind: AspectType,
    /// Deviation from the exact aspect angle, in degrees
    pub orb: f64,
    /// 100 at the exact angle, falling linearly to 0 at the allowed orb
    pub exactness: f64,
    /// Whether the faster body is closing on the aspect (simplified:
    /// compares absolute speeds)
    pub applying: bool,
}

impl Aspect {
    /// Build an aspect from a measured deviation and the orb the
    /// configuration allowed for this type.
    pub fn new(
        a: PlanetId,
        b: PlanetId,
        kind: AspectType,
        deviation: f64,
        allowed_orb: f64,
        applying: bool,
    ) -> Self {
        let exactness = if allowed_orb > 0.0 {
            (100.0 - (deviation / allowed_orb) * 100.0).max(0.0)
        } else {
            0.0
        };

        Aspect {
            a,
            b,
            kind,
            orb: deviation,
            exactness,
            applying,
        }
    }

    pub fn is_major(&self) -> bool {
        self.kind.is_major()
    }

    pub fn involves(&self, planet: PlanetId) -> bool {
        self.a == planet || self.b == planet
    }
}
