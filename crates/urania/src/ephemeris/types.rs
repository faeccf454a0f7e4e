use serde::{Deserialize, Serialize};

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// The bodies this engine computes positions for.
///
/// The numeric ids follow the Swiss Ephemeris convention (Sun=0 .. Pluto=9,
/// mean lunar node=10) even though positions come from the internal
/// mean-element model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PlanetId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    MeanNode,
}

impl PlanetId {
    /// Canonical iteration order. Every per-planet loop in the engine walks
    /// this array so results are deterministic.
    pub const ALL: [PlanetId; 11] = [
        PlanetId::Sun,
        PlanetId::Moon,
        PlanetId::Mercury,
        PlanetId::Venus,
        PlanetId::Mars,
        PlanetId::Jupiter,
        PlanetId::Saturn,
        PlanetId::Uranus,
        PlanetId::Neptune,
        PlanetId::Pluto,
        PlanetId::MeanNode,
    ];

    pub fn id(self) -> u8 {
        match self {
            PlanetId::Sun => 0,
            PlanetId::Moon => 1,
            PlanetId::Mercury => 2,
            PlanetId::Venus => 3,
            PlanetId::Mars => 4,
            PlanetId::Jupiter => 5,
            PlanetId::Saturn => 6,
            PlanetId::Uranus => 7,
            PlanetId::Neptune => 8,
            PlanetId::Pluto => 9,
            PlanetId::MeanNode => 10,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanetId::Sun => "Sun",
            PlanetId::Moon => "Moon",
            PlanetId::Mercury => "Mercury",
            PlanetId::Venus => "Venus",
            PlanetId::Mars => "Mars",
            PlanetId::Jupiter => "Jupiter",
            PlanetId::Saturn => "Saturn",
            PlanetId::Uranus => "Uranus",
            PlanetId::Neptune => "Neptune",
            PlanetId::Pluto => "Pluto",
            PlanetId::MeanNode => "North Node",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            PlanetId::Sun => "☉",
            PlanetId::Moon => "☽",
            PlanetId::Mercury => "☿",
            PlanetId::Venus => "♀",
            PlanetId::Mars => "♂",
            PlanetId::Jupiter => "♃",
            PlanetId::Saturn => "♄",
            PlanetId::Uranus => "♅",
            PlanetId::Neptune => "♆",
            PlanetId::Pluto => "♇",
            PlanetId::MeanNode => "☊",
        }
    }
}

/// House division scheme used for cusp calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HouseSystem {
    /// Latitude-adjusted unequal division. A documented approximation of
    /// Placidus, not the full trigonometric construction.
    #[default]
    Placidus,
    /// Twelve 30-degree houses from the Ascendant.
    Equal,
}

/// Computed position of a single body
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Ecliptic longitude in degrees [0, 360)
    pub lon: f64,
    /// Daily motion in longitude (degrees per day, negative = retrograde)
    pub speed_lon: f64,
}

/// Angular separation between two ecliptic longitudes
#[derive(Debug, Clone, Copy)]
pub struct Separation {
    /// Minimal separation in degrees [0, 180]
    pub angle: f64,
    /// How close the separation sits to the nearest canonical aspect angle,
    /// as a percentage over a fixed 10-degree scanning window. Informational
    /// only; aspect detection re-checks against configured orbs.
    pub exactness_hint: f64,
}

/// Complete position set for one moment and place
#[derive(Debug, Clone)]
pub struct Positions {
    /// Planet positions in canonical [`PlanetId::ALL`] order
    pub planets: Vec<(PlanetId, BodyPosition)>,
    /// Twelve house cusps, index 0 = first house
    pub cusps: [f64; 12],
    pub ascendant: f64,
    pub midheaven: f64,
}
