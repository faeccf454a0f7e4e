//! Domain model for a calculated natal chart.
//!
//! Everything here is an immutable value: derived properties (sign, degree
//! within sign, retrograde flag, dignities) are computed from the stored
//! longitude and speed on every call, never cached.

use crate::aspects::types::Aspect;
use crate::ephemeris::calc::{normalize_angle, validate_coordinates, EphemerisError};
use crate::ephemeris::types::{GeoLocation, PlanetId};
use crate::western::dignities;
use crate::western::signs::{degree_in_sign, Element, Modality, Sign};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Validated birth record. Construction is the only validation point;
/// a `BirthData` in hand is always in range.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthData {
    pub name: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub coordinates: GeoLocation,
}

impl BirthData {
    pub fn new(
        name: impl Into<String>,
        date_time: DateTime<Utc>,
        location: impl Into<String>,
        coordinates: GeoLocation,
    ) -> Result<Self, EphemerisError> {
        validate_coordinates(coordinates.lat, coordinates.lon)?;
        Ok(BirthData {
            name: name.into(),
            date_time,
            location: location.into(),
            coordinates,
        })
    }
}

/// The raw birth-data shape handed over by callers: ISO date and "HH:MM"
/// strings plus string coordinates. Parsing produces a validated
/// [`BirthData`] or fails before any chart work starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDataInput {
    pub name: String,
    pub date_of_birth: String,
    pub time_of_birth: String,
    pub location_of_birth: String,
    pub coordinates: CoordinateInput,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinateInput {
    pub lat: String,
    pub lon: String,
}

impl BirthDataInput {
    pub fn parse(&self) -> Result<BirthData, EphemerisError> {
        let date = NaiveDate::parse_from_str(self.date_of_birth.trim(), "%Y-%m-%d").map_err(
            |e| EphemerisError::InvalidMoment {
                value: self.date_of_birth.clone(),
                message: e.to_string(),
            },
        )?;
        let time = NaiveTime::parse_from_str(self.time_of_birth.trim(), "%H:%M").map_err(
            |e| EphemerisError::InvalidMoment {
                value: self.time_of_birth.clone(),
                message: e.to_string(),
            },
        )?;
        let date_time = DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(time), Utc);

        let lat: f64 =
            self.coordinates
                .lat
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| EphemerisError::InvalidCoordinate {
                    value: self.coordinates.lat.clone(),
                    message: e.to_string(),
                })?;
        let lon: f64 =
            self.coordinates
                .lon
                .trim()
                .parse()
                .map_err(|e: std::num::ParseFloatError| EphemerisError::InvalidCoordinate {
                    value: self.coordinates.lon.clone(),
                    message: e.to_string(),
                })?;

        BirthData::new(
            self.name.clone(),
            date_time,
            self.location_of_birth.clone(),
            GeoLocation { lat, lon },
        )
    }
}

/// Shared surface of anything placed on the wheel.
///
/// The derived accessors are computed from the stored longitude and speed
/// on every call.
pub trait CelestialBody {
    fn longitude(&self) -> f64;
    fn speed(&self) -> f64;
    fn display_name(&self) -> &'static str;
    fn glyph(&self) -> &'static str;

    fn sign(&self) -> Sign {
        Sign::from_longitude(self.longitude())
    }

    fn degree_in_sign(&self) -> f64 {
        degree_in_sign(self.longitude())
    }

    fn is_retrograde(&self) -> bool {
        self.speed() < 0.0
    }

    /// Traditional notation, e.g. `15°♌23'42"`
    fn formatted_degree(&self) -> String {
        let in_sign = self.degree_in_sign();
        let degrees = in_sign.floor();
        let minutes = ((in_sign - degrees) * 60.0).floor();
        let seconds = (((in_sign - degrees) * 60.0 - minutes) * 60.0).floor();
        format!(
            "{}°{}{:02}'{:02}\"",
            degrees as u32,
            self.sign().glyph(),
            minutes as u32,
            seconds as u32
        )
    }
}

/// A moving body with an identity and essential dignities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Planet {
    pub id: PlanetId,
    /// Ecliptic longitude in degrees [0, 360)
    pub longitude: f64,
    /// Daily motion in degrees per day, negative when retrograde
    pub speed: f64,
}

impl Planet {
    pub fn new(id: PlanetId, longitude: f64, speed: f64) -> Self {
        Planet {
            id,
            longitude,
            speed,
        }
    }

    /// Signs this planet rules
    pub fn ruler_of(&self) -> Vec<Sign> {
        dignities::ruled_signs(self.id)
    }

    pub fn is_in_ruling(&self) -> bool {
        dignities::is_in_ruling(self.id, self.sign())
    }

    pub fn is_in_exaltation(&self) -> bool {
        dignities::is_in_exaltation(self.id, self.sign())
    }

    pub fn is_in_detriment(&self) -> bool {
        dignities::is_in_detriment(self.id, self.sign())
    }

    pub fn is_in_fall(&self) -> bool {
        dignities::is_in_fall(self.id, self.sign())
    }
}

impl CelestialBody for Planet {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn speed(&self) -> f64 {
        self.speed
    }

    fn display_name(&self) -> &'static str {
        self.id.name()
    }

    fn glyph(&self) -> &'static str {
        self.id.glyph()
    }
}

/// Derived chart angles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartPointKind {
    Ascendant,
    Midheaven,
    Descendant,
    ImumCoeli,
}

impl ChartPointKind {
    pub const ALL: [ChartPointKind; 4] = [
        ChartPointKind::Ascendant,
        ChartPointKind::Midheaven,
        ChartPointKind::Descendant,
        ChartPointKind::ImumCoeli,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ChartPointKind::Ascendant => "Ascendant",
            ChartPointKind::Midheaven => "Midheaven",
            ChartPointKind::Descendant => "Descendant",
            ChartPointKind::ImumCoeli => "Imum Coeli",
        }
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            ChartPointKind::Ascendant => "Asc",
            ChartPointKind::Midheaven => "MC",
            ChartPointKind::Descendant => "Dsc",
            ChartPointKind::ImumCoeli => "IC",
        }
    }
}

/// A non-moving derived angle on the wheel; speed is always zero
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    pub kind: ChartPointKind,
    pub longitude: f64,
}

impl ChartPoint {
    pub fn new(kind: ChartPointKind, longitude: f64) -> Self {
        ChartPoint { kind, longitude }
    }
}

impl CelestialBody for ChartPoint {
    fn longitude(&self) -> f64 {
        self.longitude
    }

    fn speed(&self) -> f64 {
        0.0
    }

    fn display_name(&self) -> &'static str {
        self.kind.name()
    }

    fn glyph(&self) -> &'static str {
        self.kind.abbreviation()
    }
}

/// One of the twelve houses. Occupants are assigned once at chart-build
/// time and never recomputed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct House {
    pub number: u8,
    pub cusp: f64,
    occupants: Vec<PlanetId>,
}

impl House {
    pub fn new(number: u8, cusp: f64) -> Self {
        House {
            number,
            cusp,
            occupants: Vec::new(),
        }
    }

    pub fn sign(&self) -> Sign {
        Sign::from_longitude(self.cusp)
    }

    /// Traditional ruler of the cusp sign
    pub fn ruler(&self) -> &'static str {
        self.sign().ruler()
    }

    pub fn occupants(&self) -> &[PlanetId] {
        &self.occupants
    }

    pub(crate) fn add_occupant(&mut self, planet: PlanetId) {
        self.occupants.push(planet);
    }

    pub fn is_angular(&self) -> bool {
        matches!(self.number, 1 | 4 | 7 | 10)
    }

    pub fn is_succedent(&self) -> bool {
        matches!(self.number, 2 | 5 | 8 | 11)
    }

    pub fn is_cadent(&self) -> bool {
        matches!(self.number, 3 | 6 | 9 | 12)
    }
}

/// Three or more planets sharing a sign
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stellium {
    pub sign: Sign,
    pub planets: Vec<PlanetId>,
}

/// An opposition closed by two squares onto an apex planet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TSquare {
    pub apex: PlanetId,
    pub base: (PlanetId, PlanetId),
}

/// The chart aggregate: every planet, house, chart point, and aspect for
/// one birth record. Append-only while the calculator builds it, read-only
/// afterwards; a new birth record or configuration always produces a brand
/// new chart.
#[derive(Debug, Clone)]
pub struct NatalChart {
    birth_data: BirthData,
    planets: Vec<Planet>,
    houses: Vec<House>,
    chart_points: Vec<ChartPoint>,
    aspects: Vec<Aspect>,
}

impl NatalChart {
    pub fn new(birth_data: BirthData) -> Self {
        NatalChart {
            birth_data,
            planets: Vec::new(),
            houses: Vec::new(),
            chart_points: Vec::new(),
            aspects: Vec::new(),
        }
    }

    pub fn birth_data(&self) -> &BirthData {
        &self.birth_data
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn houses(&self) -> &[House] {
        &self.houses
    }

    pub fn chart_points(&self) -> &[ChartPoint] {
        &self.chart_points
    }

    pub fn aspects(&self) -> &[Aspect] {
        &self.aspects
    }

    pub fn add_house(&mut self, house: House) {
        self.houses.push(house);
    }

    /// Add a planet and assign it to a house against the houses added so
    /// far. Houses must therefore be added 1→12 before planets.
    pub fn add_planet(&mut self, planet: Planet) {
        self.assign_planet_to_house(&planet);
        self.planets.push(planet);
    }

    pub fn add_chart_point(&mut self, point: ChartPoint) {
        self.chart_points.push(point);
    }

    pub fn add_aspect(&mut self, aspect: Aspect) {
        self.aspects.push(aspect);
    }

    /// A planet belongs to house i when its longitude lies in
    /// [cusp_i, cusp_{i+1}) going around the circle; the lower bound is
    /// inclusive and the last house wraps to the first cusp.
    fn assign_planet_to_house(&mut self, planet: &Planet) {
        let lon = normalize_angle(planet.longitude);
        let count = self.houses.len();
        for i in 0..count {
            let cusp = self.houses[i].cusp;
            let next = self.houses[(i + 1) % count].cusp;
            let contains = if next <= cusp {
                lon >= cusp || lon < next
            } else {
                lon >= cusp && lon < next
            };
            if contains {
                self.houses[i].add_occupant(planet.id);
                break;
            }
        }
    }

    pub fn planet(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn house(&self, number: u8) -> Option<&House> {
        self.houses.iter().find(|h| h.number == number)
    }

    /// The house a planet was assigned to
    pub fn house_of(&self, id: PlanetId) -> Option<&House> {
        self.houses.iter().find(|h| h.occupants().contains(&id))
    }

    pub fn chart_point(&self, kind: ChartPointKind) -> Option<&ChartPoint> {
        self.chart_points.iter().find(|p| p.kind == kind)
    }

    pub fn aspects_for(&self, id: PlanetId) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.involves(id)).collect()
    }

    pub fn major_aspects(&self) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| a.is_major()).collect()
    }

    pub fn minor_aspects(&self) -> Vec<&Aspect> {
        self.aspects.iter().filter(|a| !a.is_major()).collect()
    }

    pub fn planets_in_sign(&self, sign: Sign) -> Vec<&Planet> {
        self.planets.iter().filter(|p| p.sign() == sign).collect()
    }

    pub fn planets_in_house(&self, number: u8) -> Vec<&Planet> {
        match self.house(number) {
            Some(house) => house
                .occupants()
                .iter()
                .filter_map(|&id| self.planet(id))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Element with the most planets. Ties resolve to the earlier element
    /// in the canonical Fire, Earth, Air, Water order.
    pub fn dominant_element(&self) -> Element {
        let mut counts = [0usize; 4];
        for planet in &self.planets {
            let element = planet.sign().element();
            if let Some(idx) = Element::ALL.iter().position(|&e| e == element) {
                counts[idx] += 1;
            }
        }
        let mut best = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        Element::ALL[best]
    }

    /// Modality with the most planets; canonical-order tie-break.
    pub fn dominant_modality(&self) -> Modality {
        let mut counts = [0usize; 3];
        for planet in &self.planets {
            let modality = planet.sign().modality();
            if let Some(idx) = Modality::ALL.iter().position(|&m| m == modality) {
                counts[idx] += 1;
            }
        }
        let mut best = 0;
        for i in 1..counts.len() {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        Modality::ALL[best]
    }

    /// Sign groups holding three or more planets, in zodiac order
    pub fn stelliums(&self) -> Vec<Stellium> {
        let mut stelliums = Vec::new();
        for sign in Sign::ALL {
            let members: Vec<PlanetId> = self
                .planets
                .iter()
                .filter(|p| p.sign() == sign)
                .map(|p| p.id)
                .collect();
            if members.len() >= 3 {
                stelliums.push(Stellium {
                    sign,
                    planets: members,
                });
            }
        }
        stelliums
    }

    /// T-squares: an opposition whose ends both square the same apex planet
    pub fn t_squares(&self) -> Vec<TSquare> {
        let squares: Vec<&Aspect> = self
            .aspects
            .iter()
            .filter(|a| a.kind == crate::aspects::types::AspectType::Square)
            .collect();
        let oppositions: Vec<&Aspect> = self
            .aspects
            .iter()
            .filter(|a| a.kind == crate::aspects::types::AspectType::Opposition)
            .collect();

        let mut t_squares = Vec::new();
        for opposition in &oppositions {
            for square1 in &squares {
                for square2 in &squares {
                    if (square1.a == opposition.a
                        && square2.a == opposition.b
                        && square1.b == square2.b)
                        || (square1.a == opposition.b
                            && square2.a == opposition.a
                            && square1.b == square2.b)
                    {
                        t_squares.push(TSquare {
                            apex: square1.b,
                            base: (opposition.a, opposition.b),
                        });
                    }
                }
            }
        }
        t_squares
    }

    /// Grand trines: every trine triple touching exactly three distinct
    /// planets (exhaustive over the trine aspect list)
    pub fn grand_trines(&self) -> Vec<Vec<PlanetId>> {
        let trines: Vec<&Aspect> = self
            .aspects
            .iter()
            .filter(|a| a.kind == crate::aspects::types::AspectType::Trine)
            .collect();

        let mut grand_trines = Vec::new();
        for i in 0..trines.len() {
            for j in (i + 1)..trines.len() {
                for k in (j + 1)..trines.len() {
                    let mut unique: Vec<PlanetId> = Vec::new();
                    for id in [
                        trines[i].a,
                        trines[i].b,
                        trines[j].a,
                        trines[j].b,
                        trines[k].a,
                        trines[k].b,
                    ] {
                        if !unique.contains(&id) {
                            unique.push(id);
                        }
                    }
                    if unique.len() == 3 {
                        grand_trines.push(unique);
                    }
                }
            }
        }
        grand_trines
    }
}
