//! Chart calculator: orchestrates the ephemeris primitives and the domain
//! model into one fully populated [`NatalChart`].

use crate::aspects::calculator::AspectCalculator;
use crate::chart::config::ChartConfig;
use crate::chart::types::{
    BirthData, CelestialBody, ChartPoint, ChartPointKind, House, NatalChart, Planet,
};
use crate::ephemeris::calc::{all_positions, normalize_angle, validate_coordinates, EphemerisError};
use thiserror::Error;

/// Failure taxonomy of chart construction. Input errors are raised before
/// any chart object exists; calculation errors carry their originating
/// cause. There is no partial-success mode.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("invalid birth data: {0}")]
    InvalidInput(#[from] EphemerisError),
    #[error("chart calculation failed: {message}")]
    Calculation { message: String },
}

/// A calculated chart plus the configuration that produced it.
///
/// Construction either yields a complete, internally consistent chart or
/// fails atomically — no partially built chart is ever exposed.
#[derive(Debug, Clone)]
pub struct ChartData {
    chart: NatalChart,
    config: ChartConfig,
}

impl ChartData {
    pub fn new(birth_data: BirthData, config: ChartConfig) -> Result<Self, ChartError> {
        validate_coordinates(birth_data.coordinates.lat, birth_data.coordinates.lon)?;

        let positions = all_positions(
            birth_data.date_time,
            birth_data.coordinates,
            config.house_system,
        )?;

        let mut chart = NatalChart::new(birth_data);

        // Houses go in 1→12 first so every planet lands in a populated wheel.
        for (i, cusp) in positions.cusps.iter().enumerate() {
            chart.add_house(House::new((i + 1) as u8, *cusp));
        }

        for (id, position) in &positions.planets {
            if config.display.show_planets.shows(*id) {
                chart.add_planet(Planet::new(*id, position.lon, position.speed_lon));
            }
        }

        chart.add_chart_point(ChartPoint::new(
            ChartPointKind::Ascendant,
            positions.ascendant,
        ));
        chart.add_chart_point(ChartPoint::new(
            ChartPointKind::Midheaven,
            positions.midheaven,
        ));
        chart.add_chart_point(ChartPoint::new(
            ChartPointKind::Descendant,
            normalize_angle(positions.ascendant + 180.0),
        ));
        chart.add_chart_point(ChartPoint::new(
            ChartPointKind::ImumCoeli,
            normalize_angle(positions.midheaven + 180.0),
        ));

        let aspects = AspectCalculator::new().compute(chart.planets(), &config);
        for aspect in aspects {
            chart.add_aspect(aspect);
        }

        // House coverage invariant: every planet sits in exactly one house.
        for planet in chart.planets() {
            if chart.house_of(planet.id).is_none() {
                return Err(ChartError::Calculation {
                    message: format!(
                        "planet {} was not assigned to any house",
                        planet.id.name()
                    ),
                });
            }
        }

        log::debug!(
            "calculated chart for {}: {} planets, {} aspects",
            chart.birth_data().name,
            chart.planets().len(),
            chart.aspects().len()
        );

        Ok(ChartData { chart, config })
    }

    pub fn chart(&self) -> &NatalChart {
        &self.chart
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The chart-data JSON shape consumed by presentation layers.
    pub fn to_json(&self) -> serde_json::Value {
        let chart = &self.chart;
        let birth = chart.birth_data();

        let planets: Vec<serde_json::Value> = chart
            .planets()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "name": p.id.name(),
                    "degree": p.longitude,
                    "sign": p.sign().name(),
                    "degreeInSign": p.degree_in_sign(),
                    "house": chart.house_of(p.id).map(|h| h.number).unwrap_or(0),
                    "isRetrograde": p.is_retrograde(),
                    "speed": p.speed,
                })
            })
            .collect();

        let houses: Vec<serde_json::Value> = chart
            .houses()
            .iter()
            .map(|h| {
                serde_json::json!({
                    "number": h.number,
                    "cusp": h.cusp,
                    "sign": h.sign().name(),
                    "ruler": h.ruler(),
                    "planets": h.occupants().iter().map(|id| id.name()).collect::<Vec<_>>(),
                })
            })
            .collect();

        let chart_points: Vec<serde_json::Value> = chart
            .chart_points()
            .iter()
            .map(|p| {
                serde_json::json!({
                    "type": p.kind.name(),
                    "degree": p.longitude,
                    "sign": p.sign().name(),
                })
            })
            .collect();

        let aspects: Vec<serde_json::Value> = chart
            .aspects()
            .iter()
            .map(|a| {
                serde_json::json!({
                    "planet1": a.a.name(),
                    "planet2": a.b.name(),
                    "type": a.kind.name(),
                    "orb": a.orb,
                    "exactness": a.exactness,
                    "isMajor": a.is_major(),
                })
            })
            .collect();

        let stelliums: Vec<serde_json::Value> = chart
            .stelliums()
            .iter()
            .map(|s| {
                serde_json::json!({
                    "sign": s.sign.name(),
                    "planets": s.planets.iter().map(|id| id.name()).collect::<Vec<_>>(),
                })
            })
            .collect();

        serde_json::json!({
            "birthData": {
                "name": birth.name,
                "dateTime": birth.date_time.to_rfc3339(),
                "location": birth.location,
                "coordinates": { "lat": birth.coordinates.lat, "lon": birth.coordinates.lon },
            },
            "planets": planets,
            "houses": houses,
            "chartPoints": chart_points,
            "aspects": aspects,
            "summary": {
                "dominantElement": chart.dominant_element().name(),
                "dominantModality": chart.dominant_modality().name(),
                "stelliums": stelliums,
                "tSquares": chart.t_squares().len(),
                "grandTrines": chart.grand_trines().len(),
            },
        })
    }
}
