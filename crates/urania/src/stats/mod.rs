//! Statistical summaries over a finished chart. Every product here is a
//! pure read-only function of the [`NatalChart`].

pub mod distributions;
pub mod report;

use crate::aspects::types::{Aspect, AspectType};
use crate::chart::types::{CelestialBody, NatalChart, Stellium};
use crate::ephemeris::types::PlanetId;
use crate::western::signs::{Element, Modality, Polarity, Sign};
use crate::stats::distributions::{
    AspectCounts, ElementDistribution, HemisphereDistribution, HouseDistribution,
    ModalityDistribution, PlanetCounts, PolarityDistribution, QuadrantDistribution,
    SpecialPatterns,
};
use serde::Serialize;
use std::collections::BTreeMap;

/// Symmetric planet-by-planet aspect matrix; the diagonal stays empty.
/// Rows and columns follow the chart's planet order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectGrid {
    planets: Vec<PlanetId>,
    cells: Vec<Vec<Option<Aspect>>>,
}

impl AspectGrid {
    pub fn planets(&self) -> &[PlanetId] {
        &self.planets
    }

    pub fn at(&self, row: usize, col: usize) -> Option<&Aspect> {
        self.cells.get(row)?.get(col)?.as_ref()
    }

    pub fn get(&self, a: PlanetId, b: PlanetId) -> Option<&Aspect> {
        let row = self.planets.iter().position(|&p| p == a)?;
        let col = self.planets.iter().position(|&p| p == b)?;
        self.at(row, col)
    }
}

/// Everything the statistics engine can say about one chart
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartStatistics {
    pub element_distribution: ElementDistribution,
    pub modality_distribution: ModalityDistribution,
    pub polarity_distribution: PolarityDistribution,
    pub house_distribution: HouseDistribution,
    pub quadrant_distribution: QuadrantDistribution,
    pub hemisphere_distribution: HemisphereDistribution,
    pub aspect_grid: AspectGrid,
    pub stelliums: Vec<Stellium>,
    pub dominant_element: Element,
    pub dominant_modality: Modality,
    pub dominant_polarity: Polarity,
    pub planet_counts: PlanetCounts,
    pub aspect_counts: AspectCounts,
    pub special_patterns: SpecialPatterns,
}

pub struct ChartStats<'a> {
    chart: &'a NatalChart,
}

impl<'a> ChartStats<'a> {
    pub fn new(chart: &'a NatalChart) -> Self {
        ChartStats { chart }
    }

    pub fn chart(&self) -> &NatalChart {
        self.chart
    }

    pub fn element_distribution(&self) -> ElementDistribution {
        let mut distribution = ElementDistribution::default();
        for planet in self.chart.planets() {
            match planet.sign().element() {
                Element::Fire => distribution.fire += 1,
                Element::Earth => distribution.earth += 1,
                Element::Air => distribution.air += 1,
                Element::Water => distribution.water += 1,
            }
        }
        distribution
    }

    pub fn modality_distribution(&self) -> ModalityDistribution {
        let mut distribution = ModalityDistribution::default();
        for planet in self.chart.planets() {
            match planet.sign().modality() {
                Modality::Cardinal => distribution.cardinal += 1,
                Modality::Fixed => distribution.fixed += 1,
                Modality::Mutable => distribution.mutable += 1,
            }
        }
        distribution
    }

    pub fn polarity_distribution(&self) -> PolarityDistribution {
        let mut distribution = PolarityDistribution::default();
        for planet in self.chart.planets() {
            match planet.sign().polarity() {
                Polarity::Positive => distribution.positive += 1,
                Polarity::Negative => distribution.negative += 1,
            }
        }
        distribution
    }

    /// Planet counts bucketed by the houses' angular/succedent/cadent class
    pub fn house_distribution(&self) -> HouseDistribution {
        let mut distribution = HouseDistribution::default();
        for house in self.chart.houses() {
            let count = house.occupants().len();
            if house.is_angular() {
                distribution.angular += count;
            } else if house.is_succedent() {
                distribution.succedent += count;
            } else if house.is_cadent() {
                distribution.cadent += count;
            }
        }
        distribution
    }

    pub fn quadrant_distribution(&self) -> QuadrantDistribution {
        let mut distribution = QuadrantDistribution::default();
        for house in self.chart.houses() {
            let count = house.occupants().len();
            match house.number {
                1..=3 => distribution.first += count,
                4..=6 => distribution.second += count,
                7..=9 => distribution.third += count,
                10..=12 => distribution.fourth += count,
                _ => {}
            }
        }
        distribution
    }

    /// Each hemisphere is a fixed six-house set; the four sets overlap, so
    /// the totals sum to twice the planet count.
    pub fn hemisphere_distribution(&self) -> HemisphereDistribution {
        let mut distribution = HemisphereDistribution::default();
        for house in self.chart.houses() {
            let count = house.occupants().len();
            if matches!(house.number, 10 | 11 | 12 | 1 | 2 | 3) {
                distribution.eastern += count;
            }
            if matches!(house.number, 4..=9) {
                distribution.western += count;
            }
            if matches!(house.number, 7..=12) {
                distribution.northern += count;
            }
            if matches!(house.number, 1..=6) {
                distribution.southern += count;
            }
        }
        distribution
    }

    pub fn aspect_grid(&self) -> AspectGrid {
        let planets: Vec<PlanetId> = self.chart.planets().iter().map(|p| p.id).collect();
        let n = planets.len();
        let mut cells: Vec<Vec<Option<Aspect>>> = vec![vec![None; n]; n];

        for aspect in self.chart.aspects() {
            let row = planets.iter().position(|&p| p == aspect.a);
            let col = planets.iter().position(|&p| p == aspect.b);
            if let (Some(row), Some(col)) = (row, col) {
                cells[row][col] = Some(aspect.clone());
                cells[col][row] = Some(aspect.clone());
            }
        }

        AspectGrid { planets, cells }
    }

    pub fn stelliums(&self) -> Vec<Stellium> {
        self.chart.stelliums()
    }

    pub fn dominant_element(&self) -> Element {
        self.chart.dominant_element()
    }

    pub fn dominant_modality(&self) -> Modality {
        self.chart.dominant_modality()
    }

    /// Polarity with the most planets; Positive wins ties.
    pub fn dominant_polarity(&self) -> Polarity {
        let distribution = self.polarity_distribution();
        if distribution.negative > distribution.positive {
            Polarity::Negative
        } else {
            Polarity::Positive
        }
    }

    pub fn planet_counts(&self) -> PlanetCounts {
        let mut by_sign: BTreeMap<String, usize> = Sign::ALL
            .iter()
            .map(|s| (s.name().to_string(), 0))
            .collect();
        let mut by_house: BTreeMap<u8, usize> = (1..=12).map(|n| (n, 0)).collect();

        for planet in self.chart.planets() {
            if let Some(count) = by_sign.get_mut(planet.sign().name()) {
                *count += 1;
            }
            if let Some(house) = self.chart.house_of(planet.id) {
                if let Some(count) = by_house.get_mut(&house.number) {
                    *count += 1;
                }
            }
        }

        PlanetCounts {
            by_sign,
            by_house,
            by_element: self.element_distribution(),
            by_modality: self.modality_distribution(),
        }
    }

    pub fn aspect_counts(&self) -> AspectCounts {
        let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
        let mut major = 0;
        let mut minor = 0;

        for aspect in self.chart.aspects() {
            *by_type.entry(aspect.kind.name().to_string()).or_insert(0) += 1;
            if aspect.is_major() {
                major += 1;
            } else {
                minor += 1;
            }
        }

        AspectCounts {
            major,
            minor,
            by_type,
        }
    }

    /// Heuristic presence flag: 1 when the chart holds at least four
    /// squares and two oppositions anywhere, without verifying they close
    /// into a single four-planet figure.
    pub fn grand_crosses(&self) -> usize {
        let squares = self.count_aspects_of(AspectType::Square);
        let oppositions = self.count_aspects_of(AspectType::Opposition);
        if squares >= 4 && oppositions >= 2 {
            1
        } else {
            0
        }
    }

    /// Heuristic presence flag: 1 when at least one sextile and two
    /// quincunxes exist anywhere in the chart.
    pub fn yods(&self) -> usize {
        let sextiles = self.count_aspects_of(AspectType::Sextile);
        let quincunxes = self.count_aspects_of(AspectType::Quincunx);
        if sextiles >= 1 && quincunxes >= 2 {
            1
        } else {
            0
        }
    }

    fn count_aspects_of(&self, kind: AspectType) -> usize {
        self.chart
            .aspects()
            .iter()
            .filter(|a| a.kind == kind)
            .count()
    }

    pub fn special_patterns(&self) -> SpecialPatterns {
        SpecialPatterns {
            grand_trines: self.chart.grand_trines().len(),
            t_squares: self.chart.t_squares().len(),
            grand_crosses: self.grand_crosses(),
            yods: self.yods(),
        }
    }

    pub fn statistics(&self) -> ChartStatistics {
        ChartStatistics {
            element_distribution: self.element_distribution(),
            modality_distribution: self.modality_distribution(),
            polarity_distribution: self.polarity_distribution(),
            house_distribution: self.house_distribution(),
            quadrant_distribution: self.quadrant_distribution(),
            hemisphere_distribution: self.hemisphere_distribution(),
            aspect_grid: self.aspect_grid(),
            stelliums: self.stelliums(),
            dominant_element: self.dominant_element(),
            dominant_modality: self.dominant_modality(),
            dominant_polarity: self.dominant_polarity(),
            planet_counts: self.planet_counts(),
            aspect_counts: self.aspect_counts(),
            special_patterns: self.special_patterns(),
        }
    }

    /// Deterministic plain-text report
    pub fn report(&self) -> String {
        report::render_report(self)
    }

    /// HTML aspect-grid table
    pub fn aspect_table_html(&self) -> String {
        report::render_aspect_table(self)
    }
}
