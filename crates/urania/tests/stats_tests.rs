use chrono::{TimeZone, Utc};
use urania::aspects::AspectCalculator;
use urania::chart::config::{AspectToggles, ChartConfig};
use urania::chart::data::ChartData;
use urania::chart::types::{BirthData, House, NatalChart, Planet};
use urania::ephemeris::{GeoLocation, PlanetId};
use urania::ChartStats;

fn birth_data() -> BirthData {
    BirthData::new(
        "Stats Subject",
        Utc.with_ymd_and_hms(1975, 3, 21, 4, 0, 0).unwrap(),
        "Reykjavik",
        GeoLocation {
            lat: 64.15,
            lon: -21.94,
        },
    )
    .unwrap()
}

fn crafted_chart(planets: &[(PlanetId, f64)], config: &ChartConfig) -> NatalChart {
    let mut chart = NatalChart::new(birth_data());
    for i in 0..12u8 {
        chart.add_house(House::new(i + 1, i as f64 * 30.0));
    }
    for &(id, lon) in planets {
        chart.add_planet(Planet::new(id, lon, 1.0));
    }
    let aspects = AspectCalculator::new().compute(chart.planets(), config);
    for aspect in aspects {
        chart.add_aspect(aspect);
    }
    chart
}

#[test]
fn test_element_distribution_sums_to_planet_count() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());

    let elements = stats.element_distribution();
    assert_eq!(elements.total(), data.chart().planets().len());

    let modalities = stats.modality_distribution();
    assert_eq!(modalities.total(), data.chart().planets().len());
}

#[test]
fn test_cardinal_cross_distributions() {
    // Four planets at the cardinal points: one per element, all cardinal.
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),     // Aries
            (PlanetId::Moon, 90.0),   // Cancer
            (PlanetId::Mars, 180.0),  // Libra
            (PlanetId::Venus, 270.0), // Capricorn
        ],
        &ChartConfig::default(),
    );
    let stats = ChartStats::new(&chart);

    let elements = stats.element_distribution();
    assert_eq!(
        (elements.fire, elements.earth, elements.air, elements.water),
        (1, 1, 1, 1)
    );

    let modalities = stats.modality_distribution();
    assert_eq!(modalities.cardinal, 4);
    assert_eq!(modalities.fixed, 0);

    let polarity = stats.polarity_distribution();
    assert_eq!(polarity.positive, 2);
    assert_eq!(polarity.negative, 2);
}

#[test]
fn test_grand_cross_heuristic_fires_on_counts_alone() {
    // 0/90/180/270 produces four squares and two oppositions.
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),
            (PlanetId::Moon, 90.0),
            (PlanetId::Mars, 180.0),
            (PlanetId::Venus, 270.0),
        ],
        &ChartConfig::default(),
    );
    let stats = ChartStats::new(&chart);

    let squares = chart
        .aspects()
        .iter()
        .filter(|a| a.kind == urania::aspects::AspectType::Square)
        .count();
    let oppositions = chart
        .aspects()
        .iter()
        .filter(|a| a.kind == urania::aspects::AspectType::Opposition)
        .count();
    assert_eq!(squares, 4);
    assert_eq!(oppositions, 2);

    assert_eq!(stats.grand_crosses(), 1);
}

#[test]
fn test_grand_cross_heuristic_counts_disjoint_aspects_too() {
    // Eight planets forming two separate T-square-ish clusters: enough
    // squares and oppositions chart-wide without one closed figure. The
    // flag still fires; that imprecision is the documented behavior.
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),
            (PlanetId::Moon, 90.0),
            (PlanetId::Mercury, 180.0),
            (PlanetId::Venus, 40.0),
            (PlanetId::Mars, 130.0),
            (PlanetId::Jupiter, 220.0),
            (PlanetId::Saturn, 310.0),
        ],
        &ChartConfig::default(),
    );
    let stats = ChartStats::new(&chart);

    assert_eq!(stats.grand_crosses(), 1);
}

#[test]
fn test_yod_heuristic() {
    let mut config = ChartConfig::default();
    config.display.show_aspects = AspectToggles::all();

    // Sextile plus two quincunxes to a focal planet.
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),
            (PlanetId::Moon, 60.0),
            (PlanetId::Mars, 210.0),
        ],
        &config,
    );
    let stats = ChartStats::new(&chart);
    assert_eq!(stats.yods(), 1);

    // Without the quincunxes there is no yod.
    let chart = crafted_chart(&[(PlanetId::Sun, 0.0), (PlanetId::Moon, 60.0)], &config);
    let stats = ChartStats::new(&chart);
    assert_eq!(stats.yods(), 0);
}

#[test]
fn test_aspect_grid_is_symmetric_with_empty_diagonal() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());
    let grid = stats.aspect_grid();

    let n = grid.planets().len();
    assert_eq!(n, data.chart().planets().len());

    for i in 0..n {
        assert!(grid.at(i, i).is_none());
        for j in 0..n {
            match (grid.at(i, j), grid.at(j, i)) {
                (Some(a), Some(b)) => assert_eq!(a.kind, b.kind),
                (None, None) => {}
                _ => panic!("grid asymmetric at ({}, {})", i, j),
            }
        }
    }
}

#[test]
fn test_house_quadrant_and_hemisphere_distributions() {
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 15.0),   // house 1, angular
            (PlanetId::Moon, 45.0),  // house 2, succedent
            (PlanetId::Mars, 195.0), // house 7, angular
        ],
        &ChartConfig::default(),
    );
    let stats = ChartStats::new(&chart);

    let houses = stats.house_distribution();
    assert_eq!(houses.angular, 2);
    assert_eq!(houses.succedent, 1);
    assert_eq!(houses.cadent, 0);

    let quadrants = stats.quadrant_distribution();
    assert_eq!(quadrants.first, 2);
    assert_eq!(quadrants.third, 1);

    let hemispheres = stats.hemisphere_distribution();
    assert_eq!(hemispheres.eastern, 2);
    assert_eq!(hemispheres.western, 1);
    assert_eq!(hemispheres.northern, 1);
    assert_eq!(hemispheres.southern, 2);
}

#[test]
fn test_planet_counts_by_sign_and_house() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());
    let counts = stats.planet_counts();

    let by_sign_total: usize = counts.by_sign.values().sum();
    let by_house_total: usize = counts.by_house.values().sum();
    assert_eq!(by_sign_total, 11);
    assert_eq!(by_house_total, 11);
    assert_eq!(counts.by_sign.len(), 12);
    assert_eq!(counts.by_house.len(), 12);
}

#[test]
fn test_report_is_deterministic_and_complete() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());

    let report = stats.report();
    assert_eq!(report, stats.report());

    assert!(report.starts_with("=== NATAL CHART STATISTICAL ANALYSIS ==="));
    assert!(report.contains("Chart for: Stats Subject"));
    assert!(report.contains("Birth Date: 1975-03-21"));
    assert!(report.contains("Birth Time: 04:00:00"));
    assert!(report.contains("ELEMENT DISTRIBUTION:"));
    assert!(report.contains("MODALITY DISTRIBUTION:"));
    assert!(report.contains("HOUSE DISTRIBUTION:"));
    assert!(report.contains("ASPECT SUMMARY:"));
    assert!(report.contains("Dominant:"));
}

#[test]
fn test_aspect_table_html_structure() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());

    let html = stats.aspect_table_html();
    assert!(html.starts_with("<table"));
    assert!(html.ends_with("</table>"));
    assert!(html.contains("<th>Sun</th>"));
    assert!(html.contains("<th>North Node</th>"));

    // One diagonal cell per planet.
    let diagonal_cells = html.matches("<td>-</td>").count();
    assert_eq!(diagonal_cells, data.chart().planets().len());
}

#[test]
fn test_statistics_aggregate_serializes() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let stats = ChartStats::new(data.chart());

    let value = serde_json::to_value(stats.statistics()).unwrap();
    assert!(value["elementDistribution"]["fire"].is_number());
    assert!(value["specialPatterns"]["grandCrosses"].is_number());
    assert!(value["aspectGrid"]["planets"].is_array());
}
