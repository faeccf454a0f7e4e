use chrono::{TimeZone, Utc};
use urania::aspects::AspectCalculator;
use urania::chart::config::ChartConfig;
use urania::chart::data::ChartData;
use urania::chart::types::{
    BirthData, BirthDataInput, CelestialBody, ChartPointKind, CoordinateInput, House, NatalChart,
    Planet,
};
use urania::ephemeris::{normalize_angle, GeoLocation, PlanetId};
use urania::western::signs::{Element, Sign};

fn birth_data() -> BirthData {
    BirthData::new(
        "Test Subject",
        Utc.with_ymd_and_hms(1990, 6, 15, 8, 30, 0).unwrap(),
        "Greenwich",
        GeoLocation {
            lat: 51.48,
            lon: 0.0,
        },
    )
    .unwrap()
}

/// A chart with equal houses from 0° Aries and the given planets, with
/// aspects computed under the supplied configuration.
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
fn test_full_chart_population() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let chart = data.chart();

    assert_eq!(chart.planets().len(), 11);
    assert_eq!(chart.houses().len(), 12);
    assert_eq!(chart.chart_points().len(), 4);
}

#[test]
fn test_every_planet_in_exactly_one_house() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let chart = data.chart();

    let total: usize = chart.houses().iter().map(|h| h.occupants().len()).sum();
    assert_eq!(total, chart.planets().len());

    for planet in chart.planets() {
        let containing: Vec<u8> = chart
            .houses()
            .iter()
            .filter(|h| h.occupants().contains(&planet.id))
            .map(|h| h.number)
            .collect();
        assert_eq!(containing.len(), 1, "{:?} in houses {:?}", planet.id, containing);
    }
}

#[test]
fn test_derived_points_oppose_their_axes() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let chart = data.chart();

    let asc = chart.chart_point(ChartPointKind::Ascendant).unwrap();
    let dsc = chart.chart_point(ChartPointKind::Descendant).unwrap();
    let mc = chart.chart_point(ChartPointKind::Midheaven).unwrap();
    let ic = chart.chart_point(ChartPointKind::ImumCoeli).unwrap();

    assert!((dsc.longitude - normalize_angle(asc.longitude + 180.0)).abs() < 1e-9);
    assert!((ic.longitude - normalize_angle(mc.longitude + 180.0)).abs() < 1e-9);
    assert_eq!(asc.speed(), 0.0);
}

#[test]
fn test_invalid_input_fails_before_construction() {
    let result = BirthData::new(
        "Bad",
        Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
        "Nowhere",
        GeoLocation {
            lat: 95.0,
            lon: 0.0,
        },
    );
    assert!(result.is_err());

    let input = BirthDataInput {
        name: "Bad".to_string(),
        date_of_birth: "not-a-date".to_string(),
        time_of_birth: "12:00".to_string(),
        location_of_birth: "Nowhere".to_string(),
        coordinates: CoordinateInput {
            lat: "0".to_string(),
            lon: "0".to_string(),
        },
    };
    assert!(input.parse().is_err());

    let input = BirthDataInput {
        name: "Bad".to_string(),
        date_of_birth: "2000-01-01".to_string(),
        time_of_birth: "12:00".to_string(),
        location_of_birth: "Nowhere".to_string(),
        coordinates: CoordinateInput {
            lat: "fifty".to_string(),
            lon: "0".to_string(),
        },
    };
    assert!(input.parse().is_err());
}

#[test]
fn test_input_contract_parses_to_utc_instant() {
    let input = BirthDataInput {
        name: "Subject".to_string(),
        date_of_birth: "1984-02-29".to_string(),
        time_of_birth: "23:15".to_string(),
        location_of_birth: "Berlin".to_string(),
        coordinates: CoordinateInput {
            lat: "52.52".to_string(),
            lon: "13.40".to_string(),
        },
    };

    let birth = input.parse().unwrap();
    assert_eq!(
        birth.date_time,
        Utc.with_ymd_and_hms(1984, 2, 29, 23, 15, 0).unwrap()
    );
    assert_eq!(birth.coordinates.lat, 52.52);
}

#[test]
fn test_sign_boundaries() {
    let sun = Planet::new(PlanetId::Sun, 0.0, 1.0);
    assert_eq!(sun.sign(), Sign::Aries);
    assert_eq!(sun.degree_in_sign(), 0.0);

    let sun = Planet::new(PlanetId::Sun, 359.9, 1.0);
    assert_eq!(sun.sign(), Sign::Pisces);
    assert!((sun.degree_in_sign() - 29.9).abs() < 1e-9);
}

#[test]
fn test_planet_on_cusp_lands_in_that_house() {
    let mut chart = NatalChart::new(birth_data());
    // Ascendant at 100; equal houses from there.
    for i in 0..12u8 {
        chart.add_house(House::new(i + 1, normalize_angle(100.0 + i as f64 * 30.0)));
    }
    chart.add_planet(Planet::new(PlanetId::Sun, 100.0, 1.0));

    assert_eq!(chart.house_of(PlanetId::Sun).unwrap().number, 1);
}

#[test]
fn test_house_assignment_handles_wrap() {
    let mut chart = NatalChart::new(birth_data());
    // Ascendant at 350 puts the first house across the 0-degree seam.
    for i in 0..12u8 {
        chart.add_house(House::new(i + 1, normalize_angle(350.0 + i as f64 * 30.0)));
    }
    chart.add_planet(Planet::new(PlanetId::Sun, 10.0, 1.0));
    chart.add_planet(Planet::new(PlanetId::Moon, 30.0, 1.0));

    assert_eq!(chart.house_of(PlanetId::Sun).unwrap().number, 1);
    assert_eq!(chart.house_of(PlanetId::Moon).unwrap().number, 2);
}

#[test]
fn test_planet_visibility_toggles() {
    let mut config = ChartConfig::default();
    config.display.show_planets.set(PlanetId::Pluto, false);

    let data = ChartData::new(birth_data(), config).unwrap();
    assert_eq!(data.chart().planets().len(), 10);
    assert!(data.chart().planet(PlanetId::Pluto).is_none());
}

#[test]
fn test_calculation_is_deterministic() {
    let a = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let b = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    assert_eq!(a.to_json(), b.to_json());
}

#[test]
fn test_json_contract_shape() {
    let data = ChartData::new(birth_data(), ChartConfig::default()).unwrap();
    let json = data.to_json();

    assert!(json["birthData"]["name"].is_string());
    assert_eq!(json["planets"].as_array().unwrap().len(), 11);
    assert_eq!(json["houses"].as_array().unwrap().len(), 12);
    assert_eq!(json["chartPoints"].as_array().unwrap().len(), 4);

    let planet = &json["planets"][0];
    for key in [
        "name",
        "degree",
        "sign",
        "degreeInSign",
        "house",
        "isRetrograde",
        "speed",
    ] {
        assert!(!planet[key].is_null(), "missing planet key {}", key);
    }

    let house = &json["houses"][0];
    for key in ["number", "cusp", "sign", "ruler", "planets"] {
        assert!(!house[key].is_null(), "missing house key {}", key);
    }

    for key in [
        "dominantElement",
        "dominantModality",
        "stelliums",
        "tSquares",
        "grandTrines",
    ] {
        assert!(!json["summary"][key].is_null(), "missing summary key {}", key);
    }
}

#[test]
fn test_dominant_element_tie_breaks_canonically() {
    // Two fire, two earth: Fire wins by canonical order.
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 5.0),       // Aries, fire
            (PlanetId::Moon, 125.0),    // Leo, fire
            (PlanetId::Mercury, 35.0),  // Taurus, earth
            (PlanetId::Venus, 155.0),   // Virgo, earth
        ],
        &ChartConfig::default(),
    );
    assert_eq!(chart.dominant_element(), Element::Fire);
}

#[test]
fn test_stellium_needs_three_planets() {
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 1.0),
            (PlanetId::Moon, 12.0),
            (PlanetId::Mercury, 25.0),
            (PlanetId::Venus, 100.0),
        ],
        &ChartConfig::default(),
    );

    let stelliums = chart.stelliums();
    assert_eq!(stelliums.len(), 1);
    assert_eq!(stelliums[0].sign, Sign::Aries);
    assert_eq!(stelliums[0].planets.len(), 3);
}

#[test]
fn test_grand_trine_detection() {
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),
            (PlanetId::Moon, 120.0),
            (PlanetId::Mars, 240.0),
        ],
        &ChartConfig::default(),
    );
    assert_eq!(chart.grand_trines().len(), 1);
}

#[test]
fn test_t_square_detection() {
    let chart = crafted_chart(
        &[
            (PlanetId::Sun, 0.0),
            (PlanetId::Moon, 180.0),
            (PlanetId::Mars, 90.0),
        ],
        &ChartConfig::default(),
    );

    let t_squares = chart.t_squares();
    // Both orderings of the base pair match, so one figure yields two records.
    assert_eq!(t_squares.len(), 2);
    assert!(t_squares.iter().all(|t| t.apex == PlanetId::Mars));
}

#[test]
fn test_dignities_from_chart_positions() {
    let sun_in_leo = Planet::new(PlanetId::Sun, 135.0, 1.0);
    assert!(sun_in_leo.is_in_ruling());
    assert!(!sun_in_leo.is_in_fall());

    let sun_in_libra = Planet::new(PlanetId::Sun, 195.0, 1.0);
    assert!(sun_in_libra.is_in_fall());
    assert!(!sun_in_libra.is_in_ruling());

    let venus_in_pisces = Planet::new(PlanetId::Venus, 340.0, 1.0);
    assert!(venus_in_pisces.is_in_exaltation());
}

#[test]
fn test_retrograde_flag_follows_speed() {
    let direct = Planet::new(PlanetId::Mars, 10.0, 0.5);
    let retro = Planet::new(PlanetId::Mars, 10.0, -0.5);
    assert!(!direct.is_retrograde());
    assert!(retro.is_retrograde());
}
