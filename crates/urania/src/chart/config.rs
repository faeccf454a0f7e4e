//! Chart configuration: orbs, visibility toggles, theme, dimensions.
//!
//! `ChartConfig` is a plain value object. Cloning is a deep copy by
//! construction (owned data only), so presets can be handed to parallel
//! chart computations without aliasing.

use crate::aspects::types::AspectType;
use crate::ephemeris::types::{HouseSystem, PlanetId};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Mono,
}

/// Named orb presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbPreset {
    Default,
    Tight,
    Wide,
}

/// Allowed orb per aspect type, in degrees
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OrbTable {
    pub conjunction: f64,
    pub sextile: f64,
    pub square: f64,
    pub trine: f64,
    pub opposition: f64,
    pub semisextile: f64,
    pub semisquare: f64,
    pub sesquiquadrate: f64,
    pub quincunx: f64,
}

impl Default for OrbTable {
    fn default() -> Self {
        OrbTable {
            conjunction: 10.0,
            sextile: 6.0,
            square: 10.0,
            trine: 10.0,
            opposition: 10.0,
            semisextile: 3.0,
            semisquare: 3.0,
            sesquiquadrate: 3.0,
            quincunx: 3.0,
        }
    }
}

impl OrbTable {
    pub fn tight() -> Self {
        OrbTable {
            conjunction: 8.0,
            sextile: 4.0,
            square: 8.0,
            trine: 8.0,
            opposition: 8.0,
            semisextile: 2.0,
            semisquare: 2.0,
            sesquiquadrate: 2.0,
            quincunx: 2.0,
        }
    }

    pub fn wide() -> Self {
        OrbTable {
            conjunction: 12.0,
            sextile: 8.0,
            square: 12.0,
            trine: 12.0,
            opposition: 12.0,
            semisextile: 4.0,
            semisquare: 4.0,
            sesquiquadrate: 4.0,
            quincunx: 4.0,
        }
    }

    pub fn preset(preset: OrbPreset) -> Self {
        match preset {
            OrbPreset::Default => OrbTable::default(),
            OrbPreset::Tight => OrbTable::tight(),
            OrbPreset::Wide => OrbTable::wide(),
        }
    }

    pub fn orb_for(&self, kind: AspectType) -> f64 {
        match kind {
            AspectType::Conjunction => self.conjunction,
            AspectType::Sextile => self.sextile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Opposition => self.opposition,
            AspectType::Semisextile => self.semisextile,
            AspectType::Semisquare => self.semisquare,
            AspectType::Sesquiquadrate => self.sesquiquadrate,
            AspectType::Quincunx => self.quincunx,
        }
    }

    pub fn set_orb(&mut self, kind: AspectType, orb: f64) {
        match kind {
            AspectType::Conjunction => self.conjunction = orb,
            AspectType::Sextile => self.sextile = orb,
            AspectType::Square => self.square = orb,
            AspectType::Trine => self.trine = orb,
            AspectType::Opposition => self.opposition = orb,
            AspectType::Semisextile => self.semisextile = orb,
            AspectType::Semisquare => self.semisquare = orb,
            AspectType::Sesquiquadrate => self.sesquiquadrate = orb,
            AspectType::Quincunx => self.quincunx = orb,
        }
    }
}

/// Per-planet visibility. All eleven computed bodies default to visible.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanetToggles {
    pub sun: bool,
    pub moon: bool,
    pub mercury: bool,
    pub venus: bool,
    pub mars: bool,
    pub jupiter: bool,
    pub saturn: bool,
    pub uranus: bool,
    pub neptune: bool,
    pub pluto: bool,
    pub mean_node: bool,
}

impl Default for PlanetToggles {
    fn default() -> Self {
        PlanetToggles {
            sun: true,
            moon: true,
            mercury: true,
            venus: true,
            mars: true,
            jupiter: true,
            saturn: true,
            uranus: true,
            neptune: true,
            pluto: true,
            mean_node: true,
        }
    }
}

impl PlanetToggles {
    pub fn shows(&self, planet: PlanetId) -> bool {
        match planet {
            PlanetId::Sun => self.sun,
            PlanetId::Moon => self.moon,
            PlanetId::Mercury => self.mercury,
            PlanetId::Venus => self.venus,
            PlanetId::Mars => self.mars,
            PlanetId::Jupiter => self.jupiter,
            PlanetId::Saturn => self.saturn,
            PlanetId::Uranus => self.uranus,
            PlanetId::Neptune => self.neptune,
            PlanetId::Pluto => self.pluto,
            PlanetId::MeanNode => self.mean_node,
        }
    }

    pub fn set(&mut self, planet: PlanetId, visible: bool) {
        match planet {
            PlanetId::Sun => self.sun = visible,
            PlanetId::Moon => self.moon = visible,
            PlanetId::Mercury => self.mercury = visible,
            PlanetId::Venus => self.venus = visible,
            PlanetId::Mars => self.mars = visible,
            PlanetId::Jupiter => self.jupiter = visible,
            PlanetId::Saturn => self.saturn = visible,
            PlanetId::Uranus => self.uranus = visible,
            PlanetId::Neptune => self.neptune = visible,
            PlanetId::Pluto => self.pluto = visible,
            PlanetId::MeanNode => self.mean_node = visible,
        }
    }

    pub fn toggle(&mut self, planet: PlanetId) {
        let current = self.shows(planet);
        self.set(planet, !current);
    }
}

/// Per-aspect-type visibility. The five majors default on, minors off.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AspectToggles {
    pub conjunction: bool,
    pub sextile: bool,
    pub square: bool,
    pub trine: bool,
    pub opposition: bool,
    pub semisextile: bool,
    pub semisquare: bool,
    pub sesquiquadrate: bool,
    pub quincunx: bool,
}

impl Default for AspectToggles {
    fn default() -> Self {
        AspectToggles {
            conjunction: true,
            sextile: true,
            square: true,
            trine: true,
            opposition: true,
            semisextile: false,
            semisquare: false,
            sesquiquadrate: false,
            quincunx: false,
        }
    }
}

impl AspectToggles {
    /// Every type enabled, minors included
    pub fn all() -> Self {
        AspectToggles {
            conjunction: true,
            sextile: true,
            square: true,
            trine: true,
            opposition: true,
            semisextile: true,
            semisquare: true,
            sesquiquadrate: true,
            quincunx: true,
        }
    }

    pub fn none() -> Self {
        AspectToggles {
            conjunction: false,
            sextile: false,
            square: false,
            trine: false,
            opposition: false,
            semisextile: false,
            semisquare: false,
            sesquiquadrate: false,
            quincunx: false,
        }
    }

    pub fn shows(&self, kind: AspectType) -> bool {
        match kind {
            AspectType::Conjunction => self.conjunction,
            AspectType::Sextile => self.sextile,
            AspectType::Square => self.square,
            AspectType::Trine => self.trine,
            AspectType::Opposition => self.opposition,
            AspectType::Semisextile => self.semisextile,
            AspectType::Semisquare => self.semisquare,
            AspectType::Sesquiquadrate => self.sesquiquadrate,
            AspectType::Quincunx => self.quincunx,
        }
    }

    pub fn set(&mut self, kind: AspectType, visible: bool) {
        match kind {
            AspectType::Conjunction => self.conjunction = visible,
            AspectType::Sextile => self.sextile = visible,
            AspectType::Square => self.square = visible,
            AspectType::Trine => self.trine = visible,
            AspectType::Opposition => self.opposition = visible,
            AspectType::Semisextile => self.semisextile = visible,
            AspectType::Semisquare => self.semisquare = visible,
            AspectType::Sesquiquadrate => self.sesquiquadrate = visible,
            AspectType::Quincunx => self.quincunx = visible,
        }
    }

    pub fn toggle(&mut self, kind: AspectType) {
        let current = self.shows(kind);
        self.set(kind, !current);
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DisplaySettings {
    pub show_planets: PlanetToggles,
    pub show_aspects: AspectToggles,
    pub show_house_numbers: bool,
    pub show_sign_symbols: bool,
    pub show_degree_markers: bool,
    pub show_retrogrades: bool,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            show_planets: PlanetToggles::default(),
            show_aspects: AspectToggles::default(),
            show_house_numbers: true,
            show_sign_symbols: true,
            show_degree_markers: true,
            show_retrogrades: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    pub theme: Theme,
    pub width: f64,
    pub height: f64,
    pub orbs: OrbTable,
    pub display: DisplaySettings,
    pub house_system: HouseSystem,
}

impl Default for ChartConfig {
    fn default() -> Self {
        ChartConfig {
            theme: Theme::Light,
            width: 600.0,
            height: 600.0,
            orbs: OrbTable::default(),
            display: DisplaySettings::default(),
            house_system: HouseSystem::Placidus,
        }
    }
}

impl ChartConfig {
    pub fn dark() -> Self {
        ChartConfig {
            theme: Theme::Dark,
            ..ChartConfig::default()
        }
    }

    /// Small wheel, tight orbs, no labels
    pub fn minimal() -> Self {
        let mut config = ChartConfig {
            width: 400.0,
            height: 400.0,
            orbs: OrbTable::tight(),
            ..ChartConfig::default()
        };
        config.display.show_house_numbers = false;
        config.display.show_degree_markers = false;
        config
    }

    /// Large wheel, wide orbs, minor aspects included
    pub fn detailed() -> Self {
        let mut config = ChartConfig {
            width: 800.0,
            height: 800.0,
            orbs: OrbTable::wide(),
            ..ChartConfig::default()
        };
        config.display.show_aspects = AspectToggles::all();
        config
    }

    /// Monochrome palette for print
    pub fn print_friendly() -> Self {
        ChartConfig {
            theme: Theme::Mono,
            ..ChartConfig::default()
        }
    }

    pub fn set_orb_preset(&mut self, preset: OrbPreset) {
        self.orbs = OrbTable::preset(preset);
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}
