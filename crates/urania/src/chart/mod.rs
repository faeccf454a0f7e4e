pub mod config;
pub mod data;
pub mod types;

pub use config::{
    AspectToggles, ChartConfig, ConfigError, DisplaySettings, OrbPreset, OrbTable, PlanetToggles,
    Theme,
};
pub use data::{ChartData, ChartError};
pub use types::{
    BirthData, BirthDataInput, CelestialBody, ChartPoint, ChartPointKind, House, NatalChart,
    Planet, Stellium, TSquare,
};
