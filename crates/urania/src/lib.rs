pub mod aspects;
pub mod chart;
pub mod ephemeris;
pub mod rendering;
pub mod stats;
pub mod western;

pub use chart::config::ChartConfig;
pub use chart::data::{ChartData, ChartError};
pub use chart::types::{BirthData, BirthDataInput, NatalChart};
pub use rendering::SvgRenderer;
pub use stats::ChartStats;
