//! Engine exercise harness: calculate a chart from the command line and
//! print one of its artifacts.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use urania::chart::config::ChartConfig;
use urania::chart::types::{BirthDataInput, CoordinateInput};
use urania::{ChartData, ChartStats, SvgRenderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputKind {
    Json,
    Svg,
    Report,
    Grid,
}

#[derive(Parser, Debug)]
#[command(
    name = "chart_lab",
    about = "Calculate a natal chart and print its JSON, SVG, report, or aspect grid"
)]
struct Args {
    /// Subject name
    #[arg(long)]
    name: String,
    /// Birth date (UTC), YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Birth time (UTC), HH:MM
    #[arg(long)]
    time: String,
    /// Latitude in decimal degrees
    #[arg(long)]
    lat: String,
    /// Longitude in decimal degrees
    #[arg(long)]
    lon: String,
    /// Birth place label
    #[arg(long, default_value = "")]
    location: String,
    /// Optional chart configuration TOML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputKind::Svg)]
    output: OutputKind,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ChartConfig::load_from_file(path)?,
        None => ChartConfig::default(),
    };

    let input = BirthDataInput {
        name: args.name.clone(),
        date_of_birth: args.date.clone(),
        time_of_birth: args.time.clone(),
        location_of_birth: args.location.clone(),
        coordinates: CoordinateInput {
            lat: args.lat.clone(),
            lon: args.lon.clone(),
        },
    };

    let birth_data = input.parse()?;
    let data = ChartData::new(birth_data, config)?;

    match args.output {
        OutputKind::Json => println!("{}", serde_json::to_string_pretty(&data.to_json())?),
        OutputKind::Svg => println!("{}", SvgRenderer::new(data.chart(), data.config()).render()),
        OutputKind::Report => println!("{}", ChartStats::new(data.chart()).report()),
        OutputKind::Grid => println!("{}", ChartStats::new(data.chart()).aspect_table_html()),
    }

    Ok(())
}
