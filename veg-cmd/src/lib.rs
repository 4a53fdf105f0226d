//! Command implementations for the NDVI/NDWI CLI.
//!
//! Provides subcommands for exporting the aggregated tables, the chart
//! specifications and the static study-area map.

use clap::{Subcommand, ValueEnum};

pub mod aggregate;
pub mod charts;
pub mod map;

/// Output encoding for tabular exports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

/// Which derived table to export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    All,
    MonthlyMean,
    QuarterlyMean,
    ByQuarter,
    ByMonth,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the derived summary tables for a metric
    Aggregate {
        /// Measurement CSV (`.gz` accepted)
        #[arg(short = 'd', long)]
        data: String,

        /// Metric driving the quarterly means (ndvi_mean or ndwi_mean)
        #[arg(short = 'm', long, default_value = "ndvi_mean")]
        metric: String,

        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Csv)]
        format: OutputFormat,

        #[arg(short = 't', long, value_enum, default_value_t = Table::All)]
        table: Table,
    },

    /// Write the four chart specifications as JSON
    Charts {
        /// Measurement CSV (`.gz` accepted)
        #[arg(short = 'd', long)]
        data: String,

        /// Selected metric (ndvi_mean or ndwi_mean)
        #[arg(short = 'm', long, default_value = "ndvi_mean")]
        metric: String,

        /// Path to a JSON palette override, e.g. {"quarter": ["#1b9e77", ...]}
        #[arg(short = 'p', long)]
        palette: Option<String>,

        /// Emit plotly.js figures instead of renderer-neutral specs
        #[arg(long)]
        plotly: bool,

        /// Output file (stdout if omitted)
        #[arg(short = 'o', long)]
        output: Option<String>,
    },

    /// Write a standalone HTML page with the study-area map
    Map {
        #[arg(short = 'o', long, default_value = "map.html")]
        output: String,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Aggregate {
            data,
            metric,
            format,
            table,
        } => aggregate::run_aggregate(&data, &metric, format, table),
        Command::Charts {
            data,
            metric,
            palette,
            plotly,
            output,
        } => charts::run_charts(&data, &metric, palette.as_deref(), plotly, output.as_deref()),
        Command::Map { output } => map::run_map(&output),
    }
}
