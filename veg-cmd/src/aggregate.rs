//! Export of the derived summary tables.

use crate::{OutputFormat, Table};
use anyhow::Context;
use log::info;
use serde::Serialize;
use std::io::{self, Write};
use veg_core::MeasurementTable;
use veg_data::aggregate::{aggregate, Aggregates, Distribution};

/// Flattened distribution row: one raw value per line.
#[derive(Debug, Serialize)]
struct DistributionRow {
    group: u32,
    year: i32,
    ndvi_mean: f64,
}

fn flatten(distributions: &[Distribution]) -> Vec<DistributionRow> {
    distributions
        .iter()
        .flat_map(|d| {
            d.points.iter().map(move |p| DistributionRow {
                group: d.group,
                year: p.year,
                ndvi_mean: p.value,
            })
        })
        .collect()
}

/// Load `data`, aggregate for `metric` and print to stdout.
pub fn run_aggregate(data: &str, metric: &str, format: OutputFormat, table: Table) -> anyhow::Result<()> {
    let measurements =
        MeasurementTable::load(data).with_context(|| format!("Failed to load {data}"))?;
    let aggregates = aggregate(&measurements, metric)?;
    info!(
        "Aggregated {} measurements from {} for {}",
        measurements.len(),
        data,
        aggregates.metric
    );
    let stdout = io::stdout();
    write_aggregates(stdout.lock(), &aggregates, format, table)
}

/// Write one or all derived tables. CSV output of `Table::All` separates
/// the tables with `# <name>` lines.
pub fn write_aggregates<W: Write>(
    mut out: W,
    aggregates: &Aggregates,
    format: OutputFormat,
    table: Table,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            match table {
                Table::All => serde_json::to_writer_pretty(&mut out, aggregates)?,
                Table::MonthlyMean => serde_json::to_writer_pretty(&mut out, &aggregates.monthly_mean)?,
                Table::QuarterlyMean => {
                    serde_json::to_writer_pretty(&mut out, &aggregates.quarterly_mean)?
                }
                Table::ByQuarter => serde_json::to_writer_pretty(&mut out, &aggregates.by_quarter)?,
                Table::ByMonth => serde_json::to_writer_pretty(&mut out, &aggregates.by_month)?,
            }
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let sections: Vec<Table> = match table {
                Table::All => vec![
                    Table::MonthlyMean,
                    Table::QuarterlyMean,
                    Table::ByQuarter,
                    Table::ByMonth,
                ],
                single => vec![single],
            };
            let labelled = sections.len() > 1;
            for section in sections {
                if labelled {
                    writeln!(out, "# {}", section_name(section))?;
                }
                write_csv_section(&mut out, aggregates, section)?;
            }
        }
    }
    Ok(())
}

fn section_name(table: Table) -> &'static str {
    match table {
        Table::All => "all",
        Table::MonthlyMean => "monthly_mean",
        Table::QuarterlyMean => "quarterly_mean",
        Table::ByQuarter => "by_quarter",
        Table::ByMonth => "by_month",
    }
}

fn write_csv_section<W: Write>(out: &mut W, aggregates: &Aggregates, table: Table) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    match table {
        Table::MonthlyMean => write_rows(&mut wtr, &aggregates.monthly_mean)?,
        Table::QuarterlyMean => write_rows(&mut wtr, &aggregates.quarterly_mean)?,
        Table::ByQuarter => write_rows(&mut wtr, &flatten(&aggregates.by_quarter))?,
        Table::ByMonth => write_rows(&mut wtr, &flatten(&aggregates.by_month))?,
        Table::All => {}
    }
    wtr.flush()?;
    Ok(())
}

fn write_rows<W: Write, T: Serialize>(wtr: &mut csv::Writer<W>, rows: &[T]) -> anyhow::Result<()> {
    for row in rows {
        wtr.serialize(row)?;
    }
    Ok(())
}
