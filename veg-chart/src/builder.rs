//! Turns the aggregated tables into the four dashboard chart specs.
//!
//! The line chart always carries both indices and the box charts always
//! plot `ndvi_mean`; only the bar chart follows the selected metric.

use crate::palette::Palettes;
use crate::spec::{BoxMode, ChartSpec, Charts, LineMode, Series, SeriesKind, XValues};
use veg_core::Metric;
use veg_data::aggregate::{Aggregates, Distribution, MonthlyMean, QuarterlyMean};

pub const LINE_TITLE: &str = "NDVI and NDWI Mean Over Time";
pub const BOX_BY_QUARTER_TITLE: &str = "NDVI Mean Distribution by Year and Quarter";
pub const BOX_BY_MONTH_TITLE: &str = "NDVI Mean Distribution by Month";

/// Build all four charts. The metric is taken from the aggregates, which
/// were validated when they were produced.
pub fn build_charts(aggregates: &Aggregates, palettes: &Palettes) -> Charts {
    Charts {
        line: line_chart(&aggregates.monthly_mean, palettes),
        bar: bar_chart(&aggregates.quarterly_mean, aggregates.metric, palettes),
        box_by_quarter: box_chart_by_quarter(&aggregates.by_quarter, palettes),
        box_by_month: box_chart_by_month(&aggregates.by_month, palettes),
    }
}

/// Two `lines+markers` series over the monthly means.
pub fn line_chart(monthly: &[MonthlyMean], palettes: &Palettes) -> ChartSpec {
    let mut chart = ChartSpec::new(LINE_TITLE);
    if monthly.is_empty() {
        return chart;
    }
    let x: Vec<String> = monthly.iter().map(|m| m.year_month.to_string()).collect();
    let lines = [
        (Metric::NdviMean, &palettes.ndvi_line),
        (Metric::NdwiMean, &palettes.ndwi_line),
    ];
    for (metric, color) in lines {
        chart.series.push(Series {
            name: metric.label().to_string(),
            kind: SeriesKind::Line,
            mode: Some(LineMode::LinesMarkers),
            x: XValues::Category(x.clone()),
            y: monthly
                .iter()
                .map(|m| match metric {
                    Metric::NdviMean => m.ndvi_mean,
                    Metric::NdwiMean => m.ndwi_mean,
                })
                .collect(),
            color: color.clone(),
        });
    }
    chart
}

/// One bar series per quarter present, year on the x axis.
pub fn bar_chart(quarterly: &[QuarterlyMean], metric: Metric, palettes: &Palettes) -> ChartSpec {
    let mut chart = ChartSpec::new(format!("{} Mean by Quarter", metric.as_str()));
    for quarter in distinct(quarterly.iter().map(|q| q.quarter)) {
        let rows: Vec<&QuarterlyMean> = quarterly.iter().filter(|q| q.quarter == quarter).collect();
        chart.series.push(Series {
            name: format!("Q{quarter}"),
            kind: SeriesKind::Bar,
            mode: None,
            x: XValues::Year(rows.iter().map(|q| q.year).collect()),
            y: rows.iter().map(|q| q.value).collect(),
            color: palettes.quarter_color(quarter).to_string(),
        });
    }
    chart
}

/// Grouped box plot of raw `ndvi_mean` per quarter and year.
pub fn box_chart_by_quarter(by_quarter: &[Distribution], palettes: &Palettes) -> ChartSpec {
    let mut chart = ChartSpec::new(BOX_BY_QUARTER_TITLE).with_box_mode(BoxMode::Group);
    chart.series = by_quarter
        .iter()
        .map(|d| box_series(format!("Q{}", d.group), d, palettes.quarter_color(d.group)))
        .collect();
    chart
}

/// Grouped box plot of raw `ndvi_mean` per month and year.
pub fn box_chart_by_month(by_month: &[Distribution], palettes: &Palettes) -> ChartSpec {
    let mut chart = ChartSpec::new(BOX_BY_MONTH_TITLE).with_box_mode(BoxMode::Group);
    chart.series = by_month
        .iter()
        .map(|d| box_series(format!("Month {}", d.group), d, palettes.month_color(d.group)))
        .collect();
    chart
}

fn box_series(name: String, distribution: &Distribution, color: &str) -> Series {
    Series {
        name,
        kind: SeriesKind::Box,
        mode: None,
        x: XValues::Year(distribution.years()),
        y: distribution.values(),
        color: color.to_string(),
    }
}

/// Distinct values in first-seen order.
fn distinct<I: Iterator<Item = u32>>(values: I) -> Vec<u32> {
    let mut seen = Vec::new();
    for v in values {
        if !seen.contains(&v) {
            seen.push(v);
        }
    }
    seen
}
