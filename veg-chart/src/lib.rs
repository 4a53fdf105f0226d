//! Chart construction for the NDVI/NDWI dashboard.
//!
//! This crate provides:
//! - `spec`: renderer-neutral chart specification structs
//! - `palette`: swappable color palettes indexed by quarter / month
//! - `builder`: the four chart builders
//! - `plotly`: conversion of a spec into a plotly.js figure
//!
//! [`update`] is the whole selection pipeline: aggregate, then build.
//! It has no UI dependency and is safe to call from several threads over
//! one shared [`MeasurementTable`].
//!
//! # Usage
//!
//! ```rust
//! use veg_chart::{update, Palettes};
//! use veg_core::MeasurementTable;
//!
//! let table = MeasurementTable::from_csv_str(
//!     "year_month,year,month,quarter,ndvi_mean,ndwi_mean\n2021-01,2021,1,1,0.4,0.2\n",
//! ).unwrap();
//! let charts = update(&table, "ndwi_mean", &Palettes::default()).unwrap();
//! assert_eq!(charts.bar.title, "ndwi_mean Mean by Quarter");
//! ```

pub mod builder;
pub mod palette;
pub mod plotly;
pub mod spec;

pub use builder::build_charts;
pub use palette::Palettes;
pub use spec::{ChartSpec, Charts};

use log::info;
use veg_core::{MeasurementTable, Result};
use veg_data::aggregate::aggregate;

/// Run the selection pipeline for one metric selection.
///
/// Fails with `VegError::InvalidMetric` for an unrecognized metric name,
/// without producing any chart.
pub fn update(table: &MeasurementTable, selected_metric: &str, palettes: &Palettes) -> Result<Charts> {
    let aggregates = aggregate(table, selected_metric)?;
    let charts = build_charts(&aggregates, palettes);
    info!(
        "[veg] update: {} -> {} bar series, {} quarter boxes, {} month boxes",
        aggregates.metric,
        charts.bar.series.len(),
        charts.box_by_quarter.series.len(),
        charts.box_by_month.series.len()
    );
    Ok(charts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use veg_core::{Measurement, VegError};

    fn table() -> MeasurementTable {
        let rows = ["2020-01", "2020-05", "2020-08", "2021-01", "2021-11"]
            .iter()
            .enumerate()
            .map(|(i, ym)| Measurement::new(ym.parse().unwrap(), 0.1 * i as f64, 0.05 * i as f64))
            .collect();
        MeasurementTable::new(rows)
    }

    #[test]
    fn test_update_invalid_metric() {
        let err = update(&table(), "unknown_metric", &Palettes::default()).unwrap_err();
        assert!(matches!(err, VegError::InvalidMetric(_)));
    }

    #[test]
    fn test_update_empty_table() {
        let charts = update(&MeasurementTable::default(), "ndvi_mean", &Palettes::default()).unwrap();
        assert!(charts.line.series.is_empty());
        assert!(charts.bar.series.is_empty());
        assert!(charts.box_by_quarter.series.is_empty());
        assert!(charts.box_by_month.series.is_empty());
    }

    #[test]
    fn test_update_concurrent_sessions_agree() {
        let table = table();
        let palettes = Palettes::default();
        let expected = update(&table, "ndwi_mean", &palettes).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let table = table.clone();
                    let palettes = &palettes;
                    scope.spawn(move || update(&table, "ndwi_mean", palettes).unwrap())
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
