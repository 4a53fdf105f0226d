//! Aggregation of NDVI/NDWI measurements.
//!
//! This crate turns the flat measurement table into the four summary
//! tables the dashboard charts are drawn from. Everything here is a pure
//! function of its inputs; nothing is cached between calls.

/// Group-by-and-mean over the measurement table.
pub mod aggregate {
    use log::debug;
    use serde::Serialize;
    use std::collections::{BTreeMap, HashMap};
    use veg_core::{Measurement, Metric, Result, YearMonth};

    /// Mean of both indices for one calendar month.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct MonthlyMean {
        pub year_month: YearMonth,
        pub ndvi_mean: f64,
        pub ndwi_mean: f64,
    }

    /// Mean of the selected metric for one (year, quarter) pair.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct QuarterlyMean {
        pub year: i32,
        pub quarter: u32,
        pub value: f64,
    }

    /// One raw observation placed on a yearly axis.
    #[derive(Debug, Clone, Copy, PartialEq, Serialize)]
    pub struct YearValue {
        pub year: i32,
        pub value: f64,
    }

    /// Unaggregated `ndvi_mean` values for one quarter or one month,
    /// kept in input order so the renderer can compute the spread.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Distribution {
        /// Quarter (1-4) or month (1-12), depending on the partition.
        pub group: u32,
        pub points: Vec<YearValue>,
    }

    impl Distribution {
        pub fn years(&self) -> Vec<i32> {
            self.points.iter().map(|p| p.year).collect()
        }

        pub fn values(&self) -> Vec<f64> {
            self.points.iter().map(|p| p.value).collect()
        }
    }

    /// The four derived tables for one metric selection.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct Aggregates {
        pub metric: Metric,
        pub monthly_mean: Vec<MonthlyMean>,
        pub quarterly_mean: Vec<QuarterlyMean>,
        pub by_quarter: Vec<Distribution>,
        pub by_month: Vec<Distribution>,
    }

    impl Aggregates {
        pub fn is_empty(&self) -> bool {
            self.monthly_mean.is_empty()
                && self.quarterly_mean.is_empty()
                && self.by_quarter.is_empty()
                && self.by_month.is_empty()
        }
    }

    /// Running sum for an arithmetic mean.
    #[derive(Debug, Default, Clone, Copy)]
    struct Mean {
        sum: f64,
        count: usize,
    }

    impl Mean {
        fn push(&mut self, value: f64) {
            self.sum += value;
            self.count += 1;
        }

        fn value(&self) -> f64 {
            self.sum / self.count as f64
        }
    }

    /// Validate `selected_metric` and aggregate.
    ///
    /// An unrecognized name fails with `VegError::InvalidMetric` before any
    /// aggregation happens. An empty table is valid and yields empty tables.
    ///
    /// ```rust
    /// use veg_core::{Measurement, MeasurementTable};
    /// use veg_data::aggregate::aggregate;
    ///
    /// let table = MeasurementTable::new(vec![
    ///     Measurement::new("2021-01".parse().unwrap(), 0.4, 0.2),
    ///     Measurement::new("2021-01".parse().unwrap(), 0.6, 0.3),
    /// ]);
    /// let result = aggregate(&table, "ndvi_mean").unwrap();
    /// assert_eq!(result.monthly_mean.len(), 1);
    /// assert!(aggregate(&table, "unknown_metric").is_err());
    /// ```
    pub fn aggregate(table: &[Measurement], selected_metric: &str) -> Result<Aggregates> {
        let metric: Metric = selected_metric.parse()?;
        Ok(aggregate_metric(table, metric))
    }

    /// Aggregate for an already-validated metric.
    pub fn aggregate_metric(table: &[Measurement], metric: Metric) -> Aggregates {
        let aggregates = Aggregates {
            metric,
            monthly_mean: monthly_mean(table),
            quarterly_mean: quarterly_mean(table, metric),
            by_quarter: distribution_by(table, |m| m.quarter),
            by_month: distribution_by(table, |m| m.month),
        };
        debug!(
            "[veg] aggregate: {} rows -> {} months, {} year-quarters, {} quarters, {} months of year ({})",
            table.len(),
            aggregates.monthly_mean.len(),
            aggregates.quarterly_mean.len(),
            aggregates.by_quarter.len(),
            aggregates.by_month.len(),
            metric
        );
        aggregates
    }

    /// Mean `ndvi_mean` and `ndwi_mean` per `year_month`, ascending by key.
    /// Ignores the selected metric.
    pub fn monthly_mean(table: &[Measurement]) -> Vec<MonthlyMean> {
        let mut groups: BTreeMap<YearMonth, (Mean, Mean)> = BTreeMap::new();
        for m in table {
            let (ndvi, ndwi) = groups.entry(m.year_month).or_default();
            ndvi.push(m.ndvi_mean);
            ndwi.push(m.ndwi_mean);
        }
        groups
            .into_iter()
            .map(|(year_month, (ndvi, ndwi))| MonthlyMean {
                year_month,
                ndvi_mean: ndvi.value(),
                ndwi_mean: ndwi.value(),
            })
            .collect()
    }

    /// Mean of `metric` per (year, quarter), ordered by year then quarter.
    pub fn quarterly_mean(table: &[Measurement], metric: Metric) -> Vec<QuarterlyMean> {
        let mut groups: BTreeMap<(i32, u32), Mean> = BTreeMap::new();
        for m in table {
            groups
                .entry((m.year, m.quarter))
                .or_default()
                .push(metric.value(m));
        }
        groups
            .into_iter()
            .map(|((year, quarter), mean)| QuarterlyMean {
                year,
                quarter,
                value: mean.value(),
            })
            .collect()
    }

    /// Partition raw `ndvi_mean` values by `key`. Partitions appear in the
    /// order their key is first seen in the table.
    pub fn distribution_by<F>(table: &[Measurement], key: F) -> Vec<Distribution>
    where
        F: Fn(&Measurement) -> u32,
    {
        let mut index: HashMap<u32, usize> = HashMap::new();
        let mut partitions: Vec<Distribution> = Vec::new();
        for m in table {
            let group = key(m);
            let slot = *index.entry(group).or_insert_with(|| {
                partitions.push(Distribution {
                    group,
                    points: Vec::new(),
                });
                partitions.len() - 1
            });
            partitions[slot].points.push(YearValue {
                year: m.year,
                value: m.ndvi_mean,
            });
        }
        partitions
    }

}
