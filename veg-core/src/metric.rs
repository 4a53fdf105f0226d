use crate::error::VegError;
use crate::measurement::Measurement;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The index column a user can select in the dashboard.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    NdviMean,
    NdwiMean,
}

impl Metric {
    /// Every selectable metric, in dropdown order.
    pub const ALL: [Metric; 2] = [Metric::NdviMean, Metric::NdwiMean];

    /// Column name in the input table, also the selector value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::NdviMean => "ndvi_mean",
            Metric::NdwiMean => "ndwi_mean",
        }
    }

    /// Human-readable label used for dropdown options and series names.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::NdviMean => "NDVI Mean",
            Metric::NdwiMean => "NDWI Mean",
        }
    }

    /// Read this metric's value from a measurement row.
    pub fn value(&self, measurement: &Measurement) -> f64 {
        match self {
            Metric::NdviMean => measurement.ndvi_mean,
            Metric::NdwiMean => measurement.ndwi_mean,
        }
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::NdviMean
    }
}

impl FromStr for Metric {
    type Err = VegError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ndvi_mean" => Ok(Metric::NdviMean),
            "ndwi_mean" => Ok(Metric::NdwiMean),
            other => Err(VegError::InvalidMetric(other.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
