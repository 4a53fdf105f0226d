pub mod error;
pub mod measurement;
pub mod metric;
pub mod region;
pub mod year_month;

pub use error::{Result, VegError};
pub use measurement::{Measurement, MeasurementTable};
pub use metric::Metric;
pub use year_month::YearMonth;
