/// Error types for the vegetation index toolkit
use thiserror::Error;

/// Main error type for loading measurements and running the chart pipeline
#[derive(Error, Debug)]
pub enum VegError {
    /// Metric selection outside the recognized set
    #[error("Invalid metric: {0} (expected one of: ndvi_mean, ndwi_mean)")]
    InvalidMetric(String),

    /// Failed to parse CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// Failed to read the input file
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// A `year_month` key that is not a valid "YYYY-MM" calendar month
    #[error("Invalid year_month key: {0}")]
    InvalidYearMonth(String),

    /// Input table lacks a required column
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// Color palette configuration that cannot be used
    #[error("Invalid palette: {0}")]
    InvalidPalette(String),
}

/// Type alias for Results using VegError
pub type Result<T> = std::result::Result<T, VegError>;
