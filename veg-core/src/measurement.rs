use crate::error::{Result, VegError};
use crate::year_month::YearMonth;
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use log::info;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::Deref;
use std::path::Path;
use std::sync::Arc;

/// Columns the input table must carry. Any other columns are ignored.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "year_month",
    "year",
    "month",
    "quarter",
    "ndvi_mean",
    "ndwi_mean",
];

/// A single NDVI/NDWI observation for one calendar month.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Measurement {
    pub year_month: YearMonth,
    pub year: i32,
    /// Calendar month, 1-12
    pub month: u32,
    /// Calendar quarter, 1-4
    pub quarter: u32,
    pub ndvi_mean: f64,
    pub ndwi_mean: f64,
}

impl Measurement {
    /// Build a measurement whose year, month and quarter are derived from the key.
    pub fn new(year_month: YearMonth, ndvi_mean: f64, ndwi_mean: f64) -> Measurement {
        Measurement {
            year_month,
            year: year_month.year,
            month: year_month.month,
            quarter: year_month.quarter(),
            ndvi_mean,
            ndwi_mean,
        }
    }
}

/// The immutable base table, loaded once at startup.
///
/// Cloning is cheap (shared `Arc`), and the table is `Send + Sync`, so
/// concurrent sessions can aggregate over the same rows without locking.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MeasurementTable {
    rows: Arc<[Measurement]>,
}

impl MeasurementTable {
    pub fn new(rows: Vec<Measurement>) -> Self {
        Self { rows: rows.into() }
    }

    /// Parse a CSV string (one header row) into a table.
    ///
    /// # Example CSV
    /// ```text
    /// year_month,year,month,quarter,ndvi_mean,ndwi_mean
    /// 2021-01,2021,1,1,0.41,0.22
    /// ```
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse CSV from any reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers()?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(VegError::MissingColumn(missing.to_string()));
        }

        let rows = rdr
            .deserialize::<Measurement>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        info!("[veg] loader: Loaded {} measurements", rows.len());
        Ok(Self::new(rows))
    }

    /// Load a table from disk. Files ending in `.gz` are decompressed on the fly.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = BufReader::new(File::open(path)?);
        info!("[veg] loader: Reading {}", path.display());
        if path.extension().is_some_and(|ext| ext == "gz") {
            Self::from_reader(GzDecoder::new(file))
        } else {
            Self::from_reader(file)
        }
    }

    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }
}

impl Deref for MeasurementTable {
    type Target = [Measurement];

    fn deref(&self) -> &Self::Target {
        &self.rows
    }
}

impl From<Vec<Measurement>> for MeasurementTable {
    fn from(rows: Vec<Measurement>) -> Self {
        Self::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV_DATA: &str = "\
year_month,year,month,quarter,ndvi_mean,ndwi_mean,tile
2021-01,2021,1,1,0.4,0.2,a
2021-01,2021,1,1,0.6,0.3,b
2021-04,2021,4,2,0.8,0.1,a
";

    #[test]
    fn test_parse_measurement_csv() {
        let table = MeasurementTable::from_csv_str(CSV_DATA).unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table[0].year_month.to_string(), "2021-01");
        assert_eq!(table[2].quarter, 2);
        assert!((table[1].ndvi_mean - 0.6).abs() < f64::EPSILON);
        assert!((table[1].ndwi_mean - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_header_only_csv() {
        let csv_data = "year_month,year,month,quarter,ndvi_mean,ndwi_mean\n";
        let table = MeasurementTable::from_csv_str(csv_data).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_column_is_reported() {
        let csv_data = "year_month,year,month,quarter,ndvi_mean\n2021-01,2021,1,1,0.4\n";
        match MeasurementTable::from_csv_str(csv_data) {
            Err(VegError::MissingColumn(column)) => assert_eq!(column, "ndwi_mean"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn test_bad_year_month_is_a_csv_error() {
        let csv_data = "year_month,year,month,quarter,ndvi_mean,ndwi_mean\nsoon,2021,1,1,0.4,0.2\n";
        assert!(matches!(
            MeasurementTable::from_csv_str(csv_data),
            Err(VegError::Csv(_))
        ));
    }

    #[test]
    fn test_load_gzipped_file() {
        let dir = std::env::temp_dir().join(format!("veg-core-gz-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("measurements.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(CSV_DATA.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let table = MeasurementTable::load(&path).unwrap();
        assert_eq!(table.len(), 3);
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_measurement_new_derives_calendar_fields() {
        let m = Measurement::new("2020-11".parse().unwrap(), 0.5, 0.1);
        assert_eq!((m.year, m.month, m.quarter), (2020, 11, 4));
    }

    #[test]
    fn test_table_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeasurementTable>();
    }
}
