use crate::error::VegError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format of the `year_month` key in the input table: "YYYY-MM".
pub const YEAR_MONTH_FORMAT: &str = "%Y-%m";

/// A calendar month key. Ordering is chronological, and the `Display`
/// form is zero-padded so it also sorts correctly as text.
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Copy, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Create a YearMonth, returning None if `month` is outside 1..=12.
    pub fn from_ym_opt(year: i32, month: u32) -> Option<YearMonth> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| YearMonth { year, month })
    }

    /// The calendar quarter (1-4) this month falls in.
    pub fn quarter(&self) -> u32 {
        quarter_for_month(self.month)
    }

    /// First day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .unwrap_or(NaiveDate::MIN)
    }
}

/// Q1 = Jan-Mar, Q2 = Apr-Jun, Q3 = Jul-Sep, Q4 = Oct-Dec.
pub fn quarter_for_month(month: u32) -> u32 {
    (month.clamp(1, 12) - 1) / 3 + 1
}

impl From<NaiveDate> for YearMonth {
    fn from(date: NaiveDate) -> Self {
        YearMonth {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl FromStr for YearMonth {
    type Err = VegError;

    /// Accepts "YYYY-MM", and also a full "YYYY-MM-DD" date whose day is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let date = NaiveDate::parse_from_str(&format!("{trimmed}-01"), "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%Y-%m-%d"))
            .map_err(|_| VegError::InvalidYearMonth(s.to_string()))?;
        Ok(date.into())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = VegError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.first_day().format(YEAR_MONTH_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let ym: YearMonth = "2021-01".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2021, month: 1 });
        assert_eq!(ym.to_string(), "2021-01");
    }

    #[test]
    fn test_parse_full_date() {
        let ym: YearMonth = "2019-11-01".parse().unwrap();
        assert_eq!(ym, YearMonth::from_ym_opt(2019, 11).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "2021-13".parse::<YearMonth>(),
            Err(VegError::InvalidYearMonth(_))
        ));
        assert!("january".parse::<YearMonth>().is_err());
    }

    #[test]
    fn test_ordering_is_chronological() {
        let mut keys: Vec<YearMonth> = ["2021-10", "2020-12", "2021-02"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        keys.sort();
        let text: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(text, vec!["2020-12", "2021-02", "2021-10"]);
    }

    #[test]
    fn test_quarter_for_month() {
        assert_eq!(quarter_for_month(1), 1);
        assert_eq!(quarter_for_month(3), 1);
        assert_eq!(quarter_for_month(4), 2);
        assert_eq!(quarter_for_month(9), 3);
        assert_eq!(quarter_for_month(12), 4);
        assert_eq!(YearMonth::from_ym_opt(2022, 8).unwrap().quarter(), 3);
    }

    #[test]
    fn test_from_ym_opt_rejects_month_zero() {
        assert!(YearMonth::from_ym_opt(2022, 0).is_none());
    }
}
