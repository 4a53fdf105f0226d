//! Color palettes for chart series.
//!
//! Colors are looked up by group index, never by the order a group happens
//! to appear in, so a quarter or month keeps its color across renders.

use serde::{Deserialize, Serialize};
use veg_core::{Result, VegError};

/// ColorBrewer Set2, used for quarters
pub const SET2: &[&str] = &[
    "#66c2a5", "#fc8d62", "#8da0cb", "#e78ac3", "#a6d854",
    "#ffd92f", "#e5c494", "#b3b3b3",
];

/// Plotly qualitative palette, used for months
pub const PLOTLY: &[&str] = &[
    "#636efa", "#ef553b", "#00cc96", "#ab63fa", "#ffa15a",
    "#19d3f3", "#ff6692", "#b6e880", "#ff97ff", "#fecb52",
];

pub const VEGETATION_GREEN: &str = "green";
pub const WATER_BLUE: &str = "blue";

/// Swappable palette configuration. Missing keys in a JSON override fall
/// back to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palettes {
    /// Indexed by `quarter - 1`
    pub quarter: Vec<String>,
    /// Indexed by `month % len`
    pub month: Vec<String>,
    pub ndvi_line: String,
    pub ndwi_line: String,
}

impl Default for Palettes {
    fn default() -> Self {
        Self {
            quarter: SET2.iter().map(|c| c.to_string()).collect(),
            month: PLOTLY.iter().map(|c| c.to_string()).collect(),
            ndvi_line: VEGETATION_GREEN.to_string(),
            ndwi_line: WATER_BLUE.to_string(),
        }
    }
}

impl Palettes {
    /// Parse a palette override such as `{"quarter": ["#000", ...]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let palettes: Palettes =
            serde_json::from_str(json).map_err(|e| VegError::InvalidPalette(e.to_string()))?;
        palettes.validate()?;
        Ok(palettes)
    }

    pub fn validate(&self) -> Result<()> {
        if self.quarter.is_empty() {
            return Err(VegError::InvalidPalette("quarter palette is empty".to_string()));
        }
        if self.month.is_empty() {
            return Err(VegError::InvalidPalette("month palette is empty".to_string()));
        }
        Ok(())
    }

    /// Palette slot for a quarter (1-4).
    pub fn quarter_index(&self, quarter: u32) -> usize {
        quarter.saturating_sub(1) as usize % self.quarter.len().max(1)
    }

    pub fn quarter_color(&self, quarter: u32) -> &str {
        self.quarter
            .get(self.quarter_index(quarter))
            .map(String::as_str)
            .unwrap_or(SET2[0])
    }

    /// Palette slot for a month (1-12). December wraps with the default
    /// ten-color palette.
    pub fn month_index(&self, month: u32) -> usize {
        month as usize % self.month.len().max(1)
    }

    pub fn month_color(&self, month: u32) -> &str {
        self.month
            .get(self.month_index(month))
            .map(String::as_str)
            .unwrap_or(PLOTLY[0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_colors_index_from_one() {
        let palettes = Palettes::default();
        assert_eq!(palettes.quarter_index(1), 0);
        assert_eq!(palettes.quarter_color(1), "#66c2a5");
        assert_eq!(palettes.quarter_color(4), "#e78ac3");
    }

    #[test]
    fn test_month_colors_wrap_modulo_length() {
        let palettes = Palettes::default();
        assert_eq!(palettes.month_index(1), 1);
        assert_eq!(palettes.month_index(10), 0);
        assert_eq!(palettes.month_color(12), palettes.month_color(2));
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let palettes = Palettes::from_json(r##"{"quarter": ["#111111", "#222222"]}"##).unwrap();
        assert_eq!(palettes.quarter_color(2), "#222222");
        assert_eq!(palettes.quarter_color(3), "#111111");
        assert_eq!(palettes.month, Palettes::default().month);
        assert_eq!(palettes.ndvi_line, "green");
    }

    #[test]
    fn test_empty_palette_is_rejected() {
        assert!(matches!(
            Palettes::from_json(r#"{"month": []}"#),
            Err(VegError::InvalidPalette(_))
        ));
        assert!(Palettes::from_json("not json").is_err());
    }
}
