//! Chart specification structs.
//!
//! All structs derive `Serialize` so any rendering surface (plotly.js in the
//! dashboard, a JSON file from the CLI) can consume them.

use serde::Serialize;

/// Which kind of mark a series is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Line,
    Bar,
    Box,
}

/// Drawing style for line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// How multiple box series sharing an x category are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BoxMode {
    /// Side by side
    Group,
    Overlay,
}

/// X coordinates: month keys for the trend line, years elsewhere.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum XValues {
    Category(Vec<String>),
    Year(Vec<i32>),
}

impl XValues {
    pub fn len(&self) -> usize {
        match self {
            XValues::Category(v) => v.len(),
            XValues::Year(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One named, colored series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub kind: SeriesKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<LineMode>,
    pub x: XValues,
    /// For box series these are the raw values; the renderer derives the
    /// five-number summary and outliers.
    pub y: Vec<f64>,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub box_mode: Option<BoxMode>,
    pub series: Vec<Series>,
}

impl ChartSpec {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            box_mode: None,
            series: Vec::new(),
        }
    }

    pub fn with_box_mode(mut self, box_mode: BoxMode) -> Self {
        self.box_mode = Some(box_mode);
        self
    }

    pub fn series_names(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.name.as_str()).collect()
    }
}

/// DOM ids of the chart containers on the dashboard page, in `Charts` field order.
pub const CONTAINER_IDS: [&str; 4] = ["line-plot", "bar-plot", "box-plot", "box-plot-month"];

/// The four dashboard charts for one metric selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Charts {
    pub line: ChartSpec,
    pub bar: ChartSpec,
    pub box_by_quarter: ChartSpec,
    pub box_by_month: ChartSpec,
}

impl Charts {
    /// Charts paired with the DOM ids of their containers on the dashboard page.
    pub fn with_container_ids(&self) -> [(&'static str, &ChartSpec); 4] {
        [
            (CONTAINER_IDS[0], &self.line),
            (CONTAINER_IDS[1], &self.bar),
            (CONTAINER_IDS[2], &self.box_by_quarter),
            (CONTAINER_IDS[3], &self.box_by_month),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_serializes_flat_x() {
        let series = Series {
            name: "Q1".to_string(),
            kind: SeriesKind::Box,
            mode: None,
            x: XValues::Year(vec![2020, 2021]),
            y: vec![0.1, 0.2],
            color: "#66c2a5".to_string(),
        };
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(
            value,
            json!({"name": "Q1", "kind": "box", "x": [2020, 2021], "y": [0.1, 0.2], "color": "#66c2a5"})
        );
    }

    #[test]
    fn test_line_mode_and_box_mode_names() {
        assert_eq!(serde_json::to_value(LineMode::LinesMarkers).unwrap(), json!("lines+markers"));
        let spec = ChartSpec::new("t").with_box_mode(BoxMode::Group);
        assert_eq!(serde_json::to_value(&spec).unwrap()["box_mode"], json!("group"));
    }
}
