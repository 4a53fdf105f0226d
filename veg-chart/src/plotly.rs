//! plotly.js figure JSON for a [`ChartSpec`].

use crate::spec::{BoxMode, ChartSpec, LineMode, Series, SeriesKind};
use serde_json::{json, Value};

/// Convert a chart spec into a `{data, layout}` figure for `Plotly.react`.
pub fn figure(spec: &ChartSpec) -> Value {
    let data: Vec<Value> = spec.series.iter().map(trace).collect();
    let mut layout = json!({
        "title": { "text": spec.title },
    });
    if let Some(box_mode) = spec.box_mode {
        layout["boxmode"] = json!(match box_mode {
            BoxMode::Group => "group",
            BoxMode::Overlay => "overlay",
        });
    }
    json!({ "data": data, "layout": layout })
}

fn trace(series: &Series) -> Value {
    match series.kind {
        SeriesKind::Line => json!({
            "type": "scatter",
            "mode": match series.mode.unwrap_or(LineMode::LinesMarkers) {
                LineMode::Lines => "lines",
                LineMode::LinesMarkers => "lines+markers",
            },
            "name": series.name,
            "x": series.x,
            "y": series.y,
            "line": { "color": series.color },
        }),
        SeriesKind::Bar => json!({
            "type": "bar",
            "name": series.name,
            "x": series.x,
            "y": series.y,
            "marker": { "color": series.color },
        }),
        SeriesKind::Box => json!({
            "type": "box",
            "name": series.name,
            "x": series.x,
            "y": series.y,
            "marker": { "color": series.color },
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::XValues;

    #[test]
    fn test_box_figure_layout() {
        let mut spec = ChartSpec::new("NDVI Mean Distribution by Month").with_box_mode(BoxMode::Group);
        spec.series.push(Series {
            name: "Month 1".to_string(),
            kind: SeriesKind::Box,
            mode: None,
            x: XValues::Year(vec![2021, 2021]),
            y: vec![0.3, 0.4],
            color: "#ef553b".to_string(),
        });
        let fig = figure(&spec);
        assert_eq!(fig["layout"]["boxmode"], "group");
        assert_eq!(fig["layout"]["title"]["text"], "NDVI Mean Distribution by Month");
        assert_eq!(fig["data"][0]["type"], "box");
        assert_eq!(fig["data"][0]["marker"]["color"], "#ef553b");
    }

    #[test]
    fn test_line_figure_has_no_boxmode() {
        let mut spec = ChartSpec::new("t");
        spec.series.push(Series {
            name: "NDVI Mean".to_string(),
            kind: SeriesKind::Line,
            mode: Some(LineMode::LinesMarkers),
            x: XValues::Category(vec!["2021-01".to_string()]),
            y: vec![0.5],
            color: "green".to_string(),
        });
        let fig = figure(&spec);
        assert!(fig["layout"].get("boxmode").is_none());
        assert_eq!(fig["data"][0]["mode"], "lines+markers");
        assert_eq!(fig["data"][0]["line"]["color"], "green");
        assert_eq!(fig["data"][0]["x"][0], "2021-01");
    }

    #[test]
    fn test_empty_chart_has_empty_data() {
        let fig = figure(&ChartSpec::new("empty"));
        assert_eq!(fig["data"].as_array().unwrap().len(), 0);
    }
}
