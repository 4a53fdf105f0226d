//! Export of the four chart specifications.

use anyhow::Context;
use log::info;
use serde_json::Value;
use veg_chart::{plotly, update, Charts, Palettes};
use veg_core::MeasurementTable;

/// Load `data`, run the selection pipeline for `metric` and write the
/// charts as JSON to `output` (stdout when None).
pub fn run_charts(
    data: &str,
    metric: &str,
    palette: Option<&str>,
    as_plotly: bool,
    output: Option<&str>,
) -> anyhow::Result<()> {
    let palettes = match palette {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read palette file {path}"))?;
            Palettes::from_json(&json)?
        }
        None => Palettes::default(),
    };
    let table = MeasurementTable::load(data).with_context(|| format!("Failed to load {data}"))?;
    let charts = update(&table, metric, &palettes)?;
    let rendered = serde_json::to_string_pretty(&charts_json(&charts, as_plotly)?)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            info!("Wrote charts for {} to {}", metric, path);
        }
        None => println!("{rendered}"),
    }
    Ok(())
}

/// JSON object keyed by the dashboard container id of each chart.
pub fn charts_json(charts: &Charts, as_plotly: bool) -> serde_json::Result<Value> {
    let mut object = serde_json::Map::new();
    for (container_id, spec) in charts.with_container_ids() {
        let value = if as_plotly {
            plotly::figure(spec)
        } else {
            serde_json::to_value(spec)?
        };
        object.insert(container_id.to_string(), value);
    }
    Ok(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;
    use veg_core::Measurement;

    fn charts() -> Charts {
        let table = MeasurementTable::new(vec![
            Measurement::new("2021-01".parse().unwrap(), 0.4, 0.2),
            Measurement::new("2021-04".parse().unwrap(), 0.8, 0.1),
        ]);
        update(&table, "ndvi_mean", &Palettes::default()).unwrap()
    }

    #[test]
    fn test_charts_json_keyed_by_container() {
        let value = charts_json(&charts(), false).unwrap();
        assert_eq!(value["bar-plot"]["title"], "ndvi_mean Mean by Quarter");
        assert_eq!(value["bar-plot"]["series"].as_array().unwrap().len(), 2);
        assert_eq!(value["box-plot"]["box_mode"], "group");
        assert_eq!(value["line-plot"]["series"][0]["mode"], "lines+markers");
    }

    #[test]
    fn test_charts_json_plotly() {
        let value = charts_json(&charts(), true).unwrap();
        assert_eq!(value["box-plot-month"]["layout"]["boxmode"], "group");
        assert_eq!(value["bar-plot"]["data"][1]["name"], "Q2");
    }
}
