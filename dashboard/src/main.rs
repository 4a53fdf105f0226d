//! NDVI and NDWI Data Visualization
//!
//! Single-page dashboard: a static study-area map, a metric dropdown and
//! four plotly.js charts that are rebuilt on every selection.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/ndvi_ndwi_data_cleaned.csv` into OUT_DIR.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount: parse the CSV once into an immutable `MeasurementTable`.
//! 4. On metric change: `veg_chart::update` aggregates and builds the four
//!    chart specs, which are handed to plotly.js.

use dioxus::prelude::*;
use veg_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, LoadingSpinner, MapFrame, MetricSelector,
};
use veg_chart_ui::js_bridge;
use veg_chart_ui::state::AppState;
use veg_chart::spec::CONTAINER_IDS;
use veg_core::MeasurementTable;
use wasm_bindgen::JsValue;

const MEASUREMENTS_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/ndvi_ndwi_data_cleaned.csv"));

/// DOM id for the Leaflet map container.
const MAP_CONTAINER_ID: &str = "folium-map";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("veg-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: Parse CSV once on mount ───
    use_effect(move || {
        js_bridge::load_libraries();
        js_bridge::init_charts();

        match MeasurementTable::from_csv_str(MEASUREMENTS_CSV) {
            Ok(table) => {
                web_sys::console::log_1(&JsValue::from_str(&format!(
                    "[veg] dashboard: {} measurements loaded",
                    table.len()
                )));
                state.table.set(Some(table));
            }
            Err(e) => {
                state.error_msg.set(Some(format!("Failed to load measurements: {e}")));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: Rebuild all four charts on every selection ───
    // Re-runs whenever loading, selected_metric, table or palettes change.
    use_effect(move || {
        if (state.loading)() {
            return;
        }
        let metric = (state.selected_metric)();
        let palettes = state.palettes.read().clone();
        // Cheap clone (Arc) so the signal borrow ends before rendering.
        let Some(table) = state.table.read().clone() else {
            return;
        };

        match veg_chart::update(&table, metric.as_str(), &palettes) {
            Ok(charts) => {
                state.error_msg.set(None);
                for (container_id, spec) in charts.with_container_ids() {
                    js_bridge::render_chart(container_id, spec);
                }
            }
            Err(e) => {
                log::warn!("[veg] dashboard: selection {} rejected: {}", metric, e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    });

    // ─── Render ───
    rsx! {
        div {
            style: "max-width: 1100px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "NDVI and NDWI Data Visualization".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            MapFrame { id: MAP_CONTAINER_ID.to_string() }

            if *state.loading.read() {
                LoadingSpinner {}
            } else {
                MetricSelector {}

                for id in CONTAINER_IDS {
                    ChartContainer {
                        key: "{id}",
                        id: id.to_string(),
                    }
                }
            }
        }
    }
}
