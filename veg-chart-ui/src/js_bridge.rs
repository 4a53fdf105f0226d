//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The plotly.js and Leaflet glue lives in `assets/js/*.js`; it is evaluated
//! at global scope once the libraries have loaded and exposed via `window.*`.
//! This module serializes chart specs and calls those globals.

use veg_chart::{plotly, ChartSpec};
use veg_core::region::MapOverlay;

static PLOTLY_CHART_JS: &str = include_str!("../assets/js/plotly-chart.js");
static REGION_MAP_JS: &str = include_str!("../assets/js/region-map.js");

const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const LEAFLET_SRC: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('VEG JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding inside a single-quoted JS string.
fn escape_for_js(json: &str) -> String {
    json.replace('\\', "\\\\").replace('\'', "\\'").replace('\n', "")
}

/// Append the plotly.js and Leaflet tags to `<head>` unless already present.
pub fn load_libraries() {
    call_js(&format!(
        r#"
        (function() {{
            function addScript(src) {{
                if (document.querySelector('script[src="' + src + '"]')) return;
                var s = document.createElement('script');
                s.src = src;
                document.head.appendChild(s);
            }}
            if (!document.querySelector('link[href="{LEAFLET_CSS}"]')) {{
                var link = document.createElement('link');
                link.rel = 'stylesheet';
                link.href = '{LEAFLET_CSS}';
                document.head.appendChild(link);
            }}
            addScript('{PLOTLY_SRC}');
            addScript('{LEAFLET_SRC}');
        }})();
        "#,
    ));
}

/// Initialize the chart and map scripts once Plotly and Leaflet are present.
///
/// The script files declare plain functions; they are evaluated with an
/// indirect `eval` so the declarations land on the global object rather
/// than inside the polling callback.
pub fn init_charts() {
    let all_js = [PLOTLY_CHART_JS, REGION_MAP_JS].join("\n");
    let store_js = format!(
        "window.__vegChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForLibs = setInterval(function() {
                if (typeof Plotly !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__vegChartScripts);
                    delete window.__vegChartScripts;
                    if (typeof renderPlotlyChart !== 'undefined') window.renderPlotlyChart = renderPlotlyChart;
                    if (typeof renderRegionMap !== 'undefined') window.renderRegionMap = renderRegionMap;
                    window.__vegChartsReady = true;
                    console.log('VEG charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Poll until the scripts are ready and `container_id` exists, then call
/// `window.<function>(container_id, payload)`.
fn render_when_ready(function: &str, container_id: &str, payload_json: &str) {
    let escaped = escape_for_js(payload_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__vegChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped}');
                    }} catch(e) {{ console.error('[VEG] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render (or re-render in place) one chart spec with plotly.js.
pub fn render_chart(container_id: &str, spec: &ChartSpec) {
    let figure = plotly::figure(spec).to_string();
    log::debug!(
        "[veg] js_bridge: rendering {} series into #{}",
        spec.series.len(),
        container_id
    );
    render_when_ready("renderPlotlyChart", container_id, &figure);
}

/// Draw the static study-area polygon on a Leaflet base map.
pub fn render_region_map(container_id: &str, overlay: &MapOverlay) {
    match overlay.to_json() {
        Ok(json) => render_when_ready("renderRegionMap", container_id, &json),
        Err(e) => log::warn!("[veg] js_bridge: could not serialize map overlay: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plotly_script_redraws_in_place() {
        assert!(PLOTLY_CHART_JS.contains("function renderPlotlyChart"));
        assert!(PLOTLY_CHART_JS.contains("Plotly.react"));
        assert!(!PLOTLY_CHART_JS.contains("Plotly.newPlot"));
    }

    #[test]
    fn test_escape_for_js() {
        assert_eq!(escape_for_js(r#"{"t":"it's"}"#), r#"{"t":"it\'s"}"#);
        assert_eq!(escape_for_js("a\\nb\n"), "a\\\\nb");
    }
}
