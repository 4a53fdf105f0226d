//! Dropdown selector for choosing the metric that drives the quarter view.

use crate::state::AppState;
use dioxus::prelude::*;
use veg_core::Metric;

/// Metric dropdown selector.
/// Updates `selected_metric` on change; values outside the known metrics are ignored.
#[component]
pub fn MetricSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_metric)();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Metric>() {
        Ok(metric) => state.selected_metric.set(metric),
        Err(e) => log::warn!("[veg] metric_selector: ignoring selection: {}", e),
    };

    rsx! {
        div {
            style: "width: 50%; margin: 8px auto;",
            label {
                r#for: "feature-selector",
                style: "font-weight: bold; margin-right: 8px;",
                "Metric: "
            }
            select {
                id: "feature-selector",
                onchange: on_change,
                for metric in Metric::ALL {
                    option {
                        value: metric.as_str(),
                        selected: metric == selected,
                        {metric.label()}
                    }
                }
            }
        }
    }
}
