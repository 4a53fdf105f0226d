//! Plot target for one dashboard chart.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// One of `veg_chart::spec::CONTAINER_IDS`; plotly.js renders into it
    pub id: String,
    #[props(default = 450)]
    pub min_height: u32,
}

fn container_style(min_height: u32) -> String {
    format!("min-height: {min_height}px; width: 100%; margin: 12px 0;")
}

/// Empty div that `js_bridge::render_chart` fills. The figure is redrawn in
/// place on every selection, so the element itself never changes.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = container_style(props.min_height);
    rsx! {
        div {
            id: "{props.id}",
            class: "veg-plot",
            style: "{style}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_container_style_uses_min_height() {
        assert_eq!(
            container_style(450),
            "min-height: 450px; width: 100%; margin: 12px 0;"
        );
    }
}
