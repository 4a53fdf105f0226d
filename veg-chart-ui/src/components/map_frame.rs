//! Static study-area map.

use crate::js_bridge;
use dioxus::prelude::*;
use veg_core::region::MapOverlay;

#[derive(Props, Clone, PartialEq)]
pub struct MapFrameProps {
    /// The DOM id Leaflet will render into
    pub id: String,
    #[props(default = 600)]
    pub height: u32,
}

/// Map with the study-area polygon. Drawn once on mount; it does not react
/// to the metric selection.
#[component]
pub fn MapFrame(props: MapFrameProps) -> Element {
    let id = props.id.clone();
    use_effect(move || {
        js_bridge::render_region_map(&id, &MapOverlay::study_area());
    });

    let style = format!("width: 100%; height: {}px;", props.height);
    rsx! {
        div {
            style: "text-align: center; margin: 8px 0;",
            div {
                id: "{props.id}",
                style: "{style}",
            }
        }
    }
}
