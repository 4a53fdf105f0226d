//! Page header with title and optional caption.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    /// Caption under the title (e.g. where the data comes from)
    #[props(default = String::new())]
    pub caption: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px; text-align: center;",
            h1 {
                style: "margin: 0 0 4px 0; font-size: 24px;",
                "{props.title}"
            }
            if !props.caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{props.caption}"
                }
            }
        }
    }
}
