//! Inline error banner.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Show a button that clears `AppState::error_msg`
    #[props(default = true)]
    pub dismissible: bool,
}

/// Error banner shown above the charts. Pipeline errors (an unreadable
/// dataset, a rejected selection) land here instead of aborting the app.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; padding: 12px 16px; margin: 8px 0; background: #FFF3E0; color: #BF360C; border-radius: 4px; border: 1px solid #FFCC80;",
            span {
                strong { "Could not update charts: " }
                "{props.message}"
            }
            if props.dismissible {
                button {
                    onclick: move |_| state.error_msg.set(None),
                    "Dismiss"
                }
            }
        }
    }
}
