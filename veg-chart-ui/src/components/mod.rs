//! Reusable Dioxus RSX components for the dashboard.

mod chart_container;
mod chart_header;
mod error_display;
mod loading_spinner;
mod map_frame;
mod metric_selector;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_frame::MapFrame;
pub use metric_selector::MetricSelector;
