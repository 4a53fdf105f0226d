//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use veg_chart::Palettes;
use veg_core::{MeasurementTable, Metric};

/// Shared state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Base measurement table (None until loaded). Read-only once set.
    pub table: Signal<Option<MeasurementTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Metric chosen in the dropdown
    pub selected_metric: Signal<Metric>,
    /// Series colors
    pub palettes: Signal<Palettes>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            selected_metric: Signal::new(Metric::default()),
            palettes: Signal::new(Palettes::default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
