//! Shared Dioxus components and plotly.js bridge for the NDVI/NDWI dashboard.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for plotly.js / Leaflet via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (metric selector, containers, etc.)

pub mod components;
pub mod js_bridge;
pub mod state;
