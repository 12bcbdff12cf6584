//! Shared Dioxus layer for the whale data viewer.
//!
//! This crate provides:
//! - `config`: where the sightings service lives
//! - `state`: `AppState`, the signal wrapper around `wdv_view::ViewCoordinator`
//! - `js_bridge`: Rust wrappers for the D3.js chart and Leaflet map scripts
//! - `viewport`: window width reads and the resize listener guard
//! - `components`: reusable RSX components (selectors, chart, maps, toggle)

pub mod components;
pub mod config;
pub mod js_bridge;
pub mod state;
pub mod viewport;
