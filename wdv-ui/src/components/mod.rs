//! Reusable Dioxus RSX components for the whale data viewer.

mod error_display;
mod loading_spinner;
mod mobile_map_toggle;
mod selector;
mod sighting_map;
mod sightings_chart;
mod viewer_header;

pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use mobile_map_toggle::MobileMapToggle;
pub use selector::Selector;
pub use sighting_map::{MapKind, SightingMap};
pub use sightings_chart::SightingsChart;
pub use viewer_header::ViewerHeader;
