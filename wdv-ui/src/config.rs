//! Runtime configuration for the viewer.

use wdv_sightings::endpoint::{Endpoints, DEFAULT_BASE_URL};
use wdv_sightings::error::FetchError;

/// Where the sightings service lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    /// Scheme + host (+ port) of the service, e.g. `https://whales.example.org`.
    pub api_base: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ViewerConfig {
    /// The service is served from the same origin as the page.
    pub fn from_window() -> Self {
        let origin = web_sys::window().and_then(|w| w.location().origin().ok());
        match origin {
            Some(origin) if !origin.is_empty() && origin != "null" => Self { api_base: origin },
            _ => {
                log::warn!(
                    "No page origin available, using {} for the sightings service",
                    DEFAULT_BASE_URL
                );
                Self::default()
            }
        }
    }

    pub fn endpoints(&self) -> Result<Endpoints, FetchError> {
        Endpoints::new(&self.api_base)
    }
}
