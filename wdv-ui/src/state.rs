//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the `ViewCoordinator` in a signal and provides the
//! handlers components call. Each handler updates the coordinator and, when
//! it asks for a fetch, spawns that fetch and hands the result back with its
//! request token. Child components retrieve it with `use_context::<AppState>()`.

use crate::config::ViewerConfig;
use dioxus::prelude::*;
use wdv_sightings::client::SightingsClient;
use wdv_sightings::error::FetchError;
use wdv_sightings::month::Month;
use wdv_view::{Resolution, SightingsRequest, ViewCoordinator};

/// Shared state for the whale data viewer.
#[derive(Clone, Copy)]
pub struct AppState {
    /// All view state; every write goes through the coordinator
    pub view: Signal<ViewCoordinator>,
    /// Client for the sightings service, or why one could not be built
    pub client: Signal<Result<SightingsClient, FetchError>>,
}

impl AppState {
    /// Create the state for a viewport of `width` pixels.
    pub fn new(config: ViewerConfig, width: u32) -> Self {
        let client = config.endpoints().map(SightingsClient::new);
        if let Err(e) = &client {
            log::error!("Invalid sightings service url {}: {}", config.api_base, e);
        }
        Self {
            view: Signal::new(ViewCoordinator::new(width)),
            client: Signal::new(client),
        }
    }

    /// Fetch the species and years lists. Only the first call does anything.
    pub fn load_catalog(mut self) {
        if !self.view.write().begin_catalog_load() {
            return;
        }
        let client = self.client.peek().clone();
        spawn(async move {
            let result = match client {
                Ok(client) => client.fetch_catalog().await,
                Err(e) => Err(e),
            };
            let mut view = self.view;
            match view.try_write() {
                Ok(mut coordinator) => coordinator.finish_catalog_load(result),
                Err(_) => log::warn!("View dropped before the catalog arrived"),
            };
        });
    }

    pub fn select_species(mut self, species: String) {
        let request = self.view.write().select_species(species);
        if let Some(request) = request {
            self.load_sightings(request);
        }
    }

    pub fn select_year(mut self, year: i32) {
        let request = self.view.write().select_year(year);
        if let Some(request) = request {
            self.load_sightings(request);
        }
    }

    pub fn select_month(mut self, month: Option<Month>) {
        self.view.write().select_month(month);
    }

    pub fn toggle_mobile_map(mut self) {
        self.view.write().toggle_mobile_map();
    }

    /// Record a new viewport width. Skips the signal write when unchanged so
    /// a burst of resize events does not re-render the view.
    pub fn resize(mut self, width: u32) {
        if self.view.peek().width() != width {
            self.view.write().resize(width);
        }
    }

    fn load_sightings(self, request: SightingsRequest) {
        let client = self.client.peek().clone();
        spawn(async move {
            let result = match client {
                Ok(client) => client.fetch_sightings(request.query()).await,
                Err(e) => Err(e),
            };
            let mut view = self.view;
            match view.try_write() {
                Ok(mut coordinator) => {
                    if coordinator.finish_sightings_load(&request, result) == Resolution::Discarded {
                        log::info!("Ignored response for request {}", request.generation());
                    }
                }
                Err(_) => log::warn!("View dropped before sightings arrived"),
            };
        });
    }
}
