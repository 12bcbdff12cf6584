//! Catalog and sightings load state.
//!
//! The catalog is loaded once at startup. Sightings are reloaded every time
//! the species/year pair changes; each load hands out a [`SightingsRequest`]
//! token and only the newest token may write its result back, so a slow
//! response for an old selection never replaces fresher data.

use crate::load_state::LoadState;
use log::{debug, error, info, warn};
use wdv_sightings::catalog::Catalog;
use wdv_sightings::error::FetchError;
use wdv_sightings::sighting::{SightingData, SightingsQuery};

/// Token for one in-flight sightings fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SightingsRequest {
    generation: u64,
    query: SightingsQuery,
}

impl SightingsRequest {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn query(&self) -> &SightingsQuery {
        &self.query
    }
}

/// What happened to a finished sightings fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    Discarded,
}

#[derive(Debug, Default)]
pub struct DataLoader {
    catalog: LoadState<Catalog>,
    sightings: LoadState<SightingData>,
    /// Generation of the most recently issued sightings request (0 = none yet).
    generation: u64,
}

impl DataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn catalog(&self) -> &LoadState<Catalog> {
        &self.catalog
    }

    pub fn sightings(&self) -> &LoadState<SightingData> {
        &self.sightings
    }

    /// Mark the catalog as loading. Returns `true` only the first time.
    pub fn begin_catalog_load(&mut self) -> bool {
        if !self.catalog.is_idle() {
            debug!("Catalog load already started, ignoring");
            return false;
        }
        self.catalog = LoadState::Loading;
        true
    }

    pub fn finish_catalog_load(&mut self, result: Result<Catalog, FetchError>) {
        if let Err(e) = &result {
            error!("Failed to load species and years: {}", e);
        }
        self.catalog.resolve(result);
    }

    /// Issue a new sightings request, superseding any still in flight.
    ///
    /// The previous sighting set is dropped right away; it belongs to a
    /// different selection and must not stay on screen while we wait.
    pub fn begin_sightings_load(&mut self, query: SightingsQuery) -> SightingsRequest {
        self.generation += 1;
        self.sightings = LoadState::Loading;
        info!(
            "Loading sightings for {} {} (request {})",
            query.species, query.year, self.generation
        );
        SightingsRequest {
            generation: self.generation,
            query,
        }
    }

    /// Whether `request` is the newest one issued.
    pub fn is_current(&self, request: &SightingsRequest) -> bool {
        request.generation == self.generation
    }

    pub fn finish_sightings_load(
        &mut self,
        request: &SightingsRequest,
        result: Result<SightingData, FetchError>,
    ) -> Resolution {
        if !self.is_current(request) {
            warn!(
                "Discarding stale sightings for {} {} (request {}, latest {})",
                request.query.species, request.query.year, request.generation, self.generation
            );
            return Resolution::Discarded;
        }
        if let Err(e) = &result {
            error!(
                "Failed to load sightings for {} {}: {}",
                request.query.species, request.query.year, e
            );
        }
        self.sightings.resolve(result);
        Resolution::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        Catalog {
            species: vec!["Blue Whale".to_string(), "Gray Whale".to_string()],
            years: vec![2019, 2020],
        }
    }

    #[test]
    fn test_catalog_loads_once() {
        let mut loader = DataLoader::new();
        assert!(loader.begin_catalog_load());
        assert!(loader.catalog().is_loading());
        assert!(!loader.begin_catalog_load());

        loader.finish_catalog_load(Ok(catalog()));
        assert_eq!(loader.catalog().loaded(), Some(&catalog()));
        assert!(!loader.begin_catalog_load());
    }

    #[test]
    fn test_catalog_failure_is_distinct_from_loading() {
        let mut loader = DataLoader::new();
        loader.begin_catalog_load();
        loader.finish_catalog_load(Err(FetchError::Transport("offline".to_string())));
        assert!(!loader.catalog().is_loading());
        assert!(loader.catalog().loaded().is_none());
        assert_eq!(
            loader.catalog().failure(),
            Some(&FetchError::Transport("offline".to_string()))
        );
    }

    #[test]
    fn test_new_request_clears_previous_data() {
        let mut loader = DataLoader::new();
        let first = loader.begin_sightings_load(SightingsQuery::new("Blue Whale", 2019));
        loader.finish_sightings_load(&first, Ok(SightingData::from_value(json!([1]))));
        assert!(loader.sightings().loaded().is_some());

        loader.begin_sightings_load(SightingsQuery::new("Blue Whale", 2020));
        assert!(loader.sightings().is_loading());
        assert!(loader.sightings().loaded().is_none());
    }

    #[test]
    fn test_out_of_order_responses_keep_newest() {
        let mut loader = DataLoader::new();
        let a = loader.begin_sightings_load(SightingsQuery::new("A", 2020));
        let b = loader.begin_sightings_load(SightingsQuery::new("B", 2021));
        assert!(b.generation() > a.generation());

        let b_data = SightingData::from_value(json!([{"species": "B"}]));
        assert_eq!(
            loader.finish_sightings_load(&b, Ok(b_data.clone())),
            Resolution::Applied
        );
        assert_eq!(
            loader.finish_sightings_load(&a, Ok(SightingData::from_value(json!([{"species": "A"}])))),
            Resolution::Discarded
        );
        assert_eq!(loader.sightings().loaded(), Some(&b_data));
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut loader = DataLoader::new();
        let a = loader.begin_sightings_load(SightingsQuery::new("A", 2020));
        let b = loader.begin_sightings_load(SightingsQuery::new("B", 2021));
        assert_eq!(
            loader.finish_sightings_load(&a, Err(FetchError::Status(500))),
            Resolution::Discarded
        );
        assert!(loader.sightings().is_loading());
        assert_eq!(
            loader.finish_sightings_load(&b, Err(FetchError::Status(404))),
            Resolution::Applied
        );
        assert_eq!(loader.sightings().failure(), Some(&FetchError::Status(404)));
    }

    #[test]
    fn test_failure_replaces_old_data() {
        let mut loader = DataLoader::new();
        let a = loader.begin_sightings_load(SightingsQuery::new("A", 2020));
        loader.finish_sightings_load(&a, Ok(SightingData::from_value(json!([1, 2]))));

        let b = loader.begin_sightings_load(SightingsQuery::new("B", 2020));
        loader.finish_sightings_load(&b, Err(FetchError::Decode("eof".to_string())));
        assert!(loader.sightings().loaded().is_none());
        assert!(loader.sightings().failure().is_some());
    }
}
