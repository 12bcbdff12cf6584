//! HTTP client for the sightings service.
//!
//! Works both in the browser (reqwest's WASM backend wraps `fetch`) and in
//! the native CLI. No retries: a failed load is reported to the caller,
//! which records it in view state.

use crate::catalog::Catalog;
use crate::endpoint::Endpoints;
use crate::error::FetchError;
use crate::sighting::{SightingData, SightingsQuery};
use log::{info, warn};
use reqwest::{Client, Url};

#[derive(Debug, Clone)]
pub struct SightingsClient {
    http: Client,
    endpoints: Endpoints,
}

impl SightingsClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self::with_client(Client::new(), endpoints)
    }

    /// Use a preconfigured `reqwest::Client` (timeouts, headers).
    pub fn with_client(http: Client, endpoints: Endpoints) -> Self {
        Self { http, endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Fetch the species and years lists.
    pub async fn fetch_catalog(&self) -> Result<Catalog, FetchError> {
        let body = self.get_text(self.endpoints.catalog_url()).await?;
        let catalog = Catalog::from_json(&body)?;
        info!(
            "Catalog loaded: {} species, {} years",
            catalog.species.len(),
            catalog.years.len()
        );
        Ok(catalog)
    }

    /// Fetch the sighting records for one species and year.
    pub async fn fetch_sightings(
        &self,
        query: &SightingsQuery,
    ) -> Result<SightingData, FetchError> {
        let body = self.get_text(self.endpoints.sightings_url(query)).await?;
        let data = SightingData::from_json(&body)?;
        match data.record_count() {
            Some(count) => info!(
                "Sightings loaded for {} {}: {} records",
                query.species, query.year, count
            ),
            None => info!("Sightings loaded for {} {}", query.species, query.year),
        }
        Ok(data)
    }

    async fn get_text(&self, url: Url) -> Result<String, FetchError> {
        let response = self.http.get(url.clone()).send().await.map_err(|e| {
            warn!("Request to {} failed: {}", url, e);
            FetchError::from(e)
        })?;
        let status = response.status();
        if !status.is_success() {
            warn!("Bad response status from {}: {}", url, status);
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
