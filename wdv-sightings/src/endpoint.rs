use crate::error::FetchError;
use crate::sighting::SightingsQuery;
use url::Url;

/// Path of the sightings resource. Without a query string it returns the
/// catalog; with `species` and `year` it returns the filtered records.
pub const SIGHTINGS_PATH: &str = "/api/sightings";

/// Fallback service location when no browser origin is available.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Resolved URLs for the sightings service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    catalog: Url,
}

impl Endpoints {
    /// Resolve the endpoints against a base such as `https://example.org`.
    ///
    /// Any path on the base is replaced by [`SIGHTINGS_PATH`].
    pub fn new(base: &str) -> Result<Self, FetchError> {
        let base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(FetchError::Url(format!("{} cannot be a base url", base)));
        }
        let catalog = base.join(SIGHTINGS_PATH)?;
        Ok(Self { catalog })
    }

    /// `GET /api/sightings`
    pub fn catalog_url(&self) -> Url {
        self.catalog.clone()
    }

    /// `GET /api/sightings?species=<species>&year=<year>`
    pub fn sightings_url(&self, query: &SightingsQuery) -> Url {
        let mut url = self.catalog.clone();
        url.query_pairs_mut()
            .append_pair("species", &query.species)
            .append_pair("year", &query.year.to_string());
        url
    }
}
