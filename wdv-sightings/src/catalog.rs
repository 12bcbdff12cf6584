use crate::error::FetchError;
use serde::{Deserialize, Serialize};

/// The species and years available from the sightings service.
///
/// Returned by `GET /api/sightings` as `{ "species": [...], "years": [...] }`
/// and used to populate the selection dropdowns. Both lists keep the order
/// the service sent them in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub species: Vec<String>,
    pub years: Vec<i32>,
}

impl Catalog {
    /// Parse the catalog endpoint's JSON body.
    pub fn from_json(body: &str) -> Result<Catalog, FetchError> {
        Ok(serde_json::from_str(body)?)
    }

    pub fn contains_species(&self, species: &str) -> bool {
        self.species.iter().any(|s| s == species)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        self.years.contains(&year)
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty() && self.years.is_empty()
    }
}
