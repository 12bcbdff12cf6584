use crate::error::FetchError;
use serde_json::Value;
use std::sync::Arc;

/// The species/year pair a filtered sightings request is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SightingsQuery {
    pub species: String,
    pub year: i32,
}

impl SightingsQuery {
    pub fn new(species: impl Into<String>, year: i32) -> Self {
        Self {
            species: species.into(),
            year,
        }
    }
}

/// Sighting records for one `(species, year)` pair.
///
/// The record shape belongs to the data service and the chart/map scripts,
/// so the body is held as an opaque JSON document and passed through as-is.
/// Cloning shares the underlying document.
#[derive(Debug, Clone)]
pub struct SightingData(Arc<Value>);

impl SightingData {
    pub fn from_value(value: Value) -> Self {
        SightingData(Arc::new(value))
    }

    /// Parse the filtered endpoint's JSON body.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Serialize back to a JSON string for the JS chart and map scripts.
    pub fn to_json(&self) -> String {
        self.0.to_string()
    }

    /// Number of records when the body is a JSON array.
    pub fn record_count(&self) -> Option<usize> {
        self.0.as_array().map(Vec::len)
    }
}

impl PartialEq for SightingData {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

#[cfg(test)]
mod tests {
    use super::{SightingData, SightingsQuery};
    use serde_json::json;

    #[test]
    fn test_parse_sightings_array() {
        let data = SightingData::from_json(
            r#"[{"month": 3, "count": 4}, {"month": 4, "count": 1}]"#,
        )
        .unwrap();
        assert_eq!(data.record_count(), Some(2));
        assert_eq!(data.as_value()[0]["count"], json!(4));
    }

    #[test]
    fn test_non_array_body_is_passed_through() {
        let data = SightingData::from_json(r#"{"type": "FeatureCollection"}"#).unwrap();
        assert_eq!(data.record_count(), None);
        assert_eq!(data.to_json(), r#"{"type":"FeatureCollection"}"#);
    }

    #[test]
    fn test_clones_compare_equal() {
        let data = SightingData::from_value(json!([1, 2, 3]));
        let shared = data.clone();
        assert_eq!(data, shared);
        assert_ne!(data, SightingData::from_value(json!([1, 2])));
    }

    #[test]
    fn test_query_equality() {
        assert_eq!(
            SightingsQuery::new("Gray Whale", 2020),
            SightingsQuery::new(String::from("Gray Whale"), 2020)
        );
        assert_ne!(
            SightingsQuery::new("Gray Whale", 2020),
            SightingsQuery::new("Gray Whale", 2021)
        );
    }
}
