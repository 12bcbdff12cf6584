use thiserror::Error;

/// Errors that can occur when fetching or parsing data from the sightings service.
///
/// Kept `Clone` + `PartialEq` so a failure can be stored in view state and
/// compared in tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The configured base URL could not be parsed or joined.
    #[error("invalid endpoint url: {0}")]
    Url(String),
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The service answered with a non-success status code.
    #[error("unexpected response status {0}")]
    Status(u16),
    /// The response body was not the JSON we expected.
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

impl From<url::ParseError> for FetchError {
    fn from(e: url::ParseError) -> Self {
        FetchError::Url(e.to_string())
    }
}

#[cfg(feature = "api")]
impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FetchError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(e.to_string())
        }
    }
}

/// A month number outside `1..=12`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("month {0} is outside 1..=12")]
pub struct InvalidMonth(pub u8);
