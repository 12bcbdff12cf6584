pub mod catalog;
#[cfg(feature = "api")]
pub mod client;
pub mod endpoint;
pub mod error;
pub mod month;
pub mod sighting;
