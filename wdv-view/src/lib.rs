//! View-state coordination for the whale data viewer.
//!
//! This crate has no browser dependency. It holds the state that decides
//! what the viewer fetches and which surfaces it shows:
//! - `loader`: catalog and sightings load states, with request tokens
//!   that discard stale responses
//! - `selection`: the user's species/year/month picks
//! - `visibility`: the responsive chart/map/toggle decision
//! - `coordinator`: `ViewCoordinator`, the single owner tying them together
//!
//! The Dioxus shell in `wdv-ui` drives it: event handlers call into the
//! coordinator and spawn whatever fetch it asks for.

pub mod coordinator;
pub mod load_state;
pub mod loader;
pub mod selection;
pub mod visibility;

pub use coordinator::ViewCoordinator;
pub use load_state::LoadState;
pub use loader::{Resolution, SightingsRequest};
pub use visibility::{ToggleAlignment, Visibility, BREAKPOINT};
