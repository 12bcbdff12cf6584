//! Page header with the viewer title and description.

use dioxus::prelude::*;

/// Title banner for the viewer.
#[component]
pub fn ViewerHeader() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: center; padding: 16px 40px; background: #0f172a;",
            h1 {
                style: "margin: 0; font-size: 36px; color: white; letter-spacing: 0.05em;",
                "WHALE DATA VIEWER"
            }
            div {
                style: "width: 4px; align-self: stretch; background: #1e40af;",
            }
            h2 {
                style: "flex: 1 1 240px; margin: 0; font-size: 18px; font-weight: normal; color: white;",
                "View charts and maps of whale sightings from the lighthouse on the Farallon Islands, near San Francisco, CA."
            }
        }
    }
}
