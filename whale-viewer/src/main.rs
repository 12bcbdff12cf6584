//! Whale Data Viewer
//!
//! Charts and maps of whale sightings from the Farallon Islands lighthouse.
//! The user picks a species and a year from dropdowns filled by the catalog
//! endpoint; the matching sightings drive a per-month D3 chart and a Leaflet
//! map.
//!
//! Data flow:
//! 1. On mount, the chart/map scripts are initialized and the catalog
//!    (`GET /api/sightings`) is fetched once.
//! 2. Picking a species or year goes through `AppState`, which asks the
//!    `ViewCoordinator` whether a filtered fetch is needed and spawns it.
//! 3. Each render reads the coordinator's `Visibility` to decide which of
//!    chart, mobile map, desktop map and toggle are mounted.
//! 4. A window `resize` listener feeds the width back in; it is detached
//!    when the view is torn down.

use dioxus::prelude::*;
use std::rc::Rc;
use wdv_sightings::sighting::{SightingData, SightingsQuery};
use wdv_ui::components::{
    ErrorDisplay, LoadingSpinner, MapKind, MobileMapToggle, Selector, SightingMap, SightingsChart,
    ViewerHeader,
};
use wdv_ui::config::ViewerConfig;
use wdv_ui::js_bridge;
use wdv_ui::state::AppState;
use wdv_ui::viewport::{self, ResizeListener};
use wdv_view::visibility::is_narrow;

/// Root element id in `index.html`.
const ROOT_NAME: &str = "whale-viewer-root";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname(ROOT_NAME))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(|| {
        AppState::new(ViewerConfig::from_window(), viewport::current_width())
    });

    // One-time startup: chart/map scripts and the catalog fetch
    use_hook(move || {
        js_bridge::init_scripts();
        state.load_catalog();
    });

    let resize = use_hook(move || {
        Rc::new(ResizeListener::attach(move |width| state.resize(width)))
    });
    use_drop(move || resize.detach());

    let view = state.view.read();
    let visibility = view.visibility();
    let narrow = is_narrow(view.width());
    let mobile_map_visible = view.mobile_map_visible();

    let catalog_loading = view.catalog().is_loading();
    let catalog_error = view.catalog().failure().map(ToString::to_string);
    let (species_options, year_options): (Vec<String>, Vec<String>) = view
        .catalog()
        .loaded()
        .map(|c| {
            (
                c.species.clone(),
                c.years.iter().map(ToString::to_string).collect(),
            )
        })
        .unwrap_or_default();

    let selection = view.selection().clone();
    let selected_species = selection.species().map(str::to_string);
    let selected_year = selection.year().map(|y| y.to_string());
    let selected_month = selection.month();

    let sightings_loading = view.sightings().is_loading();
    let sightings_error = view.sightings().failure().map(ToString::to_string);
    let data: Option<SightingData> = view.sighting_data().cloned();
    drop(view);

    let chart: Option<(SightingsQuery, SightingData)> = if visibility.show_chart {
        selection.query().zip(data.clone())
    } else {
        None
    };
    let mobile_map_data = if visibility.show_mobile_map {
        data.clone()
    } else {
        None
    };

    let layout = if narrow { "column" } else { "row" };
    let half = if narrow { "100%" } else { "50%" };

    rsx! {
        div {
            style: "display: flex; flex-direction: {layout}; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            section {
                style: "flex: 0 0 {half}; min-height: 100vh; background: #f1f5f9;",

                ViewerHeader {}

                div {
                    style: "padding: 0 40px;",
                    h3 {
                        style: "margin: 0; padding: 20px 0 12px; font-size: 16px; color: #1e3a8a;",
                        "Please select a species and a year."
                    }

                    if let Some(err) = catalog_error {
                        ErrorDisplay { context: "species and years".to_string(), message: err }
                    } else if catalog_loading {
                        LoadingSpinner { label: "Loading species and years...".to_string() }
                    }

                    div {
                        style: "display: flex; flex-direction: row; gap: 28px;",
                        Selector {
                            name: "Species".to_string(),
                            options: species_options,
                            selected: selected_species,
                            on_select: move |species: String| state.select_species(species),
                        }
                        Selector {
                            name: "Years".to_string(),
                            options: year_options,
                            selected: selected_year,
                            on_select: move |value: String| match value.parse::<i32>() {
                                Ok(year) => state.select_year(year),
                                Err(e) => log::warn!("Ignoring year {:?}: {}", value, e),
                            },
                        }
                    }

                    if let Some(err) = sightings_error {
                        ErrorDisplay { context: "sightings".to_string(), message: err }
                    } else if sightings_loading {
                        LoadingSpinner {}
                    }
                }

                if visibility.show_toggle {
                    MobileMapToggle {
                        map_visible: mobile_map_visible,
                        alignment: visibility.toggle_alignment,
                        on_toggle: move |_| state.toggle_mobile_map(),
                    }
                }

                if let Some((query, data)) = chart {
                    div {
                        style: "padding: 0 40px 24px;",
                        SightingsChart {
                            species: query.species,
                            year: query.year,
                            data: data,
                            on_select_month: move |month| state.select_month(month),
                        }
                    }
                }

                if visibility.show_mobile_map {
                    SightingMap {
                        kind: MapKind::Mobile,
                        data: mobile_map_data,
                        selected_month: selected_month,
                        visible: mobile_map_visible,
                    }
                }
            }

            if visibility.show_desktop_map {
                section {
                    style: "flex: 0 0 50%;",
                    SightingMap {
                        kind: MapKind::Desktop,
                        data: data,
                        selected_month: selected_month,
                        visible: true,
                    }
                }
            }
        }
    }
}
