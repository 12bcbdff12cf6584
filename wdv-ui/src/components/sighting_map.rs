//! Leaflet map of sighting locations.

use crate::js_bridge;
use dioxus::prelude::*;
use wdv_sightings::month::Month;
use wdv_sightings::sighting::SightingData;

/// Farallon Islands lighthouse.
const MAP_CENTER: [f64; 2] = [37.6989, -123.0034];
const MAP_ZOOM: u8 = 10;

/// Which layout slot a map occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapKind {
    /// Shares the narrow-viewport region with the chart
    Mobile,
    /// Always mounted beside the chart on wide viewports
    Desktop,
}

impl MapKind {
    pub fn as_str(self) -> &'static str {
        match self {
            MapKind::Mobile => "mobile",
            MapKind::Desktop => "desktop",
        }
    }

    pub fn container_id(self) -> &'static str {
        match self {
            MapKind::Mobile => "sighting-map-mobile",
            MapKind::Desktop => "sighting-map-desktop",
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct SightingMapProps {
    pub kind: MapKind,
    /// `None` draws the base map without markers
    #[props(!optional)]
    pub data: Option<SightingData>,
    #[props(!optional)]
    pub selected_month: Option<Month>,
    #[props(default = true)]
    pub visible: bool,
}

#[component]
pub fn SightingMap(props: SightingMapProps) -> Element {
    let kind = props.kind;
    let id = kind.container_id();
    use_drop(move || js_bridge::destroy_sighting_map(kind.container_id()));

    let data_json = props
        .data
        .as_ref()
        .map(SightingData::to_json)
        .unwrap_or_else(|| "null".to_string());
    let config_json = serde_json::json!({
        "mapType": kind.as_str(),
        "selectedMonth": props.selected_month.map(Month::number),
        "mapVisible": props.visible,
        "center": MAP_CENTER,
        "zoom": MAP_ZOOM,
    })
    .to_string();

    use_effect(use_reactive(
        (&data_json, &config_json),
        move |(data_json, config_json)| {
            js_bridge::render_sighting_map(kind.container_id(), &data_json, &config_json);
        },
    ));

    let height = match kind {
        MapKind::Mobile => "60vh",
        MapKind::Desktop => "100vh",
    };

    rsx! {
        div {
            id: id,
            "data-map-type": kind.as_str(),
            style: "width: 100%; height: {height};",
        }
    }
}
