//! Sightings-per-month chart for the current selection.

use crate::js_bridge::{self, MonthSelectBridge};
use dioxus::prelude::*;
use std::rc::Rc;
use wdv_sightings::month::Month;
use wdv_sightings::sighting::SightingData;

/// DOM id the D3 chart renders into.
pub const CHART_ID: &str = "sightings-chart";

#[derive(Props, Clone, PartialEq)]
pub struct SightingsChartProps {
    pub species: String,
    pub year: i32,
    pub data: SightingData,
    /// Called when the user picks (or clears) a month on the chart
    pub on_select_month: EventHandler<Option<Month>>,
    #[props(default = 400)]
    pub min_height: u32,
}

/// Container div for the D3 month chart.
///
/// Re-renders the chart whenever species, year or data change, and keeps
/// the chart's month callback installed while mounted.
#[component]
pub fn SightingsChart(props: SightingsChartProps) -> Element {
    let on_select_month = props.on_select_month;
    let _bridge = use_hook(|| {
        Rc::new(MonthSelectBridge::install(move |month| {
            on_select_month.call(month)
        }))
    });
    use_drop(|| js_bridge::destroy_month_chart(CHART_ID));

    let data_json = props.data.to_json();
    let config_json = chart_config(&props.species, props.year);

    use_effect(use_reactive(
        (&data_json, &config_json),
        |(data_json, config_json)| {
            log::debug!("Rendering month chart ({} bytes)", data_json.len());
            js_bridge::render_month_chart(CHART_ID, &data_json, &config_json);
        },
    ));

    let style = format!(
        "min-height: {}px; position: relative; width: 100%;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: CHART_ID,
                style: "width: 100%;",
            }
        }
    }
}

fn chart_config(species: &str, year: i32) -> String {
    let month_names: Vec<&str> = (1..=12)
        .filter_map(|n| Month::new(n).ok())
        .map(Month::name)
        .collect();
    serde_json::json!({
        "title": format!("{} sightings in {}", species, year),
        "species": species,
        "year": year,
        "monthNames": month_names,
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::chart_config;

    #[test]
    fn test_chart_config() {
        let config: serde_json::Value =
            serde_json::from_str(&chart_config("Gray Whale", 2020)).unwrap();
        assert_eq!(config["title"], "Gray Whale sightings in 2020");
        assert_eq!(config["year"], 2020);
        assert_eq!(config["monthNames"].as_array().map(Vec::len), Some(12));
        assert_eq!(config["monthNames"][0], "January");
    }
}
