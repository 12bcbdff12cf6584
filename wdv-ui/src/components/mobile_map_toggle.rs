//! Narrow-viewport switch between the chart and the map.

use dioxus::prelude::*;
use wdv_view::ToggleAlignment;

#[derive(Props, Clone, PartialEq)]
pub struct MobileMapToggleProps {
    /// Whether the mobile map currently owns the shared region
    pub map_visible: bool,
    pub alignment: ToggleAlignment,
    pub on_toggle: EventHandler<()>,
}

#[component]
pub fn MobileMapToggle(props: MobileMapToggleProps) -> Element {
    let justify = match props.alignment {
        ToggleAlignment::Start => "flex-start",
        ToggleAlignment::End => "flex-end",
    };
    let label = if props.map_visible { "Show chart" } else { "Show map" };
    let on_toggle = props.on_toggle;

    rsx! {
        div {
            style: "display: flex; justify-content: {justify}; padding: 8px 40px;",
            "data-align": props.alignment.as_str(),
            button {
                r#type: "button",
                "aria-pressed": "{props.map_visible}",
                style: "padding: 6px 14px; border: none; border-radius: 4px; background: #1e3a8a; color: white; cursor: pointer;",
                onclick: move |_| on_toggle.call(()),
                "{label}"
            }
        }
    }
}
