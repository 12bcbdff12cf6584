//! Dropdown selector for one catalog list.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SelectorProps {
    /// Label text, also used to build the element id
    pub name: String,
    /// Values to offer, in display order
    pub options: Vec<String>,
    /// Currently selected value, if any
    #[props(!optional)]
    pub selected: Option<String>,
    /// Called with the chosen value
    pub on_select: EventHandler<String>,
}

/// Labeled `<select>` with a placeholder until something is picked.
///
/// Renders empty (placeholder only) while `options` is empty.
#[component]
pub fn Selector(props: SelectorProps) -> Element {
    let id = format!("{}-select", props.name.to_lowercase());
    let on_select = props.on_select;
    let nothing_selected = props.selected.is_none();

    let on_change = move |evt: Event<FormData>| {
        let value = evt.value();
        if !value.is_empty() {
            on_select.call(value);
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column;",
            label {
                r#for: "{id}",
                style: "font-weight: bold; margin-bottom: 4px; color: #1e3a8a;",
                "{props.name}"
            }
            select {
                id: "{id}",
                disabled: props.options.is_empty(),
                onchange: on_change,
                option {
                    value: "",
                    disabled: true,
                    selected: nothing_selected,
                    "Select..."
                }
                for value in props.options.iter() {
                    option {
                        value: "{value}",
                        selected: props.selected.as_deref() == Some(value.as_str()),
                        "{value}"
                    }
                }
            }
        }
    }
}
