//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The month chart (D3.js) and sighting map (Leaflet) live in `assets/js/*.js`.
//! They are evaluated as globals (no ES modules) once both libraries have
//! loaded, and exposed via `window.*`. This module serializes data for them,
//! calls those globals, and installs the month callback the chart calls back
//! into.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wdv_sightings::month::Month;

// Embed the chart and map JS files at compile time
static MONTH_CHART_JS: &str = include_str!("../assets/js/month-chart.js");
static SIGHTING_MAP_JS: &str = include_str!("../assets/js/sighting-map.js");

/// Global the month chart calls with a month number (or `null` to clear).
pub const MONTH_CALLBACK: &str = "__whaleSelectMonth";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Whale viewer JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Evaluate the chart and map scripts once D3 and Leaflet are present.
///
/// The scripts are parked on `window` and evaluated with an indirect
/// `eval` so their function declarations land at global scope instead of
/// inside the polling callback. Call once at app startup.
pub fn init_scripts() {
    let all_js = [MONTH_CHART_JS, SIGHTING_MAP_JS].join("\n");
    let store_js = format!("window.__whaleScripts = {};", js_string(&all_js));
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__whaleScriptsReady) { return; }
            var waitForLibs = setInterval(function() {
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__whaleScripts);
                    delete window.__whaleScripts;
                    if (typeof renderMonthChart !== 'undefined') window.renderMonthChart = renderMonthChart;
                    if (typeof destroyMonthChart !== 'undefined') window.destroyMonthChart = destroyMonthChart;
                    if (typeof renderSightingMap !== 'undefined') window.renderSightingMap = renderSightingMap;
                    if (typeof destroySightingMap !== 'undefined') window.destroySightingMap = destroySightingMap;
                    window.__whaleScriptsReady = true;
                    console.log('Whale viewer scripts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Call `window.<function>(container_id, data, config)` once the scripts
/// are ready and the container element exists.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__whaleScriptsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Whale] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render the sightings-per-month bar chart.
pub fn render_month_chart(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderMonthChart", container_id, data_json, config_json);
}

/// Render or update a sighting map. Leaflet keeps one map per container,
/// so repeated calls only swap the markers.
pub fn render_sighting_map(container_id: &str, data_json: &str, config_json: &str) {
    render_when_ready("renderSightingMap", container_id, data_json, config_json);
}

/// Tear down the chart in the given container.
pub fn destroy_month_chart(container_id: &str) {
    call_js(&format!(
        "if (window.destroyMonthChart) {{ window.destroyMonthChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}",
        id = js_string(container_id)
    ));
}

/// Tear down the Leaflet map in the given container.
pub fn destroy_sighting_map(container_id: &str) {
    call_js(&format!(
        "if (window.destroySightingMap) {{ window.destroySightingMap({}); }}",
        js_string(container_id)
    ));
}

/// Exposes [`MONTH_CALLBACK`] on `window` for as long as it is alive.
///
/// The chart calls it with a month number when a bar is picked and with
/// `null` when the pick is cleared; anything else is ignored.
pub struct MonthSelectBridge {
    _closure: Closure<dyn FnMut(JsValue)>,
}

impl MonthSelectBridge {
    pub fn install(mut on_select: impl FnMut(Option<Month>) + 'static) -> Self {
        let closure = Closure::wrap(Box::new(move |value: JsValue| {
            if value.is_null() || value.is_undefined() {
                on_select(None);
                return;
            }
            match value.as_f64().map(|n| Month::new(n as u8)) {
                Some(Ok(month)) => on_select(Some(month)),
                Some(Err(e)) => log::warn!("Ignoring month from chart: {}", e),
                None => log::warn!("Ignoring non-numeric month from chart: {:?}", value),
            }
        }) as Box<dyn FnMut(JsValue)>);

        if let Some(window) = web_sys::window() {
            let installed = js_sys::Reflect::set(
                &window,
                &JsValue::from_str(MONTH_CALLBACK),
                closure.as_ref(),
            );
            if installed.is_err() {
                log::warn!("Failed to install {}", MONTH_CALLBACK);
            }
        }

        Self { _closure: closure }
    }
}

impl Drop for MonthSelectBridge {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = js_sys::Reflect::delete_property(&window, &JsValue::from_str(MONTH_CALLBACK));
        }
    }
}
