//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The Leaflet map and Chart.js donut functions live in `assets/js/*.js`,
//! embedded at compile time and evaluated as globals once both libraries
//! have loaded. Every wrapper serializes its arguments to JSON. Calls made
//! before the scripts (or the target element) are ready poll until they
//! are; later calls run synchronously.

use crate::config::MapViewConfig;
use phm_view::{ChartKind, ChartSpec, ChartSurface, MapStyling};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

static COUNTY_MAP_JS: &str = include_str!("../assets/js/county-map.js");
static DONUT_CHART_JS: &str = include_str!("../assets/js/donut-chart.js");

/// Global the map script calls with the clicked county's name.
const CLICK_CALLBACK: &str = "__phmCountyClick";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('PHM JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Escape a JSON payload for embedding in a single-quoted JS string.
fn quote(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
        .replace('\r', "")
}

/// Evaluate the map and chart scripts once Leaflet and Chart.js are loaded.
///
/// The scripts are evaluated at global scope (indirect eval) so their
/// function declarations become `window.*` globals.
pub fn init_scripts() {
    let all_js = [COUNTY_MAP_JS, DONUT_CHART_JS].join("\n");
    let store_js = format!(
        "window.__phmScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__phmScriptsReady) { return; }
            var waitForLibs = setInterval(function() {
                if (typeof L !== 'undefined' && typeof Chart !== 'undefined') {
                    clearInterval(waitForLibs);
                    (0, eval)(window.__phmScripts);
                    delete window.__phmScripts;
                    if (typeof ChartDataLabels !== 'undefined') { Chart.register(ChartDataLabels); }
                    window.__phmScriptsReady = true;
                    console.log('PHM map scripts initialized');
                }
            }, 50);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Build the Leaflet map inside `container_id` from the geometry document.
pub fn render_map(container_id: &str, geometry: &serde_json::Value, view: &MapViewConfig) {
    let geometry_json = quote(&serde_json::to_string(geometry).unwrap_or_default());
    let view_json = quote(&serde_json::to_string(view).unwrap_or_default());
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__phmScriptsReady && document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        initCountyMap('{container_id}', '{geometry_json}', '{view_json}');
                    }} catch(e) {{ console.error('[PHM] initCountyMap error:', e); }}
                }}
            }}, 50);
        }})();
        "#,
    ));
}

/// Restyle every county polygon. Styling sent before the map exists is
/// applied as soon as it is built.
pub fn apply_map_styling(styling: &MapStyling) {
    let styling_json = quote(&serde_json::to_string(styling).unwrap_or_default());
    call_js(&styling_script(&styling_json));
}

/// Runs `applyCountyStyles` in the same task once the scripts are loaded,
/// so the map never lags behind the legend and detail panel. Polls only
/// during startup.
fn styling_script(styling_json: &str) -> String {
    format!(
        r#"
        (function() {{
            function apply() {{ applyCountyStyles('{styling_json}'); }}
            if (window.__phmScriptsReady) {{ apply(); return; }}
            var poll = setInterval(function() {{
                if (window.__phmScriptsReady) {{
                    clearInterval(poll);
                    apply();
                }}
            }}, 50);
        }})();
        "#,
    )
}

pub fn reset_map_view(view: &MapViewConfig) {
    let view_json = quote(&serde_json::to_string(view).unwrap_or_default());
    call_js(&format!(
        "if (window.__phmScriptsReady) {{ resetCountyMapView('{view_json}'); }}"
    ));
}

/// Alert box for rejected input.
pub fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Route county clicks from the map script into `on_click`.
///
/// The callback lives for the rest of the page, so the closure is leaked
/// deliberately.
pub fn register_county_click(on_click: impl FnMut(String) + 'static) {
    let Some(window) = web_sys::window() else {
        log::error!("[PHM] no window; county clicks are disabled");
        return;
    };
    let callback = Closure::<dyn FnMut(String)>::new(on_click);
    if let Err(e) = js_sys::Reflect::set(
        &window,
        &JsValue::from_str(CLICK_CALLBACK),
        callback.as_ref().unchecked_ref(),
    ) {
        log::error!("[PHM] failed to register click handler: {:?}", e);
        return;
    }
    callback.forget();
}

/// Draws donut charts on the detail panel canvases.
///
/// Each create/destroy bumps a per-canvas generation so a create that is
/// still waiting for its canvas is dropped once superseded.
pub struct JsChartSurface;

impl ChartSurface for JsChartSurface {
    fn create(&mut self, spec: &ChartSpec) {
        let spec_json = quote(&serde_json::to_string(spec).unwrap_or_default());
        call_js(&chart_script(spec.kind.canvas_id(), &spec_json));
    }

    fn destroy(&mut self, kind: ChartKind) {
        let canvas_id = kind.canvas_id();
        call_js(&format!(
            r#"
            window.__phmPendingGen = window.__phmPendingGen || {{}};
            window.__phmPendingGen['{canvas_id}'] = (window.__phmPendingGen['{canvas_id}'] || 0) + 1;
            if (window.__phmScriptsReady) {{ destroyDonutChart('{canvas_id}'); }}
            "#,
        ));
    }
}

/// Draws the chart immediately when the scripts and canvas are ready;
/// otherwise polls until they are, unless a newer create or destroy for
/// the same canvas supersedes it.
fn chart_script(canvas_id: &str, spec_json: &str) -> String {
    format!(
        r#"
        (function() {{
            window.__phmPendingGen = window.__phmPendingGen || {{}};
            var gen = (window.__phmPendingGen['{canvas_id}'] || 0) + 1;
            window.__phmPendingGen['{canvas_id}'] = gen;
            function tryRender() {{
                if (!window.__phmScriptsReady || !document.getElementById('{canvas_id}')) {{
                    return false;
                }}
                try {{
                    renderDonutChart('{canvas_id}', '{spec_json}');
                }} catch(e) {{ console.error('[PHM] renderDonutChart error:', e); }}
                return true;
            }}
            if (tryRender()) {{ return; }}
            var poll = setInterval(function() {{
                if (window.__phmPendingGen['{canvas_id}'] !== gen || tryRender()) {{
                    clearInterval(poll);
                }}
            }}, 50);
        }})();
        "#,
    )
}

#[cfg(test)]
mod tests {
    use super::{chart_script, quote, styling_script};

    /// Byte offset of `needle`, failing the test when it is missing.
    fn offset(script: &str, needle: &str) -> usize {
        script
            .find(needle)
            .unwrap_or_else(|| panic!("{:?} not found in script", needle))
    }

    #[test]
    fn styling_applies_before_any_polling() {
        let script = styling_script(r#"{"counties":[]}"#);
        let immediate = offset(&script, "if (window.__phmScriptsReady) { apply(); return; }");
        assert!(immediate < offset(&script, "setInterval"));
        assert!(script.contains(r#"applyCountyStyles('{"counties":[]}')"#));
    }

    #[test]
    fn chart_renders_before_any_polling() {
        let script = chart_script("press-chart", "{}");
        let immediate = offset(&script, "if (tryRender()) { return; }");
        assert!(immediate < offset(&script, "setInterval"));
        assert!(script.contains("renderDonutChart('press-chart', '{}')"));
    }

    #[test]
    fn pending_chart_stops_when_superseded() {
        let script = chart_script("election-chart", "{}");
        assert!(script.contains("window.__phmPendingGen['election-chart'] !== gen || tryRender()"));
    }

    #[test]
    fn quote_escapes_single_quotes_and_backslashes() {
        assert_eq!(quote(r#"{"a":"it's"}"#), r#"{"a":"it\'s"}"#);
        assert_eq!(quote(r#"{"a":"\"x\""}"#), r#"{"a":"\\"x\\""}"#);
    }

    #[test]
    fn quote_strips_newlines() {
        assert_eq!(quote("{\n\"a\": 1\r\n}"), "{\"a\": 1}");
    }
}
