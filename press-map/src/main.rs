//! Press & Elections Historical Map
//!
//! Colours UK and Ireland counties by the political leaning of their press
//! (from historical press directories) or by the party that won most of
//! their seats at the nearest following general election. A year slider
//! scrubs through the press directory years, a toggle switches dataset,
//! and clicking a county shows donut charts of its press and seat
//! breakdowns.
//!
//! Data flow:
//! 1. The update coroutine fetches the press, election and geometry
//!    documents concurrently. Any failure is fatal and shown in place of
//!    the viewer.
//! 2. It builds the Leaflet map and a `Reconciler` starting at the first
//!    press year, then publishes the first frame.
//! 3. Controls and map clicks send `SelectionUpdate`s to the coroutine.
//!    Each accepted update yields a complete frame, which restyles the
//!    map, redraws the charts through the `ChartRegistry` and is stored
//!    in `AppState` for the components to render.

use dioxus::prelude::*;
use futures::StreamExt;
use phm_map_ui::components::{
    ColourLegend, DatasetToggle, DetailPanel, ErrorDisplay, LoadingSpinner, MapContainer,
    ResetButton, YearSlider,
};
use phm_map_ui::config::ViewerConfig;
use phm_map_ui::js_bridge::{self, JsChartSurface};
use phm_map_ui::state::AppState;
use phm_map_ui::fetch;
use phm_view::{ChartRegistry, Frame, Outcome, Reconciler, SelectionUpdate};

/// DOM id Leaflet renders into.
const MAP_ID: &str = "map";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.4/dist/leaflet.js";
const CHART_JS: &str = "https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js";
const DATALABELS_JS: &str =
    "https://cdn.jsdelivr.net/npm/chartjs-plugin-datalabels@2.2.0/dist/chartjs-plugin-datalabels.min.js";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("press-map-root"))
        .launch(App);
}

/// Push a frame to the JS side: map styles and charts.
fn present(frame: &Frame, charts: &mut ChartRegistry<JsChartSurface>) {
    js_bridge::apply_map_styling(&frame.map);
    charts.apply(&frame.detail);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let config = use_hook(ViewerConfig::from_window);

    let updates = use_coroutine({
        let config = config.clone();
        move |mut rx: UnboundedReceiver<SelectionUpdate>| {
            let config = config.clone();
            let mut state = state;
            async move {
                let store = match fetch::load_store(&config).await {
                    Ok(store) => store,
                    Err(e) => {
                        log::error!("[PHM] Error fetching JSON: {:#}", e);
                        state.error_msg.set(Some(format!("{:#}", e)));
                        state.loading.set(false);
                        return;
                    }
                };

                js_bridge::init_scripts();
                js_bridge::render_map(MAP_ID, &store.geometry().document, &config.map);

                let mut reconciler = Reconciler::new(store, config.default_dataset);
                let mut charts = ChartRegistry::new(JsChartSurface);
                let frame = reconciler.frame();
                present(&frame, &mut charts);
                state.frame.set(Some(frame));
                state.loading.set(false);

                while let Some(update) = rx.next().await {
                    if update == SelectionUpdate::ResetView {
                        js_bridge::reset_map_view(&config.map);
                    }
                    match reconciler.dispatch(update) {
                        Outcome::Updated(frame) => {
                            present(&frame, &mut charts);
                            state.frame.set(Some(frame));
                        }
                        Outcome::Unchanged => {}
                        Outcome::Rejected(notice) => js_bridge::notify(&notice.to_string()),
                    }
                }
            }
        }
    });

    // Map clicks arrive from Leaflet, outside any component
    use_hook(move || {
        let tx = updates.tx();
        js_bridge::register_county_click(move |county| {
            if tx.unbounded_send(SelectionUpdate::ClickCounty(county)).is_err() {
                log::warn!("[PHM] update loop has stopped; click ignored");
            }
        });
    });

    rsx! {
        document::Stylesheet { href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        document::Script { src: CHART_JS }
        document::Script { src: DATALABELS_JS }

        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            h2 {
                style: "margin: 0 0 8px 0;",
                "The Press and the Vote, 1846-1922"
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else {
                if (state.loading)() {
                    LoadingSpinner {}
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: center;",
                    div { style: "flex: 1 1 400px;", YearSlider {} }
                    DatasetToggle {}
                    ResetButton {}
                }
                div {
                    style: "display: flex; flex-wrap: wrap; gap: 16px;",
                    div {
                        style: "flex: 2 1 480px;",
                        // Always mounted so Leaflet can attach while data loads
                        MapContainer { id: MAP_ID.to_string() }
                    }
                    div {
                        style: "flex: 1 1 320px;",
                        ColourLegend {}
                        DetailPanel {}
                    }
                }
            }
        }
    }
}
