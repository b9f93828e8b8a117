//! Message area plus the two donut chart canvases.
//!
//! The canvases are always mounted; the chart registry draws into and
//! clears them by id.

use crate::state::AppState;
use dioxus::prelude::*;
use phm_view::ChartKind;

#[component]
pub fn DetailPanel() -> Element {
    let state = use_context::<AppState>();
    let message = state
        .frame
        .read()
        .as_ref()
        .and_then(|f| f.detail.message.clone());

    rsx! {
        div {
            id: "info-box",
            style: "margin: 8px 0; padding: 8px 12px; border: 1px solid #E0E0E0; border-radius: 4px;",
            if let Some(message) = message {
                p {
                    id: "info-box-message",
                    style: "margin: 0 0 8px 0; font-size: 13px; color: #444;",
                    "{message}"
                }
            }
            div {
                class: "chart-container",
                style: "display: flex; flex-wrap: wrap; gap: 12px;",
                for kind in ChartKind::ALL {
                    div {
                        class: "donut-chart-wrapper",
                        style: "flex: 1 1 260px; max-width: 360px;",
                        canvas { id: kind.canvas_id() }
                    }
                }
            }
        }
    }
}
