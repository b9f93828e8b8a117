//! Swatch legend for the active dataset's colour scheme.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ColourLegend() -> Element {
    let state = use_context::<AppState>();
    let Some(legend) = state.frame.read().as_ref().map(|f| f.legend.clone()) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "margin: 8px 0; padding: 8px 12px; background: #FAFAFA; border-radius: 4px; border: 1px solid #E0E0E0; font-size: 12px;",
            h4 {
                id: "legend-title",
                style: "margin: 0 0 6px 0; font-size: 14px;",
                "{legend.title}"
            }
            div {
                id: "legendDiv",
                for item in legend.items.iter() {
                    div {
                        class: "colour-scheme-legend-item",
                        style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                        div {
                            class: "colour-scheme-square",
                            style: "width: 12px; height: 12px; background-color: {item.colour};",
                        }
                        "{item.label}"
                    }
                }
            }
        }
    }
}
