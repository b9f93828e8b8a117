//! Press / Elections radio toggle.

use crate::state::AppState;
use dioxus::prelude::*;
use phm_core::Dataset;
use phm_view::SelectionUpdate;

#[component]
pub fn DatasetToggle() -> Element {
    let state = use_context::<AppState>();
    let updates = use_coroutine_handle::<SelectionUpdate>();
    let current = state
        .frame
        .read()
        .as_ref()
        .map(|f| f.selection.dataset())
        .unwrap_or_default();

    let on_change = move |evt: Event<FormData>| match evt.value().parse::<Dataset>() {
        Ok(dataset) => updates.send(SelectionUpdate::SelectDataset(dataset)),
        Err(e) => log::warn!("[PHM] dataset toggle: {}", e),
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            for dataset in Dataset::ALL {
                label {
                    style: "font-weight: bold;",
                    input {
                        r#type: "radio",
                        name: "display-dataset",
                        value: "{dataset}",
                        checked: dataset == current,
                        onchange: on_change,
                    }
                    " {dataset}"
                }
            }
        }
    }
}
