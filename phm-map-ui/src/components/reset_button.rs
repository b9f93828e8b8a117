use dioxus::prelude::*;
use phm_view::SelectionUpdate;

/// Recentres the map and clears the county selection.
#[component]
pub fn ResetButton() -> Element {
    let updates = use_coroutine_handle::<SelectionUpdate>();

    rsx! {
        button {
            id: "reset-button",
            style: "padding: 4px 12px; cursor: pointer;",
            onclick: move |_| updates.send(SelectionUpdate::ResetView),
            "Reset view"
        }
    }
}
