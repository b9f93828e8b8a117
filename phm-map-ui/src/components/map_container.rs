//! Container the Leaflet map is built into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct MapContainerProps {
    /// DOM id Leaflet renders into
    pub id: String,
    #[props(default = 600)]
    pub height: u32,
}

#[component]
pub fn MapContainer(props: MapContainerProps) -> Element {
    let style = format!(
        "height: {}px; width: 100%; background: #FFFFFF; border-radius: 4px;",
        props.height
    );

    rsx! {
        div {
            id: "{props.id}",
            style: "{style}",
        }
    }
}
