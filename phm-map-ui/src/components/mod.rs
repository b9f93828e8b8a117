//! RSX components for the press and elections map.
//!
//! Controls never touch `AppState` directly: they send a `SelectionUpdate`
//! to the app's update coroutine, which reconciles and publishes a frame.

mod colour_legend;
mod dataset_toggle;
mod detail_panel;
mod error_display;
mod loading_spinner;
mod map_container;
mod reset_button;
mod year_slider;

pub use colour_legend::ColourLegend;
pub use dataset_toggle::DatasetToggle;
pub use detail_panel::DetailPanel;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_container::MapContainer;
pub use reset_button::ResetButton;
pub use year_slider::{parse_slider_value, YearSlider};
