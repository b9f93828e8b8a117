//! Viewer configuration.
//!
//! Defaults match the deployed site layout. A page can override any field
//! by defining `window.PHM_CONFIG` before the app starts, e.g.
//!
//! ```js
//! window.PHM_CONFIG = { "press_url": "data/press_data.json.gz" };
//! ```

use phm_core::Dataset;
use serde::{Deserialize, Serialize};

/// Name of the optional global holding overrides.
const CONFIG_GLOBAL: &str = "PHM_CONFIG";

/// Initial Leaflet view. The map cannot be panned outside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    /// `[lat, lng]` of the initial centre
    pub centre: [f64; 2],
    pub zoom: f64,
    pub min_zoom: f64,
    pub zoom_snap: f64,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            centre: [55.3781, -3.4360],
            zoom: 4.5,
            min_zoom: 4.5,
            zoom_snap: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub press_url: String,
    pub elections_url: String,
    pub geometry_url: String,
    /// Dataset checked on the toggle at startup
    pub default_dataset: Dataset,
    pub map: MapViewConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            press_url: "press_data.json".to_string(),
            elections_url: "scripts/elections.json".to_string(),
            geometry_url: "updated_map.json".to_string(),
            default_dataset: Dataset::Press,
            map: MapViewConfig::default(),
        }
    }
}

impl ViewerConfig {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Defaults overlaid with `window.PHM_CONFIG`, if the page defines it.
    /// An unreadable override is logged and ignored.
    pub fn from_window() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        let json = js_sys::JSON::stringify(&value)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_default();
        match Self::from_json(&json) {
            Ok(config) => {
                log::info!("[PHM] using {} overrides", CONFIG_GLOBAL);
                config
            }
            Err(e) => {
                log::warn!("[PHM] ignoring invalid {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }
}
