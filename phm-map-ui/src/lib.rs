//! Dioxus components and JS bridge for the press and elections map.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and Chart.js donut charts via `js_sys::eval()`
//! - `fetch`: concurrent startup fetch of the three data documents
//! - `config`: viewer configuration (data URLs, map view, default dataset)
//! - `state`: reactive `AppState` with Dioxus Signals
//! - `components`: RSX components for the controls, legend and detail panel

pub mod components;
pub mod config;
pub mod fetch;
pub mod js_bridge;
pub mod state;
