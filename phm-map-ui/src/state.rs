//! Application state managed via Dioxus context.
//!
//! `AppState` holds what the components render. It is written only by the
//! update coroutine in the app, which owns the `Reconciler`; components
//! send `SelectionUpdate`s to that coroutine instead of writing here.

use dioxus::prelude::*;
use phm_view::Frame;

#[derive(Clone, Copy)]
pub struct AppState {
    /// True until the three documents are loaded
    pub loading: Signal<bool>,
    /// Fatal load error; the viewer never becomes interactive once set
    pub error_msg: Signal<Option<String>>,
    /// Latest reconciled frame (None until loaded)
    pub frame: Signal<Option<Frame>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            frame: Signal::new(None),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
