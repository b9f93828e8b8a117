//! Selection-state reconciliation for the press and elections map.
//!
//! Everything the viewer shows is derived from one [`Selection`]
//! (year, dataset, county) and the read-only [`phm_db::DatasetStore`]:
//!
//! - `map_style`: availability and colours for every county polygon
//! - `legend`: the swatches for the active dataset
//! - `detail`: the two donut charts and the message area
//! - `charts`: a registry that owns chart instances and enforces
//!   destroy-then-create
//!
//! The [`Reconciler`] is the single update entry point. Input events are
//! turned into [`SelectionUpdate`] messages and dispatched to it; each
//! accepted update yields a complete [`Frame`]. Nothing here touches the
//! DOM, so the whole update sequence is testable natively.

pub mod charts;
pub mod detail;
pub mod legend;
pub mod map_style;
pub mod reconcile;
pub mod selection;

pub use charts::{ChartKind, ChartRegistry, ChartSurface};
pub use detail::{render_detail, ChartSlice, ChartSpec, DetailView};
pub use legend::Legend;
pub use map_style::{compute_county_style, CountyStyle, MapStyling};
pub use reconcile::{Frame, Notice, Outcome, Reconciler};
pub use selection::{Selection, SelectionUpdate};
