//! The single update entry point.
//!
//! Every accepted [`SelectionUpdate`] runs the same sequence: update the
//! selection (re-resolving the election year only when the year moved),
//! restyle every county, re-render the detail panel, then publish all of it
//! as one [`Frame`]. Views are only ever drawn from a complete frame.

use crate::detail::{render_detail, DetailView};
use crate::legend::Legend;
use crate::map_style::MapStyling;
use crate::selection::{Selection, SelectionUpdate};
use phm_core::text::title_case;
use phm_core::years::year_caption;
use phm_core::{snap_to_nearest_year, Dataset, Year};
use phm_db::DatasetStore;
use serde::Serialize;
use std::fmt;

/// Derived view state for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub selection: Selection,
    /// Slider bounds, the smallest and largest press year.
    pub slider_bounds: (Year, Year),
    /// Years the slider snaps to, ascending.
    pub press_years: Vec<Year>,
    pub caption: String,
    pub legend: Legend,
    pub map: MapStyling,
    pub detail: DetailView,
}

/// Transient user notification for a rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    CountyUnavailable { county: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::CountyUnavailable { .. } => f.write_str("This county is not available"),
        }
    }
}

/// Result of dispatching one update.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The selection changed; redraw everything from this frame.
    Updated(Frame),
    /// The update resolved to the current selection; nothing to redraw.
    Unchanged,
    /// The update was refused. Selection and styling are untouched.
    Rejected(Notice),
}

/// Owns the selection and the last computed map styling.
pub struct Reconciler {
    store: DatasetStore,
    selection: Selection,
    /// Availability used to gate county clicks.
    map: MapStyling,
}

impl Reconciler {
    /// Start at the earliest press year with no county selected.
    pub fn new(store: DatasetStore, dataset: Dataset) -> Self {
        let (first_year, _) = store.press_year_bounds();
        let selection = Selection::new(first_year, dataset);
        let map = MapStyling::compute(&selection, &store);
        Self {
            store,
            selection,
            map,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Recompute the frame for the current selection without changing it.
    pub fn frame(&self) -> Frame {
        self.build_frame(MapStyling::compute(&self.selection, &self.store))
    }

    pub fn dispatch(&mut self, update: SelectionUpdate) -> Outcome {
        match update {
            SelectionUpdate::SlideYear(raw) => {
                let Some(year) = snap_to_nearest_year(raw, self.store.press_years()) else {
                    return Outcome::Unchanged;
                };
                if !self.selection.set_year(year) {
                    return Outcome::Unchanged;
                }
                log::debug!(
                    "[PHM] year {} (slider {}), election {:?}",
                    year,
                    raw,
                    self.selection.resolved_election_year()
                );
            }
            SelectionUpdate::SelectDataset(dataset) => {
                if !self.selection.set_dataset(dataset) {
                    return Outcome::Unchanged;
                }
                log::debug!("[PHM] dataset {}", dataset);
            }
            SelectionUpdate::ClickCounty(name) => {
                let county = name.trim().to_lowercase();
                if !self.map.is_available(&county) {
                    log::warn!(
                        "[PHM] rejected click on {} ({} {})",
                        title_case(&county),
                        self.selection.dataset(),
                        self.selection.year()
                    );
                    return Outcome::Rejected(Notice::CountyUnavailable { county });
                }
                self.selection.set_county(Some(&county));
            }
            SelectionUpdate::ResetView => {
                self.selection.set_county(None);
            }
        }

        self.map = MapStyling::compute(&self.selection, &self.store);
        Outcome::Updated(self.build_frame(self.map.clone()))
    }

    fn build_frame(&self, map: MapStyling) -> Frame {
        Frame {
            selection: self.selection.clone(),
            slider_bounds: self.store.press_year_bounds(),
            press_years: self.store.press_years().to_vec(),
            caption: year_caption(
                self.selection.year(),
                self.selection.resolved_election_year(),
            ),
            legend: Legend::for_dataset(self.selection.dataset()),
            map,
            detail: render_detail(&self.selection, &self.store),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::INSTRUCTIONS;
    use crate::map_style::UNAVAILABLE_FILL;
    use phm_core::colour_for;
    use phm_db::fixtures::sample_store;

    fn updated(outcome: Outcome) -> Frame {
        match outcome {
            Outcome::Updated(frame) => frame,
            other => panic!("expected an updated frame, got {:?}", other),
        }
    }

    #[test]
    fn starts_at_first_press_year() {
        let reconciler = Reconciler::new(sample_store(), Dataset::Press);
        let frame = reconciler.frame();
        assert_eq!(frame.selection.year(), 1846);
        assert_eq!(frame.selection.resolved_election_year(), Some(1847));
        assert_eq!(frame.slider_bounds, (1846, 1925));
        assert_eq!(frame.press_years, vec![1846, 1850, 1856, 1925]);
        assert_eq!(frame.detail.message.as_deref(), Some(INSTRUCTIONS));
        assert_eq!(frame.caption, "You picked 1846, the closest election was in 1847");
    }

    #[test]
    fn frame_is_idempotent() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        reconciler.dispatch(SelectionUpdate::ClickCounty("Surrey".to_string()));
        assert_eq!(reconciler.frame(), reconciler.frame());
    }

    #[test]
    fn slider_snaps_to_press_year() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        let frame = updated(reconciler.dispatch(SelectionUpdate::SlideYear(1849)));
        assert_eq!(frame.selection.year(), 1850);
        assert_eq!(frame.caption, "You picked 1850, the closest election was in 1852");
    }

    #[test]
    fn slider_onto_current_year_is_unchanged() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        assert_eq!(
            reconciler.dispatch(SelectionUpdate::SlideYear(1847)),
            Outcome::Unchanged
        );
        assert_eq!(reconciler.selection().year(), 1846);
    }

    #[test]
    fn surrey_press_end_to_end() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        let frame = updated(reconciler.dispatch(SelectionUpdate::ClickCounty("Surrey".into())));

        let surrey = frame.map.style_of("surrey").unwrap();
        assert_eq!(surrey.fill_colour, colour_for(Dataset::Press, "conservative"));
        assert!(surrey.highlighted);

        let press = frame.detail.press_chart.unwrap();
        assert_eq!(press.slices.len(), 2);
        assert_eq!(press.slices[0].colour, colour_for(Dataset::Press, "conservative"));
        assert_eq!(press.slices[1].colour, colour_for(Dataset::Press, "liberal"));
    }

    #[test]
    fn elections_key_off_resolved_year() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Elections);
        reconciler.dispatch(SelectionUpdate::ClickCounty("surrey".into()));
        let frame = updated(reconciler.dispatch(SelectionUpdate::SlideYear(1850)));

        assert_eq!(frame.selection.resolved_election_year(), Some(1852));
        // 1852: Surrey went to the Peelites, Cork has no result
        assert_eq!(frame.map.style_of("surrey").unwrap().fill_colour, Some("indigo"));
        assert_eq!(frame.map.style_of("cork").unwrap().fill_colour, Some(UNAVAILABLE_FILL));
        assert_eq!(
            frame.detail.election_chart.unwrap().title,
            "MPs elected in Surrey in 1852"
        );
    }

    #[test]
    fn unavailable_click_is_rejected_without_side_effects() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        reconciler.dispatch(SelectionUpdate::ClickCounty("Kent".into()));
        let before_selection = reconciler.selection().clone();
        let before_map = reconciler.map.clone();

        let outcome = reconciler.dispatch(SelectionUpdate::ClickCounty("Middlesex".into()));
        assert_eq!(
            outcome,
            Outcome::Rejected(Notice::CountyUnavailable {
                county: "middlesex".to_string()
            })
        );
        assert_eq!(reconciler.selection(), &before_selection);
        assert_eq!(reconciler.map, before_map);
    }

    #[test]
    fn click_gating_uses_active_dataset() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        // Cork has election data for 1847 but no press data for 1846
        assert!(matches!(
            reconciler.dispatch(SelectionUpdate::ClickCounty("Cork".into())),
            Outcome::Rejected(_)
        ));
        reconciler.dispatch(SelectionUpdate::SelectDataset(Dataset::Elections));
        let frame = updated(reconciler.dispatch(SelectionUpdate::ClickCounty("Cork".into())));
        assert_eq!(frame.selection.county(), Some("cork"));
        assert_eq!(
            frame.detail.message.as_deref(),
            Some("There is no press data for Cork")
        );
    }

    #[test]
    fn toggling_dataset_redraws_legend_and_map() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        reconciler.dispatch(SelectionUpdate::ClickCounty("Kent".into()));
        let frame = updated(reconciler.dispatch(SelectionUpdate::SelectDataset(Dataset::Elections)));

        assert_eq!(frame.legend, Legend::for_dataset(Dataset::Elections));
        assert_eq!(frame.legend.items[0].label, "Liberal party (original)");
        assert_eq!(
            frame.map.style_of("kent").unwrap().fill_colour,
            colour_for(Dataset::Elections, "Liberal Party (Original)")
        );
        assert_eq!(frame.selection.county(), Some("kent"));
        assert_eq!(frame.selection.year(), 1846);
    }

    #[test]
    fn selecting_current_dataset_is_unchanged() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        assert_eq!(
            reconciler.dispatch(SelectionUpdate::SelectDataset(Dataset::Press)),
            Outcome::Unchanged
        );
    }

    #[test]
    fn reset_clears_county() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        reconciler.dispatch(SelectionUpdate::ClickCounty("Surrey".into()));
        let frame = updated(reconciler.dispatch(SelectionUpdate::ResetView));
        assert_eq!(frame.selection.county(), None);
        assert_eq!(frame.detail.message.as_deref(), Some(INSTRUCTIONS));
        assert!(frame.map.counties.iter().all(|c| !c.style.highlighted));
    }

    #[test]
    fn moving_year_keeps_county_and_updates_detail() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        reconciler.dispatch(SelectionUpdate::ClickCounty("Surrey".into()));
        let frame = updated(reconciler.dispatch(SelectionUpdate::SlideYear(1856)));
        assert_eq!(frame.selection.county(), Some("surrey"));
        assert_eq!(
            frame.detail.message.as_deref(),
            Some("There is no press data for Surrey")
        );
        assert!(frame.detail.press_chart.is_none());
        assert!(frame.detail.election_chart.is_none());
    }

    #[test]
    fn dispatched_frame_matches_recomputed_frame() {
        let mut reconciler = Reconciler::new(sample_store(), Dataset::Press);
        let frame = updated(reconciler.dispatch(SelectionUpdate::SlideYear(1850)));
        assert_eq!(frame, reconciler.frame());
    }
}
