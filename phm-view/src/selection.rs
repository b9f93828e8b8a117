//! The single mutable record every view is derived from.

use phm_core::{election_year_for, Dataset, Year};
use serde::Serialize;

/// Current year, dataset and county selection.
///
/// Mutated only through [`crate::Reconciler::dispatch`]; the setters are
/// crate-private so no view can drift out of sync with the others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    year: Year,
    dataset: Dataset,
    /// Lowercase county name, `None` when nothing is selected.
    county: Option<String>,
    /// First election at or after `year`.
    election_year: Option<Year>,
}

/// Normalized input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionUpdate {
    /// Raw slider position; snapped to the nearest press year on dispatch.
    SlideYear(Year),
    /// Dataset radio toggled.
    SelectDataset(Dataset),
    /// A county polygon was clicked (name as found in the geometry).
    ClickCounty(String),
    /// Reset control pressed: recentre the map and drop the county selection.
    ResetView,
}

impl Selection {
    pub fn new(year: Year, dataset: Dataset) -> Self {
        Self {
            year,
            dataset,
            county: None,
            election_year: election_year_for(year),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn county(&self) -> Option<&str> {
        self.county.as_deref()
    }

    pub fn resolved_election_year(&self) -> Option<Year> {
        self.election_year
    }

    /// Year key into the active dataset: the press year for Press, the
    /// resolved election year for Elections.
    pub fn active_year(&self) -> Option<Year> {
        match self.dataset {
            Dataset::Press => Some(self.year),
            Dataset::Elections => self.election_year,
        }
    }

    /// Returns whether the year changed. The election year is only
    /// recomputed on change.
    pub(crate) fn set_year(&mut self, year: Year) -> bool {
        if self.year == year {
            return false;
        }
        self.year = year;
        self.election_year = election_year_for(year);
        true
    }

    pub(crate) fn set_dataset(&mut self, dataset: Dataset) -> bool {
        let changed = self.dataset != dataset;
        self.dataset = dataset;
        changed
    }

    /// An empty or blank name clears the selection.
    pub(crate) fn set_county(&mut self, county: Option<&str>) {
        self.county = county
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_lowercase);
    }
}
