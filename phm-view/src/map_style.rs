//! Per-county availability and colouring for the choropleth layer.

use crate::selection::Selection;
use phm_core::colour_for;
use phm_db::DatasetStore;
use serde::Serialize;

/// Fill for counties with no data in the active dataset and year.
pub const UNAVAILABLE_FILL: &str = "gainsboro";
/// Border for counties with no data in the active dataset and year.
pub const UNAVAILABLE_BORDER: &str = "lightgray";
/// Border of the selected county.
pub const HIGHLIGHT_BORDER: &str = "DarkSlateGray";
pub const BASE_WEIGHT: u8 = 1;
pub const HIGHLIGHT_WEIGHT: u8 = 4;
pub const FILL_OPACITY: f64 = 0.9;

/// Style of one county polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyStyle {
    /// Whether the county has a record for the active dataset and year.
    /// Clicks on unavailable counties are rejected.
    pub available: bool,
    /// `None` when the majority label has no registered colour; the map
    /// library then falls back to its default.
    pub fill_colour: Option<&'static str>,
    pub border_colour: Option<&'static str>,
    pub weight: u8,
    /// Selected county: thick dark border, drawn above its neighbours.
    pub highlighted: bool,
}

impl CountyStyle {
    fn unavailable() -> Self {
        Self {
            available: false,
            fill_colour: Some(UNAVAILABLE_FILL),
            border_colour: Some(UNAVAILABLE_BORDER),
            weight: BASE_WEIGHT,
            highlighted: false,
        }
    }

    fn highlight(mut self) -> Self {
        self.border_colour = Some(HIGHLIGHT_BORDER);
        self.weight = HIGHLIGHT_WEIGHT;
        self.highlighted = true;
        self
    }
}

/// Style for one county under the current selection, without the
/// selected-county highlight.
pub fn compute_county_style(
    county: &str,
    selection: &Selection,
    store: &DatasetStore,
) -> CountyStyle {
    let dataset = selection.dataset();
    let majority = selection
        .active_year()
        .and_then(|year| store.majority(dataset, year, county));

    match majority {
        Some(label) => {
            let colour = colour_for(dataset, label);
            CountyStyle {
                available: true,
                fill_colour: colour,
                border_colour: colour,
                weight: BASE_WEIGHT,
                highlighted: false,
            }
        }
        None => CountyStyle::unavailable(),
    }
}

/// A county name paired with its style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledCounty {
    pub county: String,
    #[serde(flatten)]
    pub style: CountyStyle,
}

/// Styles for every geometry feature, index-aligned with the features.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MapStyling {
    pub counties: Vec<StyledCounty>,
}

impl MapStyling {
    /// Restyle every county. The selected county is highlighted while it
    /// stays available.
    pub fn compute(selection: &Selection, store: &DatasetStore) -> Self {
        let counties = store
            .county_names()
            .iter()
            .map(|county| {
                let mut style = compute_county_style(county, selection, store);
                if style.available && selection.county() == Some(county.as_str()) {
                    style = style.highlight();
                }
                StyledCounty {
                    county: county.clone(),
                    style,
                }
            })
            .collect();
        Self { counties }
    }

    /// Most recently computed availability of `county` (lowercase).
    /// Counties missing from the geometry are never available.
    pub fn is_available(&self, county: &str) -> bool {
        self.counties
            .iter()
            .any(|c| c.county == county && c.style.available)
    }

    #[cfg(test)]
    pub(crate) fn style_of(&self, county: &str) -> Option<&CountyStyle> {
        self.counties
            .iter()
            .find(|c| c.county == county)
            .map(|c| &c.style)
    }

    pub fn available_count(&self) -> usize {
        self.counties.iter().filter(|c| c.style.available).count()
    }
}
