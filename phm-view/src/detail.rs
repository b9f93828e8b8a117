//! Content of the detail panel for the selected county.
//!
//! The panel shows a press donut chart for the selected press year and an
//! election donut chart for the resolved election year, or a message when
//! either is missing:
//!
//! | county   | press record | election record | message                 | press | election |
//! |----------|--------------|-----------------|-------------------------|-------|----------|
//! | none     | -            | -               | instructions            | -     | -        |
//! | selected | missing      | -               | no press data           | -     | -        |
//! | selected | present      | missing         | no electoral results    | chart | -        |
//! | selected | present      | present         | none                    | chart | chart    |

use crate::charts::ChartKind;
use crate::selection::Selection;
use phm_core::text::title_case;
use phm_core::{colour_for, Year};
use phm_db::models::CategoryCount;
use phm_db::DatasetStore;
use serde::Serialize;

/// Standing message while no county is selected.
pub const INSTRUCTIONS: &str = "Click on any available county to see the data. \
If a county is grayed out, it means that there are no press information on it \
for that year, so try moving around the slider above.";

/// Colour of the count labels drawn on each slice.
pub const DATALABEL_COLOUR: &str = "white";

/// One slice of a donut chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSlice {
    pub label: String,
    pub count: u64,
    /// `None` for labels missing from the colour scheme; the chart library
    /// picks its default.
    pub colour: Option<&'static str>,
}

/// Everything the chart bridge needs to draw one donut chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub slices: Vec<ChartSlice>,
    pub datalabel_colour: &'static str,
}

impl ChartSpec {
    fn build(kind: ChartKind, county: &str, year: Year, breakdown: &[CategoryCount]) -> Self {
        let dataset = kind.dataset();
        let slices = breakdown
            .iter()
            .map(|c| ChartSlice {
                label: c.category.clone(),
                count: c.count,
                colour: colour_for(dataset, &c.category),
            })
            .collect();
        Self {
            kind,
            title: format!("{} in {} in {}", kind.title_prefix(), title_case(county), year),
            slices,
            datalabel_colour: DATALABEL_COLOUR,
        }
    }
}

/// Rendered detail panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView {
    pub message: Option<String>,
    pub press_chart: Option<ChartSpec>,
    pub election_chart: Option<ChartSpec>,
}

impl DetailView {
    fn message(text: String) -> Self {
        Self {
            message: Some(text),
            press_chart: None,
            election_chart: None,
        }
    }

    pub fn chart(&self, kind: ChartKind) -> Option<&ChartSpec> {
        match kind {
            ChartKind::Press => self.press_chart.as_ref(),
            ChartKind::Election => self.election_chart.as_ref(),
        }
    }
}

/// Detail panel content for the current selection.
///
/// A missing press record clears both charts, so no chart from an earlier
/// selection survives next to the "no press data" message.
pub fn render_detail(selection: &Selection, store: &DatasetStore) -> DetailView {
    let Some(county) = selection.county() else {
        return DetailView::message(INSTRUCTIONS.to_string());
    };
    let year = selection.year();

    let Some(press) = store.press_record(year, county) else {
        return DetailView::message(format!("There is no press data for {}", title_case(county)));
    };
    let press_chart = ChartSpec::build(ChartKind::Press, county, year, &press.press_data);

    let election = selection
        .resolved_election_year()
        .and_then(|election_year| {
            store
                .election_record(election_year, county)
                .map(|record| (election_year, record))
        });

    match election {
        Some((election_year, record)) => DetailView {
            message: None,
            press_chart: Some(press_chart),
            election_chart: Some(ChartSpec::build(
                ChartKind::Election,
                county,
                election_year,
                &record.data,
            )),
        },
        None => DetailView {
            message: Some(format!(
                "There are no electoral results for {} in {}",
                title_case(county),
                year
            )),
            press_chart: Some(press_chart),
            election_chart: None,
        },
    }
}
