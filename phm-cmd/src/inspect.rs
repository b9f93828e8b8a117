//! Headless inspection of the viewer state.
//!
//! Each command replays the same updates the browser controls send
//! (dataset toggle, slider, county click) through a `Reconciler` and prints
//! the resulting frame.

use crate::source::DataSource;
use anyhow::Context;
use log::info;
use phm_core::text::title_case;
use phm_core::{election_year_for, Dataset, Year};
use phm_db::DatasetStore;
use phm_view::{Frame, Outcome, Reconciler, SelectionUpdate};
use serde::Serialize;
use std::io::Write;

/// One line of the `years` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearRow {
    pub press_year: Year,
    pub election_year: Option<Year>,
    /// Counties with a press record that year.
    pub press_counties: usize,
    /// Counties with a result for the resolved election, zero when the
    /// election document has no entry for it.
    pub election_counties: usize,
}

/// One line of the `map` styling export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRow {
    pub county: String,
    pub available: bool,
    pub majority: String,
    pub fill: String,
    pub border: String,
    pub weight: u8,
    pub highlighted: bool,
}

pub fn year_rows(store: &DatasetStore) -> Vec<YearRow> {
    store
        .press_years()
        .iter()
        .map(|&press_year| {
            let election_year = election_year_for(press_year);
            YearRow {
                press_year,
                election_year,
                press_counties: store.counties(Dataset::Press, press_year).len(),
                election_counties: election_year
                    .map(|year| store.counties(Dataset::Elections, year).len())
                    .unwrap_or(0),
            }
        })
        .collect()
}

/// Elections press years resolve to that have no entry in the election
/// document. Those years show every county as unavailable.
pub fn missing_elections(store: &DatasetStore) -> Vec<Year> {
    let present = store.election_years();
    let mut missing: Vec<Year> = store
        .press_years()
        .iter()
        .filter_map(|&year| election_year_for(year))
        .filter(|year| !present.contains(year))
        .collect();
    missing.dedup();
    missing
}

/// Drive a reconciler to the requested selection.
///
/// A click on a county that is not available for the chosen dataset and
/// year is an error here, where the browser would only show a notice.
pub fn replay(
    store: DatasetStore,
    dataset: Dataset,
    year: Year,
    county: Option<&str>,
) -> anyhow::Result<Frame> {
    let mut reconciler = Reconciler::new(store, dataset);
    reconciler.dispatch(SelectionUpdate::SlideYear(year));
    if let Some(county) = county {
        if let Outcome::Rejected(notice) =
            reconciler.dispatch(SelectionUpdate::ClickCounty(county.to_string()))
        {
            anyhow::bail!(
                "{}: {} ({} {})",
                notice,
                title_case(county.trim()),
                dataset,
                reconciler.selection().year()
            );
        }
    }
    Ok(reconciler.frame())
}

pub fn style_rows(frame: &Frame, store: &DatasetStore) -> Vec<StyleRow> {
    let selection = &frame.selection;
    frame
        .map
        .counties
        .iter()
        .map(|styled| {
            let majority = selection
                .active_year()
                .and_then(|year| store.majority(selection.dataset(), year, &styled.county))
                .unwrap_or_default();
            StyleRow {
                county: title_case(&styled.county),
                available: styled.style.available,
                majority: majority.to_string(),
                fill: styled.style.fill_colour.unwrap_or_default().to_string(),
                border: styled.style.border_colour.unwrap_or_default().to_string(),
                weight: styled.style.weight,
                highlighted: styled.style.highlighted,
            }
        })
        .collect()
}

pub fn write_style_csv<W: Write>(writer: W, rows: &[StyleRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn print_style_table(rows: &[StyleRow]) {
    let width = rows.iter().map(|r| r.county.len()).max().unwrap_or(6).max(6);
    println!(
        "{:<width$}  {:<9}  {:<24}  {:<13}  {:<13}  {}",
        "County", "Available", "Majority", "Fill", "Border", "Weight",
        width = width
    );
    for row in rows {
        println!(
            "{:<width$}  {:<9}  {:<24}  {:<13}  {:<13}  {}{}",
            row.county,
            row.available,
            row.majority,
            row.fill,
            row.border,
            row.weight,
            if row.highlighted { "  *" } else { "" },
            width = width
        );
    }
}

pub async fn run_years(source: &DataSource) -> anyhow::Result<()> {
    let store = source.load().await?;
    let rows = year_rows(&store);
    info!("{} press years", rows.len());
    println!("{:<6}  {:<8}  {:<8}  {}", "Press", "Counties", "Election", "Counties");
    for row in &rows {
        let election = row
            .election_year
            .map_or_else(|| "-".to_string(), |year| year.to_string());
        println!(
            "{:<6}  {:<8}  {:<8}  {}",
            row.press_year, row.press_counties, election, row.election_counties
        );
    }
    for year in missing_elections(&store) {
        log::warn!("No results for the {} election in the election document", year);
    }
    Ok(())
}

pub async fn run_map(
    source: &DataSource,
    dataset: Dataset,
    year: Year,
    county: Option<&str>,
    csv_path: Option<&str>,
) -> anyhow::Result<()> {
    let store = source.load().await?;
    let frame = replay(store.clone(), dataset, year, county)?;
    let rows = style_rows(&frame, &store);
    info!(
        "{} of {} counties available",
        frame.map.available_count(),
        rows.len()
    );

    println!("{}", frame.caption);
    match csv_path {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path))?;
            write_style_csv(file, &rows)?;
            info!("Wrote {} rows to {}", rows.len(), path);
        }
        None => print_style_table(&rows),
    }
    Ok(())
}

pub async fn run_detail(
    source: &DataSource,
    dataset: Dataset,
    year: Year,
    county: &str,
) -> anyhow::Result<()> {
    let store = source.load().await?;
    let frame = replay(store, dataset, year, Some(county))?;
    println!("{}", frame.caption);
    println!("{}", serde_json::to_string_pretty(&frame.detail)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use phm_db::fixtures::sample_store;

    #[test]
    fn lists_years_with_resolved_elections() {
        let rows = year_rows(&sample_store());
        assert_eq!(
            rows.first(),
            Some(&YearRow {
                press_year: 1846,
                election_year: Some(1847),
                press_counties: 3,
                election_counties: 3,
            })
        );
        assert_eq!(
            rows.last(),
            Some(&YearRow {
                press_year: 1925,
                election_year: None,
                press_counties: 1,
                election_counties: 0,
            })
        );
    }

    #[test]
    fn reports_elections_missing_from_the_document() {
        // 1846, 1850 and 1856 resolve to 1847, 1852 and 1857, all present
        assert!(missing_elections(&sample_store()).is_empty());

        let store = DatasetStore::from_documents(
            r#"{"1860": {"kent": {"majority": "whig", "press_data": {"whig": 1}}},
                "1864": {"kent": {"majority": "whig", "press_data": {"whig": 1}}}}"#,
            r#"{"1847": {}}"#,
            r#"{"type": "FeatureCollection", "features": []}"#,
        )
        .unwrap();
        assert_eq!(missing_elections(&store), vec![1865]);
    }

    #[test]
    fn replay_selects_county() {
        let frame = replay(sample_store(), Dataset::Press, 1846, Some("Surrey")).unwrap();
        assert_eq!(frame.selection.county(), Some("surrey"));
        let press = frame.detail.press_chart.expect("press chart");
        assert_eq!(press.title, "Press leanings in Surrey in 1846");
    }

    #[test]
    fn replay_snaps_year() {
        let frame = replay(sample_store(), Dataset::Elections, 1849, None).unwrap();
        assert_eq!(frame.selection.year(), 1850);
        assert_eq!(frame.selection.resolved_election_year(), Some(1852));
    }

    #[test]
    fn replay_clamps_extreme_years() {
        let frame = replay(sample_store(), Dataset::Press, Year::MIN, None).unwrap();
        assert_eq!(frame.selection.year(), 1846);
        let frame = replay(sample_store(), Dataset::Press, Year::MAX, None).unwrap();
        assert_eq!(frame.selection.year(), 1925);
    }

    #[test]
    fn replay_rejects_unavailable_county() {
        let err = replay(sample_store(), Dataset::Press, 1846, Some("Middlesex")).unwrap_err();
        assert!(err.to_string().starts_with("This county is not available"));
    }

    #[test]
    fn style_rows_carry_majority_and_highlight() {
        let store = sample_store();
        let frame = replay(store.clone(), Dataset::Press, 1846, Some("kent")).unwrap();
        let rows = style_rows(&frame, &store);

        let kent = rows.iter().find(|r| r.county == "Kent").unwrap();
        assert!(kent.highlighted);
        assert_eq!(kent.majority, "liberal");
        assert_eq!(kent.fill, "red");
        assert_eq!(kent.border, "DarkSlateGray");

        let cork = rows.iter().find(|r| r.county == "Cork").unwrap();
        assert!(!cork.available);
        assert_eq!(cork.fill, "gainsboro");
        assert_eq!(cork.majority, "");
    }

    #[test]
    fn csv_export_has_header_and_one_row_per_county() {
        let store = sample_store();
        let frame = replay(store.clone(), Dataset::Press, 1846, None).unwrap();
        let rows = style_rows(&frame, &store);

        let mut out = Vec::new();
        write_style_csv(&mut out, &rows).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("county,available,majority,fill,border,weight,highlighted")
        );
        assert_eq!(lines.count(), store.county_names().len());
        assert!(text.contains("Surrey,true,conservative,#005ac2,#005ac2,1,false"));
    }
}
