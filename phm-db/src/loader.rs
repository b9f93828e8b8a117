//! Parsing for the press, election and geometry documents.
//!
//! # Document formats
//!
//! - **Press** (`press_data.json`): `{"<year>": {"<county>": {"majority": "...", "press_data": {"<leaning>": n}}}}`
//! - **Elections** (`scripts/elections.json`): `{"<year>": {"<county>": {"majority": "...", "data": {"<party>": n}}}}`
//! - **Geometry** (`updated_map.json`): GeoJSON `FeatureCollection`; every
//!   feature carries its county name in `properties.NAME`.
//!
//! Any document may be gzip-compressed; [`decode_document`] detects this
//! from the magic bytes.

use crate::models::{ElectionRecord, MapGeometry, PressRecord, YearTable};
use crate::DatasetStore;
use anyhow::Context;
use flate2::read::GzDecoder;
use phm_core::Year;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Read;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Turn raw document bytes into text, inflating gzip data when present.
pub fn decode_document(bytes: &[u8]) -> anyhow::Result<String> {
    if bytes.starts_with(&GZIP_MAGIC) {
        let mut text = String::new();
        GzDecoder::new(bytes)
            .read_to_string(&mut text)
            .context("failed to inflate gzip document")?;
        Ok(text)
    } else {
        Ok(String::from_utf8(bytes.to_vec()).context("document is not valid UTF-8")?)
    }
}

/// Parse a `year → county → record` document.
///
/// Year keys must be integers. County keys are lower-cased so lookups can
/// use the lower-cased feature names from the geometry; two keys that only
/// differ in case within one year are an error.
pub fn parse_year_table<R: DeserializeOwned>(
    json: &str,
    document: &str,
) -> anyhow::Result<YearTable<R>> {
    let raw: BTreeMap<String, BTreeMap<String, R>> = serde_json::from_str(json)
        .with_context(|| format!("failed to parse {} document", document))?;

    let mut table = YearTable::new();
    for (key, counties) in raw {
        let year: Year = key
            .trim()
            .parse()
            .with_context(|| format!("{} document has a non-numeric year key '{}'", document, key))?;
        let mut lowered = BTreeMap::new();
        for (county, record) in counties {
            let county_key = county.to_lowercase();
            if lowered.insert(county_key, record).is_some() {
                anyhow::bail!(
                    "{} document lists county '{}' more than once in {}",
                    document,
                    county,
                    year
                );
            }
        }
        table.insert(year, lowered);
    }
    Ok(table)
}

/// Parse the county feature collection.
pub fn parse_geometry(json: &str) -> anyhow::Result<MapGeometry> {
    let document: Value =
        serde_json::from_str(json).context("failed to parse geometry document")?;
    let features = document
        .get("features")
        .and_then(Value::as_array)
        .context("geometry document has no 'features' array")?;

    let county_names = features
        .iter()
        .enumerate()
        .map(|(idx, feature)| {
            feature
                .pointer("/properties/NAME")
                .and_then(Value::as_str)
                .map(str::to_lowercase)
                .with_context(|| format!("geometry feature {} has no properties.NAME", idx))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(MapGeometry {
        document,
        county_names,
    })
}

impl DatasetStore {
    /// Build a store from the three documents as text.
    pub fn from_documents(press: &str, elections: &str, geometry: &str) -> anyhow::Result<Self> {
        let press: YearTable<PressRecord> = parse_year_table(press, "press")?;
        let elections: YearTable<ElectionRecord> = parse_year_table(elections, "elections")?;
        let geometry = parse_geometry(geometry)?;

        log::info!(
            "[PHM] loader: {} press years, {} election years, {} county features",
            press.len(),
            elections.len(),
            geometry.county_names.len()
        );
        Self::new(press, elections, geometry)
    }

    /// Build a store from raw document bytes (plain or gzip-compressed).
    pub fn from_bytes(press: &[u8], elections: &[u8], geometry: &[u8]) -> anyhow::Result<Self> {
        let press = decode_document(press).context("press document")?;
        let elections = decode_document(elections).context("elections document")?;
        let geometry = decode_document(geometry).context("geometry document")?;
        Self::from_documents(&press, &elections, &geometry)
    }
}
