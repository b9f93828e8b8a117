//! In-memory store for the three documents the map viewer is built on.
//!
//! The viewer fetches three static JSON documents at startup:
//!
//! - press directories: `year → county → {majority, press_data}`
//! - election results: `year → county → {majority, data}`
//! - county geometry: a GeoJSON feature collection with `properties.NAME`
//!
//! [`DatasetStore`] parses them once into read-only lookup tables keyed by
//! year, then by lowercase county name, and exposes typed queries for the
//! view layer. Documents may be gzip-compressed; see [`loader`].
//!
//! # Usage
//!
//! ```rust
//! use phm_db::DatasetStore;
//!
//! let press = r#"{"1846": {"surrey": {"majority": "conservative", "press_data": {"conservative": 3, "liberal": 1}}}}"#;
//! let elections = r#"{"1847": {"surrey": {"majority": "Conservative", "data": {"Conservative": 2}}}}"#;
//! let geometry = r#"{"type": "FeatureCollection", "features": [{"type": "Feature", "properties": {"NAME": "Surrey"}, "geometry": null}]}"#;
//!
//! let store = DatasetStore::from_documents(press, elections, geometry).unwrap();
//! assert_eq!(store.press_years(), &[1846]);
//! assert!(store.press_record(1846, "surrey").is_some());
//! ```

#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod loader;
pub mod models;
mod queries;

use models::{ElectionRecord, MapGeometry, PressRecord, YearTable};
use phm_core::Year;
use std::rc::Rc;

/// Read-only lookup tables for press, election and geometry data.
///
/// Cheaply cloneable (via `Rc`); the viewer is single-threaded so the
/// tables are shared rather than copied between the reconciler and the UI.
#[derive(Clone, Debug)]
pub struct DatasetStore {
    inner: Rc<StoreInner>,
}

#[derive(Debug)]
struct StoreInner {
    press: YearTable<PressRecord>,
    elections: YearTable<ElectionRecord>,
    geometry: MapGeometry,
    /// Keys of `press`, ascending.
    press_years: Vec<Year>,
}

impl DatasetStore {
    /// Build a store from already-parsed tables.
    ///
    /// Fails when the press table is empty, since the year slider has no
    /// valid position without at least one press year.
    pub fn new(
        press: YearTable<PressRecord>,
        elections: YearTable<ElectionRecord>,
        geometry: MapGeometry,
    ) -> anyhow::Result<Self> {
        let press_years: Vec<Year> = press.keys().copied().collect();
        if press_years.is_empty() {
            anyhow::bail!("press dataset contains no years");
        }
        Ok(Self {
            inner: Rc::new(StoreInner {
                press,
                elections,
                geometry,
                press_years,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn store_builds_from_fixtures() {
        let store = fixtures::sample_store();
        assert_eq!(store.press_years(), &[1846, 1850, 1856, 1925]);
    }

    #[test]
    fn store_is_cloneable() {
        let store = fixtures::sample_store();
        let other = store.clone();
        assert!(Rc::ptr_eq(&store.inner, &other.inner));
    }

    #[test]
    fn empty_press_table_is_rejected() {
        let result = DatasetStore::new(
            YearTable::new(),
            YearTable::new(),
            MapGeometry::default(),
        );
        assert!(result.is_err());
    }
}
