//! Small sample documents shared by the test suites.
//!
//! Press years 1846, 1850, 1856 and 1925; election years 1847, 1852 and 1857.
//! Middlesex appears in the geometry but in neither dataset. Dublin has
//! press data in 1846 but no 1847 election result; Cork has an 1847
//! election result but no 1846 press data.

use crate::DatasetStore;

pub const PRESS_JSON: &str = r#"{
    "1850": {
        "surrey": {"majority": "liberal", "press_data": {"liberal": 2, "conservative": 1}},
        "kent": {"majority": "whig", "press_data": {"whig": 1}}
    },
    "1846": {
        "surrey": {"majority": "conservative", "press_data": {"conservative": 3, "liberal": 1}},
        "kent": {"majority": "liberal", "press_data": {"liberal": 2, "neutral": 1}},
        "dublin": {"majority": "nationalist", "press_data": {"nationalist": 4, "chartist": 1}}
    },
    "1856": {
        "kent": {"majority": "neutral", "press_data": {"neutral": 2}}
    },
    "1925": {
        "surrey": {"majority": "conservative", "press_data": {"conservative": 5}}
    }
}"#;

pub const ELECTIONS_JSON: &str = r#"{
    "1847": {
        "surrey": {"majority": "Conservative", "data": {"Conservative": 2, "Liberal Party (Original)": 1}},
        "kent": {"majority": "Liberal Party (Original)", "data": {"Liberal Party (Original)": 3}},
        "cork": {"majority": "Nationalists", "data": {"Nationalists": 2}}
    },
    "1852": {
        "surrey": {"majority": "Peelites", "data": {"Peelites": 2}},
        "kent": {"majority": "multiple majority", "data": {"Conservative": 1, "Liberal Party (Original)": 1}}
    },
    "1857": {
        "kent": {"majority": "Conservative", "data": {"Conservative": 2}}
    }
}"#;

pub const GEOMETRY_JSON: &str = r#"{
    "type": "FeatureCollection",
    "features": [
        {"type": "Feature", "properties": {"NAME": "Surrey"}, "geometry": {"type": "Polygon", "coordinates": [[[-0.5, 51.2], [-0.1, 51.2], [-0.1, 51.4], [-0.5, 51.2]]]}},
        {"type": "Feature", "properties": {"NAME": "Kent"}, "geometry": {"type": "Polygon", "coordinates": [[[0.5, 51.2], [1.0, 51.2], [1.0, 51.4], [0.5, 51.2]]]}},
        {"type": "Feature", "properties": {"NAME": "Dublin"}, "geometry": {"type": "Polygon", "coordinates": [[[-6.4, 53.3], [-6.1, 53.3], [-6.1, 53.5], [-6.4, 53.3]]]}},
        {"type": "Feature", "properties": {"NAME": "Cork"}, "geometry": {"type": "Polygon", "coordinates": [[[-8.6, 51.8], [-8.3, 51.8], [-8.3, 52.0], [-8.6, 51.8]]]}},
        {"type": "Feature", "properties": {"NAME": "Middlesex"}, "geometry": {"type": "Polygon", "coordinates": [[[-0.4, 51.5], [-0.1, 51.5], [-0.1, 51.6], [-0.4, 51.5]]]}}
    ]
}"#;

/// A store built from the sample documents.
pub fn sample_store() -> DatasetStore {
    DatasetStore::from_documents(PRESS_JSON, ELECTIONS_JSON, GEOMETRY_JSON)
        .expect("sample documents parse")
}
