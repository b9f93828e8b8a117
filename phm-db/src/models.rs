//! Typed records for the press, election and geometry documents.
//!
//! Record structs derive `Serialize` so the CLI can print them and the
//! browser bridge can hand them to the chart library as JSON.

use phm_core::Year;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Records for one dataset: year → lowercase county name → record.
pub type YearTable<R> = BTreeMap<Year, BTreeMap<String, R>>;

/// One slice of a county breakdown: a category (press leaning or party)
/// and how many directory entries or seats it holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: u64,
}

/// A county's press directory summary for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PressRecord {
    /// Leaning held by most of the county's titles.
    pub majority: String,
    /// Number of titles per leaning, in document order.
    #[serde(deserialize_with = "ordered_counts")]
    pub press_data: Vec<CategoryCount>,
}

/// A county's general election result for one election year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectionRecord {
    /// Party that won most of the county's seats.
    pub majority: String,
    /// Seats won per party, in document order.
    #[serde(deserialize_with = "ordered_counts")]
    pub data: Vec<CategoryCount>,
}

/// Common view over press and election records.
pub trait CountyRecord {
    fn majority(&self) -> &str;
    fn breakdown(&self) -> &[CategoryCount];
}

impl CountyRecord for PressRecord {
    fn majority(&self) -> &str {
        &self.majority
    }

    fn breakdown(&self) -> &[CategoryCount] {
        &self.press_data
    }
}

impl CountyRecord for ElectionRecord {
    fn majority(&self) -> &str {
        &self.majority
    }

    fn breakdown(&self) -> &[CategoryCount] {
        &self.data
    }
}

/// County polygons, kept as the original document for the map library,
/// plus the lowercase county name of every feature in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapGeometry {
    pub document: serde_json::Value,
    pub county_names: Vec<String>,
}

/// Deserialize a JSON object of `label → count` into a `Vec`, keeping the
/// order the keys appear in. Chart slices are drawn in that order.
fn ordered_counts<'de, D>(deserializer: D) -> Result<Vec<CategoryCount>, D::Error>
where
    D: Deserializer<'de>,
{
    struct OrderedCounts;

    impl<'de> Visitor<'de> for OrderedCounts {
        type Value = Vec<CategoryCount>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an object mapping category labels to counts")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut counts = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((category, count)) = map.next_entry::<String, u64>()? {
                counts.push(CategoryCount { category, count });
            }
            Ok(counts)
        }
    }

    deserializer.deserialize_map(OrderedCounts)
}
