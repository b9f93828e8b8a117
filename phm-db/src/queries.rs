//! Typed lookups against the loaded tables.
//!
//! County arguments are expected in lower case, the form used both by the
//! document keys and by [`MapGeometry::county_names`].

use crate::models::{CountyRecord, ElectionRecord, MapGeometry, PressRecord};
use crate::DatasetStore;
use phm_core::{Dataset, Year};

impl DatasetStore {
    /// Press years in ascending order. Never empty.
    pub fn press_years(&self) -> &[Year] {
        &self.inner.press_years
    }

    /// Smallest and largest press year, the year slider bounds.
    pub fn press_year_bounds(&self) -> (Year, Year) {
        let years = self.press_years();
        // `DatasetStore::new` rejects an empty press table
        (years[0], years[years.len() - 1])
    }

    /// Election years present in the election document, ascending.
    pub fn election_years(&self) -> Vec<Year> {
        self.inner.elections.keys().copied().collect()
    }

    pub fn press_record(&self, year: Year, county: &str) -> Option<&PressRecord> {
        self.inner.press.get(&year)?.get(county)
    }

    pub fn election_record(&self, year: Year, county: &str) -> Option<&ElectionRecord> {
        self.inner.elections.get(&year)?.get(county)
    }

    /// The record for `county` in the given dataset and year, as a
    /// [`CountyRecord`].
    pub fn record(&self, dataset: Dataset, year: Year, county: &str) -> Option<&dyn CountyRecord> {
        match dataset {
            Dataset::Press => self.press_record(year, county).map(|r| r as &dyn CountyRecord),
            Dataset::Elections => self
                .election_record(year, county)
                .map(|r| r as &dyn CountyRecord),
        }
    }

    /// Majority label for `county`, if the county has a record.
    pub fn majority(&self, dataset: Dataset, year: Year, county: &str) -> Option<&str> {
        self.record(dataset, year, county).map(|r| r.majority())
    }

    /// Counties with a record in the given dataset and year, sorted.
    ///
    /// A year missing from the dataset yields no counties.
    pub fn counties(&self, dataset: Dataset, year: Year) -> Vec<&str> {
        match dataset {
            Dataset::Press => self
                .inner
                .press
                .get(&year)
                .map(|c| c.keys().map(String::as_str).collect())
                .unwrap_or_default(),
            Dataset::Elections => self
                .inner
                .elections
                .get(&year)
                .map(|c| c.keys().map(String::as_str).collect())
                .unwrap_or_default(),
        }
    }

    pub fn geometry(&self) -> &MapGeometry {
        &self.inner.geometry
    }

    /// Lowercase county name of every geometry feature, in document order.
    pub fn county_names(&self) -> &[String] {
        &self.inner.geometry.county_names
    }
}

#[cfg(test)]
mod tests {
    use crate::fixtures::sample_store;
    use phm_core::Dataset;

    #[test]
    fn press_year_bounds() {
        let store = sample_store();
        assert_eq!(store.press_year_bounds(), (1846, 1925));
    }

    #[test]
    fn election_years_from_document() {
        let store = sample_store();
        assert_eq!(store.election_years(), vec![1847, 1852, 1857]);
    }

    #[test]
    fn press_record_lookup() {
        let store = sample_store();
        let record = store.press_record(1846, "surrey").unwrap();
        assert_eq!(record.majority, "conservative");
        assert_eq!(record.press_data.len(), 2);
        assert!(store.press_record(1846, "middlesex").is_none());
        assert!(store.press_record(1900, "surrey").is_none());
    }

    #[test]
    fn election_record_lookup() {
        let store = sample_store();
        assert_eq!(
            store.election_record(1852, "surrey").map(|r| r.majority.as_str()),
            Some("Peelites")
        );
        assert!(store.election_record(1852, "cork").is_none());
    }

    #[test]
    fn majority_by_dataset() {
        let store = sample_store();
        assert_eq!(store.majority(Dataset::Press, 1850, "kent"), Some("whig"));
        assert_eq!(
            store.majority(Dataset::Elections, 1847, "kent"),
            Some("Liberal Party (Original)")
        );
        assert_eq!(store.majority(Dataset::Elections, 1850, "kent"), None);
    }

    #[test]
    fn counties_for_year() {
        let store = sample_store();
        assert_eq!(store.counties(Dataset::Press, 1846), vec!["dublin", "kent", "surrey"]);
        assert_eq!(store.counties(Dataset::Elections, 1857), vec!["kent"]);
    }

    #[test]
    fn counties_for_missing_year_is_empty() {
        let store = sample_store();
        assert!(store.counties(Dataset::Press, 1700).is_empty());
        assert!(store.counties(Dataset::Elections, 1922).is_empty());
    }

    #[test]
    fn county_names_follow_geometry() {
        let store = sample_store();
        assert_eq!(store.county_names().len(), 5);
        assert_eq!(store.county_names()[4], "middlesex");
        assert!(store.geometry().document.get("features").is_some());
    }
}
