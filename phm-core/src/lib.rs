pub mod colour_scheme;
pub mod dataset;
pub mod text;
pub mod years;

pub use colour_scheme::{colour_for, ColourScheme, LegendItem};
pub use dataset::Dataset;
pub use years::{election_year_for, snap_to_nearest_year, Year, ELECTION_YEARS};
