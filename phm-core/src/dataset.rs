use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two datasets a user can toggle between.
///
/// The string forms match the values carried by the dataset radio buttons
/// (`"Press"` and `"Elections"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Dataset {
    /// Press directory leanings, keyed by press year.
    #[default]
    Press,
    /// General election results, keyed by election year.
    Elections,
}

impl Dataset {
    pub const ALL: [Dataset; 2] = [Dataset::Press, Dataset::Elections];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Press => "Press",
            Dataset::Elections => "Elections",
        }
    }

    /// Heading shown above the colour legend while this dataset is active.
    pub fn legend_title(&self) -> &'static str {
        match self {
            Dataset::Press => "Press leanings",
            Dataset::Elections => "Majority parties",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dataset {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "press" => Ok(Dataset::Press),
            "elections" | "election" => Ok(Dataset::Elections),
            other => anyhow::bail!("unknown dataset '{}', expected Press or Elections", other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_radio_values() {
        assert_eq!("Press".parse::<Dataset>().unwrap(), Dataset::Press);
        assert_eq!("Elections".parse::<Dataset>().unwrap(), Dataset::Elections);
        assert_eq!(" elections ".parse::<Dataset>().unwrap(), Dataset::Elections);
    }

    #[test]
    fn rejects_unknown_dataset() {
        assert!("Census".parse::<Dataset>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for dataset in Dataset::ALL {
            assert_eq!(dataset.to_string().parse::<Dataset>().unwrap(), dataset);
        }
    }

    #[test]
    fn legend_titles() {
        assert_eq!(Dataset::Press.legend_title(), "Press leanings");
        assert_eq!(Dataset::Elections.legend_title(), "Majority parties");
    }
}
