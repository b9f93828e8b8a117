//! Fixed category → colour mappings for the two datasets.
//!
//! Entry order is the order the legend is drawn in, so the tables below are
//! slices rather than maps. Lookups are linear; each scheme has fewer than
//! twenty entries.

use crate::dataset::Dataset;
use crate::text::title_case;
use serde::Serialize;

/// An ordered category → colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColourScheme {
    entries: &'static [(&'static str, &'static str)],
}

/// Colours for the political leaning of press directory entries.
pub const PRESS: ColourScheme = ColourScheme {
    entries: &[
        ("liberal", "red"),
        ("multiple majority", "#4CBB17"),
        ("independent", "gold"),
        ("neutral", "DarkSlateGray"),
        ("conservative", "#005ac2"),
        ("undefined", "gray"),
        ("unionist", "MidnightBlue"),
        ("constitutional", "Olive"),
        ("nationalist", "Tomato"),
        ("liberal; unionist", "BlueViolet"),
        ("liberal; conservative", "purple"),
        ("independent; liberal", "pink"),
        ("no-politics", "gray"),
        ("whig", "orange"),
        ("other", "fuchsia"),
    ],
};

/// Colours for the party holding the majority of a county's seats.
pub const ELECTIONS: ColourScheme = ColourScheme {
    entries: &[
        ("Liberal Party (Original)", "red"),
        ("multiple majority", "#4CBB17"),
        ("Conservative", "#005ac2"),
        ("Unionists", "MidnightBlue"),
        ("Labour Party", "DarkRed"),
        ("Conservatives (Coalition)", "teal"),
        ("Liberals (Coalition)", "orange"),
        ("Liberal Unionists", "BlueViolet"),
        ("Independent Liberals", "blue"),
        ("Nationalists", "Tomato"),
        ("Sinn Fein", "ForestGreen"),
        ("National Liberals", "violet"),
        ("Independent Unionists", "lime"),
        ("Independent Nationalists", "#ff9380"),
        ("Anti-Parnell Nationalists", "#ffbeb3"),
        ("Independent Conservatives", "magenta"),
        ("Independent Labour", "brown"),
        ("Peelites", "indigo"),
    ],
};

/// One swatch of the on-screen legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LegendItem {
    /// Title-cased category label.
    pub label: String,
    pub colour: &'static str,
}

impl ColourScheme {
    pub fn for_dataset(dataset: Dataset) -> Self {
        match dataset {
            Dataset::Press => PRESS,
            Dataset::Elections => ELECTIONS,
        }
    }

    /// Colour registered for `label`, or `None` when the label is unknown.
    pub fn colour_for(&self, label: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(category, _)| *category == label)
            .map(|(_, colour)| *colour)
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn legend_items(&self) -> Vec<LegendItem> {
        self.entries()
            .map(|(label, colour)| LegendItem {
                label: title_case(label),
                colour,
            })
            .collect()
    }
}

/// Colour for a category of the given dataset.
pub fn colour_for(dataset: Dataset, label: &str) -> Option<&'static str> {
    ColourScheme::for_dataset(dataset).colour_for(label)
}
