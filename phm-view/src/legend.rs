use phm_core::{ColourScheme, Dataset, LegendItem};
use serde::Serialize;

/// The external colour legend. Charts suppress their own legends, so this
/// is the only place category colours are explained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Legend {
    pub title: &'static str,
    pub items: Vec<LegendItem>,
}

impl Legend {
    pub fn for_dataset(dataset: Dataset) -> Self {
        Self {
            title: dataset.legend_title(),
            items: ColourScheme::for_dataset(dataset).legend_items(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn press_legend() {
        let legend = Legend::for_dataset(Dataset::Press);
        assert_eq!(legend.title, "Press leanings");
        assert_eq!(legend.items[0].label, "Liberal");
        assert_eq!(legend.items[0].colour, "red");
    }

    #[test]
    fn election_legend_in_declared_order() {
        let legend = Legend::for_dataset(Dataset::Elections);
        assert_eq!(legend.title, "Majority parties");
        let labels: Vec<&str> = legend.items.iter().take(3).map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Liberal party (original)", "Multiple majority", "Conservative"]);
    }
}
