//! Ownership of the two donut chart instances.
//!
//! The chart library keeps one instance per canvas. Creating a second
//! instance on a canvas without destroying the first leaves a stale overlay
//! behind, so every render goes through [`ChartRegistry`], which destroys
//! whatever is live for a chart before creating its replacement.

use crate::detail::{ChartSpec, DetailView};
use phm_core::Dataset;
use serde::Serialize;
use std::collections::BTreeMap;

/// Logical identity of a chart in the detail panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum ChartKind {
    Press,
    Election,
}

impl ChartKind {
    pub const ALL: [ChartKind; 2] = [ChartKind::Press, ChartKind::Election];

    /// DOM id of the canvas the chart is drawn on.
    pub fn canvas_id(&self) -> &'static str {
        match self {
            ChartKind::Press => "press-chart",
            ChartKind::Election => "election-chart",
        }
    }

    /// Dataset whose colour scheme colours the slices.
    pub fn dataset(&self) -> Dataset {
        match self {
            ChartKind::Press => Dataset::Press,
            ChartKind::Election => Dataset::Elections,
        }
    }

    pub fn title_prefix(&self) -> &'static str {
        match self {
            ChartKind::Press => "Press leanings",
            ChartKind::Election => "MPs elected",
        }
    }
}

/// Something that can draw and remove charts: the browser bridge in the
/// app, a recorder in tests.
pub trait ChartSurface {
    fn create(&mut self, spec: &ChartSpec);
    fn destroy(&mut self, kind: ChartKind);
}

/// Registry of live chart instances keyed by [`ChartKind`].
pub struct ChartRegistry<S: ChartSurface> {
    surface: S,
    live: BTreeMap<ChartKind, ChartSpec>,
}

impl<S: ChartSurface> ChartRegistry<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            live: BTreeMap::new(),
        }
    }

    /// Replace the chart for `kind`: destroy the live instance if there is
    /// one, then create `spec` if given.
    pub fn set(&mut self, kind: ChartKind, spec: Option<&ChartSpec>) {
        if self.live.remove(&kind).is_some() {
            self.surface.destroy(kind);
        }
        if let Some(spec) = spec {
            self.surface.create(spec);
            self.live.insert(kind, spec.clone());
        }
    }

    /// Bring both charts in line with a rendered detail view.
    pub fn apply(&mut self, detail: &DetailView) {
        for kind in ChartKind::ALL {
            self.set(kind, detail.chart(kind));
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detail::ChartSlice;

    #[derive(Debug, PartialEq)]
    enum Call {
        Create(ChartKind),
        Destroy(ChartKind),
    }

    #[derive(Default)]
    struct Recorder(Vec<Call>);

    impl ChartSurface for Recorder {
        fn create(&mut self, spec: &ChartSpec) {
            self.0.push(Call::Create(spec.kind));
        }

        fn destroy(&mut self, kind: ChartKind) {
            self.0.push(Call::Destroy(kind));
        }
    }

    fn spec(kind: ChartKind) -> ChartSpec {
        ChartSpec {
            kind,
            title: "Test".to_string(),
            slices: vec![ChartSlice {
                label: "liberal".to_string(),
                count: 1,
                colour: Some("red"),
            }],
            datalabel_colour: "white",
        }
    }

    #[test]
    fn first_render_only_creates() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.set(ChartKind::Press, Some(&spec(ChartKind::Press)));
        assert_eq!(registry.surface.0, vec![Call::Create(ChartKind::Press)]);
        assert!(registry.live.get(&ChartKind::Press).is_some());
    }

    #[test]
    fn rerender_destroys_before_creating() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.set(ChartKind::Press, Some(&spec(ChartKind::Press)));
        registry.set(ChartKind::Press, Some(&spec(ChartKind::Press)));
        assert_eq!(
            registry.surface.0,
            vec![
                Call::Create(ChartKind::Press),
                Call::Destroy(ChartKind::Press),
                Call::Create(ChartKind::Press),
            ]
        );
    }

    #[test]
    fn clearing_an_empty_slot_is_a_no_op() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.set(ChartKind::Election, None);
        assert!(registry.surface.0.is_empty());
    }

    #[test]
    fn charts_are_independent() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.set(ChartKind::Press, Some(&spec(ChartKind::Press)));
        registry.set(ChartKind::Election, Some(&spec(ChartKind::Election)));
        registry.set(ChartKind::Election, None);
        assert!(registry.live.get(&ChartKind::Press).is_some());
        assert!(registry.live.get(&ChartKind::Election).is_none());
        assert_eq!(registry.surface.0.last(), Some(&Call::Destroy(ChartKind::Election)));
    }

    #[test]
    fn applying_an_empty_detail_destroys_everything_live() {
        let mut registry = ChartRegistry::new(Recorder::default());
        registry.set(ChartKind::Press, Some(&spec(ChartKind::Press)));
        registry.set(ChartKind::Election, Some(&spec(ChartKind::Election)));
        registry.apply(&DetailView {
            message: Some("Click on a county".to_string()),
            press_chart: None,
            election_chart: None,
        });
        assert!(registry.live.is_empty());
        let destroys = registry
            .surface
            .0
            .iter()
            .filter(|c| matches!(c, Call::Destroy(_)))
            .count();
        assert_eq!(destroys, 2);
    }
}
