//! Fixed annotation table
//!
//! Four historical event markers per family, pinned to fixed pixel anchors
//! on the chart (independent of data coordinates). A single lookup keyed by
//! `(Family, Step)` replaces any branching on view state.

use serde::{Deserialize, Serialize};

use crate::dataset::Family;
use crate::story::state::Step;

/// Default label offset from the anchor, in pixels
pub const DEFAULT_OFFSET: (f64, f64) = (-20.0, 50.0);

/// One entry of the static marker table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnotationSpec {
    pub label: &'static str,
    /// Pixel anchor within the plot area
    pub x: f64,
    pub y: f64,
    /// Label offset from the anchor
    pub dx: f64,
    pub dy: f64,
}

impl AnnotationSpec {
    const fn new(label: &'static str, x: f64, y: f64) -> Self {
        Self {
            label,
            x,
            y,
            dx: DEFAULT_OFFSET.0,
            dy: DEFAULT_OFFSET.1,
        }
    }

    const fn offset(mut self, dx: f64, dy: f64) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }
}

const IMPORTS_LOW: &str = "U.S. Oil Imports Hit Two-Decade Low";
const PARIS: &str = "Paris Agreement";
const COVID: &str = "COVID-19 Pandemic";
const UKRAINE: &str = "Russia's War With Ukraine";

static GAS_MARKERS: [AnnotationSpec; 4] = [
    AnnotationSpec::new(IMPORTS_LOW, 135.0, 126.0),
    AnnotationSpec::new(PARIS, 475.0, 218.0),
    AnnotationSpec::new(COVID, 885.0, 212.0),
    AnnotationSpec::new(UKRAINE, 1135.0, 53.0).offset(-50.0, -70.0),
];

static CRUDE_MARKERS: [AnnotationSpec; 4] = [
    AnnotationSpec::new(IMPORTS_LOW, 135.0, 62.0),
    AnnotationSpec::new(PARIS, 475.0, 240.0),
    AnnotationSpec::new(COVID, 885.0, 293.0),
    AnnotationSpec::new(UKRAINE, 1135.0, 34.0).offset(-50.0, -70.0),
];

static INFLATION_MARKERS: [AnnotationSpec; 4] = [
    AnnotationSpec::new(IMPORTS_LOW, 135.0, 299.0).offset(-50.0, -70.0),
    AnnotationSpec::new(PARIS, 475.0, 271.0).offset(-50.0, -70.0),
    AnnotationSpec::new(COVID, 885.0, 271.0).offset(10.0, -70.0),
    AnnotationSpec::new(UKRAINE, 1135.0, 28.0).offset(-10.0, -20.0),
];

/// All four markers for a family, in step order
pub fn markers(family: Family) -> &'static [AnnotationSpec; 4] {
    match family {
        Family::Gas => &GAS_MARKERS,
        Family::Crude => &CRUDE_MARKERS,
        Family::Inflation => &INFLATION_MARKERS,
    }
}

/// The marker revealed at a given step
pub fn marker(family: Family, step: Step) -> &'static AnnotationSpec {
    &markers(family)[step.index()]
}

/// Recency of a rendered annotation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Emphasis {
    /// The marker revealed by the most recent advance
    Active,
    /// Markers revealed earlier in the sequence
    Dimmed,
}

impl Emphasis {
    /// CSS color used when drawing
    pub fn color(&self) -> &'static str {
        match self {
            Emphasis::Active => "green",
            Emphasis::Dimmed => "gray",
        }
    }
}

/// A marker ready to draw: table entry plus its recency
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    pub label: &'static str,
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub emphasis: Emphasis,
}

impl Annotation {
    pub fn from_spec(spec: &AnnotationSpec, emphasis: Emphasis) -> Self {
        Self {
            label: spec.label,
            x: spec.x,
            y: spec.y,
            dx: spec.dx,
            dy: spec.dy,
            emphasis,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_has_twelve_entries() {
        for family in Family::all() {
            assert_eq!(markers(*family).len(), 4);
        }
    }

    #[test]
    fn test_gas_anchors_match_script() {
        let gas = markers(Family::Gas);
        assert_eq!(gas[0].label, "U.S. Oil Imports Hit Two-Decade Low");
        assert_eq!((gas[0].x, gas[0].y), (135.0, 126.0));
        assert_eq!(gas[1].label, "Paris Agreement");
        assert_eq!((gas[1].x, gas[1].y), (475.0, 218.0));
        assert_eq!((gas[2].x, gas[2].y), (885.0, 212.0));
        assert_eq!((gas[3].x, gas[3].y), (1135.0, 53.0));
    }

    #[test]
    fn test_offsets() {
        // First three gas markers use the default offset
        let gas = markers(Family::Gas);
        assert_eq!((gas[0].dx, gas[0].dy), DEFAULT_OFFSET);
        // The Ukraine marker is pulled up-left to avoid the price spike
        assert_eq!((gas[3].dx, gas[3].dy), (-50.0, -70.0));
        // Inflation markers all carry custom offsets
        let infl = markers(Family::Inflation);
        assert_eq!((infl[2].dx, infl[2].dy), (10.0, -70.0));
        assert_eq!((infl[3].dx, infl[3].dy), (-10.0, -20.0));
    }

    #[test]
    fn test_labels_are_shared_across_families() {
        for step in Step::all() {
            let label = marker(Family::Gas, *step).label;
            assert_eq!(marker(Family::Crude, *step).label, label);
            assert_eq!(marker(Family::Inflation, *step).label, label);
        }
    }

    #[test]
    fn test_emphasis_colors() {
        assert_eq!(Emphasis::Active.color(), "green");
        assert_eq!(Emphasis::Dimmed.color(), "gray");
    }
}
