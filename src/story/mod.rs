//! Annotation story sequencer
//!
//! A linear, per-family four-step state machine. Each advance rebuilds the
//! whole overlay for steps one through the current step, with the newest
//! marker drawn in the active color and earlier ones dimmed, then moves the
//! step forward. The terminal step re-renders the same overlay. Selecting a
//! dataset resets to that family's first step with an empty overlay.

mod annotations;
mod narrative;
mod state;

pub use annotations::{
    marker, markers, Annotation, AnnotationSpec, Emphasis, DEFAULT_OFFSET,
};
pub use narrative::{base_description, event_narrative};
pub use state::{Step, ViewState};

use crate::dataset::Family;

/// Overlay produced by one advance: the markers to draw and the narrative
/// text for the newly revealed step
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub annotations: Vec<Annotation>,
    pub narrative: &'static str,
}

impl Overlay {
    /// Build the overlay for steps one through `step` of a family
    fn through(family: Family, step: Step) -> Self {
        let annotations = markers(family)[..=step.index()]
            .iter()
            .enumerate()
            .map(|(idx, spec)| {
                let emphasis = if idx == step.index() {
                    Emphasis::Active
                } else {
                    Emphasis::Dimmed
                };
                Annotation::from_spec(spec, emphasis)
            })
            .collect();

        Self {
            annotations,
            narrative: event_narrative(step),
        }
    }
}

/// The one stateful piece: current view state plus its transitions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequencer {
    state: ViewState,
}

impl Sequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn family(&self) -> Family {
        self.state.family
    }

    /// Switch the plotted dataset: resets to the family's first step and
    /// clears the overlay. Returns the family's landing description.
    pub fn select(&mut self, family: Family) -> &'static str {
        self.state = ViewState::new(family);
        base_description(family)
    }

    /// Reveal the next event: renders markers for steps one through the
    /// current step, then moves forward. Idempotent at the terminal step.
    pub fn advance(&mut self) -> Overlay {
        let step = self.state.step;
        let overlay = Overlay::through(self.state.family, step);
        self.state.step = step.next();
        overlay
    }
}
