//! Global Application State
//!
//! Reactive state management using Leptos signals. The shared `fuelscope`
//! crate owns the actual state machine; this wraps it in signals and keeps
//! the derived overlay and description text alongside.

use leptos::*;

use fuelscope::dataset::{Family, SeriesStore};
use fuelscope::story::{base_description, Annotation, Sequencer};

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// The three series slots; empty slots render the no-data chart state
    pub store: RwSignal<SeriesStore>,
    /// The view-state machine (which family, which step)
    pub sequencer: RwSignal<Sequencer>,
    /// Annotations currently drawn on the chart
    pub annotations: RwSignal<Vec<Annotation>>,
    /// Description text under the chart: the family landing text, or the
    /// narrative of the most recently revealed event
    pub description: RwSignal<&'static str>,
    /// Tooltip for the currently hovered point
    pub tooltip: RwSignal<Option<TooltipState>>,
    /// True during the initial CSV loads
    pub loading: RwSignal<bool>,
}

/// Tooltip contents and page position
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub page_x: f64,
    pub page_y: f64,
    pub date_line: String,
    pub value_line: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        store: create_rw_signal(SeriesStore::new()),
        sequencer: create_rw_signal(Sequencer::new()),
        annotations: create_rw_signal(Vec::new()),
        description: create_rw_signal(base_description(Family::Gas)),
        tooltip: create_rw_signal(None),
        loading: create_rw_signal(true),
    };

    provide_context(state);
}

impl GlobalState {
    /// Switch the plotted dataset: resets the annotation sequence, clears
    /// the overlay, and shows the family's landing description
    pub fn select_family(&self, family: Family) {
        let text = self
            .sequencer
            .try_update(|seq| seq.select(family))
            .unwrap_or_else(|| base_description(family));

        self.annotations.set(Vec::new());
        self.description.set(text);
        self.tooltip.set(None);
    }

    /// Reveal the next historical event for the active family
    pub fn advance(&self) {
        if let Some(overlay) = self.sequencer.try_update(|seq| seq.advance()) {
            self.annotations.set(overlay.annotations);
            self.description.set(overlay.narrative);
        }
    }
}
