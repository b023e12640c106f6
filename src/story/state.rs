//! View state
//!
//! `ViewState` is one of twelve values: three families by four steps. The
//! family only changes via dataset selection, which resets the step; the
//! step only moves forward, saturating at the terminal step.

use serde::{Deserialize, Serialize};

use crate::dataset::Family;

/// Ordinal position within a family's annotation sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Step {
    One,
    Two,
    Three,
    Four,
}

impl Step {
    pub fn all() -> &'static [Step] {
        &[Step::One, Step::Two, Step::Three, Step::Four]
    }

    /// 1-based ordinal
    pub fn ordinal(&self) -> usize {
        self.index() + 1
    }

    /// 0-based table index
    pub fn index(&self) -> usize {
        match self {
            Step::One => 0,
            Step::Two => 1,
            Step::Three => 2,
            Step::Four => 3,
        }
    }

    /// The following step, saturating at the terminal step
    pub fn next(&self) -> Step {
        match self {
            Step::One => Step::Two,
            Step::Two => Step::Three,
            Step::Three => Step::Four,
            Step::Four => Step::Four,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Step::Four
    }
}

/// Which family is plotted and how far its annotation sequence has run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub family: Family,
    pub step: Step,
}

impl ViewState {
    /// Landing state for a freshly selected family
    pub fn new(family: Family) -> Self {
        Self {
            family,
            step: Step::One,
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState::new(Family::Gas)
    }
}
