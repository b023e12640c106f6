//! UI Components
//!
//! Leptos components for the dashboard.

pub mod chart;
pub mod description;
pub mod nav;
pub mod tooltip;

pub use chart::Chart;
pub use description::Description;
pub use nav::Nav;
pub use tooltip::TooltipOverlay;
