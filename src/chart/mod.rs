//! Chart geometry
//!
//! Pure scale and layout math shared by the canvas renderer and the tests.
//! Mirrors the original chart: a time scale across the series' date extent,
//! a linear y scale from zero to the family's fixed maximum (inverted, since
//! canvas y grows downward), and a 75 px margin layout.

mod layout;
mod scale;
mod tooltip;

pub use layout::{ChartLayout, CHART_MARGIN, POINT_HIT_SLACK, POINT_RADIUS};
pub use scale::{LinearScale, TimeScale};
pub use tooltip::{format_date, Tooltip};
