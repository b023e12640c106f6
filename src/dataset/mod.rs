//! Dataset layer
//!
//! Holds the three tracked economic series and loads them from CSV:
//! - `Family`: which series (gasoline, crude oil, inflation) plus its
//!   static chart metadata
//! - `Series` / `SeriesPoint`: an immutable, ordered run of monthly values
//! - `SeriesStore`: the three optional slots, left empty on load failure
//! - `SeriesLoader`: CSV parsing with per-row error reporting

mod error;
mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use loader::{LoadReport, SeriesLoader};
pub use types::{Family, Series, SeriesPoint, SeriesStore, Unit, EVENT_SOURCE_URL};
