//! # Fuelscope
//!
//! Interactive time-series charts of U.S. gasoline prices, crude oil prices,
//! and inflation, with a guided sequence of historical-event annotations the
//! viewer steps through one click at a time.
//!
//! ## Modules
//!
//! - [`dataset`]: the three economic series and their CSV loading
//! - [`story`]: the view-state machine, annotation table, and narratives
//! - [`chart`]: scale/layout math and tooltip formatting
//! - [`config`], [`api`]: server configuration and the Axum static/JSON
//!   server (behind the `server` feature; the WASM frontend builds without it)
//!
//! ## Quick start
//!
//! ```rust
//! use fuelscope::dataset::Family;
//! use fuelscope::story::{Emphasis, Sequencer};
//!
//! let mut seq = Sequencer::new();
//! seq.select(Family::Gas);
//!
//! let overlay = seq.advance();
//! assert_eq!(overlay.annotations.len(), 1);
//! assert_eq!(overlay.annotations[0].emphasis, Emphasis::Active);
//! ```

#[cfg(feature = "server")]
pub mod api;
pub mod chart;
#[cfg(feature = "server")]
pub mod config;
pub mod dataset;
pub mod story;

// Re-export top-level types for convenience
pub use chart::{ChartLayout, LinearScale, TimeScale, Tooltip};
pub use dataset::{
    DatasetError, DatasetResult, Family, LoadReport, Series, SeriesLoader, SeriesPoint,
    SeriesStore, Unit,
};
pub use story::{Annotation, Emphasis, Overlay, Sequencer, Step, ViewState};

#[cfg(feature = "server")]
pub use api::{build_router, serve, ApiError, AppState};

#[cfg(feature = "server")]
pub use config::{ApiConfig, Config, ConfigError, DataConfig, LoggingConfig};
