//! API response DTOs

use serde::Serialize;

use crate::dataset::{Family, SeriesStore};

/// Manifest of all three series
#[derive(Debug, Serialize)]
pub struct ManifestResponse {
    pub datasets: Vec<DatasetInfo>,
}

/// One series' manifest entry
#[derive(Debug, Serialize)]
pub struct DatasetInfo {
    pub family: Family,
    pub title: String,
    pub unit: String,
    pub y_max: f64,
    pub file: String,
    /// False when the CSV failed to load at startup
    pub available: bool,
    pub rows: usize,
}

impl DatasetInfo {
    pub fn from_store(family: Family, store: &SeriesStore) -> Self {
        let series = store.get(family);
        Self {
            family,
            title: family.title().to_string(),
            unit: family.unit().axis_label().to_string(),
            y_max: family.y_max(),
            file: family.file_name().to_string(),
            available: series.is_some(),
            rows: series.map(|s| s.len()).unwrap_or(0),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub datasets_loaded: usize,
    pub uptime_seconds: u64,
    pub version: String,
}
