//! Health routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Reports degraded when some datasets failed to load; the server still
/// serves whatever did load.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let loaded = state.store.loaded_count();

    let status = match loaded {
        3 => "healthy",
        0 => "unhealthy",
        _ => "degraded",
    };

    Json(HealthResponse {
        status: status.to_string(),
        datasets_loaded: loaded,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Family, Series, SeriesPoint, SeriesStore};
    use chrono::NaiveDate;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_degraded_with_partial_load() {
        let mut store = SeriesStore::new();
        store.insert(Series::new(
            Family::Gas,
            vec![SeriesPoint::new(
                NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
                3.32,
            )],
        ));

        let state = Arc::new(AppState::new(Arc::new(store)));
        let Json(resp) = full_health(State(state)).await;
        assert_eq!(resp.status, "degraded");
        assert_eq!(resp.datasets_loaded, 1);
    }

    #[tokio::test]
    async fn test_health_unhealthy_with_nothing_loaded() {
        let state = Arc::new(AppState::new(Arc::new(SeriesStore::new())));
        let Json(resp) = full_health(State(state)).await;
        assert_eq!(resp.status, "unhealthy");
    }
}
