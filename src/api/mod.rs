//! Fuelscope HTTP server
//!
//! Serves the frontend bundle and the three CSV data files, plus a small
//! JSON surface, built with Axum.
//!
//! # Endpoints
//!
//! ## Datasets
//! - `GET /api/v1/datasets` - Manifest of all three series
//! - `GET /api/v1/datasets/:family` - One series' manifest entry
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! ## Static
//! - `/data/*` - The CSV files the frontend fetches
//! - `/*` - The built frontend bundle

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::config::ApiConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState, config: &ApiConfig, data_dir: &std::path::Path) -> Router {
    let api_routes = Router::new()
        .route("/datasets", get(routes::datasets::list_datasets))
        .route("/datasets/:family", get(routes::datasets::get_dataset));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .nest_service("/data", ServeDir::new(data_dir))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(shared_state)
}

/// Bind and serve until shutdown
pub async fn serve(
    state: AppState,
    config: &ApiConfig,
    data_dir: &std::path::Path,
) -> Result<(), std::io::Error> {
    let router = build_router(state, config, data_dir);
    let addr = format!("{}:{}", config.host, config.port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("listening on http://{}", addr);

    axum::serve(listener, router).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{Family, Series, SeriesPoint, SeriesStore};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::NaiveDate;
    use tower::util::ServiceExt;

    fn create_test_app(store: SeriesStore) -> Router {
        let config = ApiConfig::default();
        let state = AppState::new(Arc::new(store));
        build_router(state, &config, std::path::Path::new("data"))
    }

    #[tokio::test]
    async fn test_health_live() {
        let app = create_test_app(SeriesStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health/live")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_datasets_empty_store() {
        let app = create_test_app(SeriesStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datasets")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let datasets = json["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 3);
        assert!(datasets.iter().all(|d| d["available"] == false));
    }

    #[tokio::test]
    async fn test_get_dataset_by_family() {
        let mut store = SeriesStore::new();
        store.insert(Series::new(
            Family::Gas,
            vec![SeriesPoint::new(
                NaiveDate::from_ymd_opt(2013, 1, 1).unwrap(),
                3.32,
            )],
        ));
        let app = create_test_app(store);

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datasets/gas")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["family"], "gas");
        assert_eq!(json["available"], true);
        assert_eq!(json["rows"], 1);
    }

    #[tokio::test]
    async fn test_get_dataset_unknown_family() {
        let app = create_test_app(SeriesStore::new());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/v1/datasets/natural_gas")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
