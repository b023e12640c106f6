//! Dataset manifest routes
//!
//! - GET /api/v1/datasets - Manifest of all three series
//! - GET /api/v1/datasets/:family - One series' manifest entry

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::api::dto::{DatasetInfo, ManifestResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dataset::Family;

/// GET /api/v1/datasets
pub async fn list_datasets(State(state): State<Arc<AppState>>) -> Json<ManifestResponse> {
    let datasets = Family::all()
        .iter()
        .map(|family| DatasetInfo::from_store(*family, &state.store))
        .collect();

    Json(ManifestResponse { datasets })
}

/// GET /api/v1/datasets/:family
pub async fn get_dataset(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> ApiResult<Json<DatasetInfo>> {
    let family = Family::from_name(&name)
        .ok_or_else(|| ApiError::NotFound(format!("unknown dataset family '{}'", name)))?;

    Ok(Json(DatasetInfo::from_store(family, &state.store)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SeriesStore;

    fn empty_state() -> Arc<AppState> {
        Arc::new(AppState::new(Arc::new(SeriesStore::new())))
    }

    #[tokio::test]
    async fn test_list_covers_all_families() {
        let Json(resp) = list_datasets(State(empty_state())).await;
        assert_eq!(resp.datasets.len(), 3);
        assert!(resp.datasets.iter().all(|d| !d.available));
    }

    #[tokio::test]
    async fn test_get_unknown_family_is_not_found() {
        let result = get_dataset(State(empty_state()), Path("cpi".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_get_known_family() {
        let result = get_dataset(State(empty_state()), Path("inflation".to_string())).await;
        let Json(info) = result.unwrap();
        assert_eq!(info.y_max, 7.0);
    }
}
