use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::core::error::AppError;
use crate::features::address_records::{routes as address_records_routes, AddressRecordService};
use crate::features::regions::{routes as regions_routes, RegionDirectory};
use crate::shared::constants::MSG_INVALID_ROUTE;
use crate::shared::types::ApiResponse;

#[derive(Debug, Serialize)]
struct HealthDto {
    records: usize,
}

/// Health check reporting the number of live records
async fn health_check(
    State(records): State<Arc<AddressRecordService>>,
) -> Json<ApiResponse<HealthDto>> {
    Json(ApiResponse::success(HealthDto {
        records: records.count().await,
    }))
}

async fn invalid_route() -> AppError {
    AppError::NotFound(MSG_INVALID_ROUTE.to_string())
}

/// Application routes without transport layers (CORS, tracing, request ids)
pub fn router(records: Arc<AddressRecordService>, regions: Arc<RegionDirectory>) -> Router {
    Router::new()
        .route("/health", get(health_check).with_state(Arc::clone(&records)))
        .merge(address_records_routes::routes(records))
        .merge(regions_routes::routes(regions))
        .fallback(invalid_route)
}
