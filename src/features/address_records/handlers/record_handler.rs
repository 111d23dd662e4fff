use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::address_records::dtos::{
    AddressRecordResponseDto, CreateRecordQuery, FindRecordsQuery, RecordNameQuery,
    UpdateRecordQuery,
};
use crate::features::address_records::services::AddressRecordService;
use crate::shared::constants::{MSG_RECORD_DELETED, MSG_RECORD_UPDATED};
use crate::shared::types::ApiResponse;

/// Create an address record
///
/// Returns the identifier of the new record. Fails with
/// "Address record already exists." when the name is taken and with
/// "State invalid." when the state is not a region of the country.
#[utoipa::path(
    get,
    path = "/address_records/create",
    params(CreateRecordQuery),
    responses(
        (status = 200, description = "Record created, or rejected with a fail envelope", body = ApiResponse<String>),
        (status = 400, description = "Validation error", body = ApiResponse<String>)
    ),
    tag = "address-records"
)]
pub async fn create_record(
    State(service): State<Arc<AddressRecordService>>,
    AppQuery(query): AppQuery<CreateRecordQuery>,
) -> Result<Json<ApiResponse<String>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let id = service.create(query.into()).await?;
    Ok(Json(ApiResponse::success(id.to_string())))
}

/// Find all records located in a state and country
///
/// Both values are canonicalized like on create. An empty list is a
/// successful result.
#[utoipa::path(
    get,
    path = "/address_records/find",
    params(FindRecordsQuery),
    responses(
        (status = 200, description = "Matching records", body = ApiResponse<Vec<AddressRecordResponseDto>>),
    ),
    tag = "address-records"
)]
pub async fn find_records(
    State(service): State<Arc<AddressRecordService>>,
    AppQuery(query): AppQuery<FindRecordsQuery>,
) -> Json<ApiResponse<Vec<AddressRecordResponseDto>>> {
    let records = service.find(&query.state, &query.country).await;
    let dtos: Vec<AddressRecordResponseDto> = records.into_iter().map(Into::into).collect();
    Json(ApiResponse::success(dtos))
}

/// Get a single record by name
#[utoipa::path(
    get,
    path = "/address_records/get",
    params(RecordNameQuery),
    responses(
        (status = 200, description = "Record found, or a fail envelope", body = ApiResponse<AddressRecordResponseDto>),
        (status = 400, description = "Validation error", body = ApiResponse<String>)
    ),
    tag = "address-records"
)]
pub async fn get_record(
    State(service): State<Arc<AddressRecordService>>,
    AppQuery(query): AppQuery<RecordNameQuery>,
) -> Result<Json<ApiResponse<AddressRecordResponseDto>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let record = service.get(&query.name).await?;
    Ok(Json(ApiResponse::success(record.into())))
}

/// Update a record by name
///
/// Empty parameters leave the corresponding field unchanged. A supplied
/// state or country is validated before anything is written.
#[utoipa::path(
    get,
    path = "/address_records/update",
    params(UpdateRecordQuery),
    responses(
        (status = 200, description = "Record updated, or rejected with a fail envelope", body = ApiResponse<String>),
        (status = 400, description = "Validation error", body = ApiResponse<String>)
    ),
    tag = "address-records"
)]
pub async fn update_record(
    State(service): State<Arc<AddressRecordService>>,
    AppQuery(query): AppQuery<UpdateRecordQuery>,
) -> Result<Json<ApiResponse<String>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let (name, patch) = query.into_parts();
    service.update(&name, patch).await?;
    Ok(Json(ApiResponse::success(MSG_RECORD_UPDATED.to_string())))
}

/// Delete a record by name
#[utoipa::path(
    get,
    path = "/address_records/delete",
    params(RecordNameQuery),
    responses(
        (status = 200, description = "Record deleted, or a fail envelope", body = ApiResponse<String>),
        (status = 400, description = "Validation error", body = ApiResponse<String>)
    ),
    tag = "address-records"
)]
pub async fn delete_record(
    State(service): State<Arc<AddressRecordService>>,
    AppQuery(query): AppQuery<RecordNameQuery>,
) -> Result<Json<ApiResponse<String>>> {
    query
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    service.delete(&query.name).await?;
    Ok(Json(ApiResponse::success(MSG_RECORD_DELETED.to_string())))
}
