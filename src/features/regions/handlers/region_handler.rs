use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    CountryResponseDto, StateValidationDto, SubdivisionResponseDto, ValidateStateQuery,
};
use crate::features::regions::services::RegionDirectory;
use crate::shared::types::ApiResponse;

/// List countries whose region codes can be validated
#[utoipa::path(
    get,
    path = "/regions/countries",
    responses(
        (status = 200, description = "Supported countries", body = ApiResponse<Vec<CountryResponseDto>>),
    ),
    tag = "regions"
)]
pub async fn list_countries(
    State(directory): State<Arc<RegionDirectory>>,
) -> Json<ApiResponse<Vec<CountryResponseDto>>> {
    let dtos: Vec<CountryResponseDto> = directory.countries().iter().map(Into::into).collect();
    Json(ApiResponse::success(dtos))
}

/// List valid state/province codes for a country
#[utoipa::path(
    get,
    path = "/regions/countries/{country}/states",
    params(
        ("country" = String, Path, description = "Country name, alias or ISO 3166-1 code")
    ),
    responses(
        (status = 200, description = "Region codes of the country", body = ApiResponse<Vec<SubdivisionResponseDto>>),
        (status = 404, description = "Country not supported", body = ApiResponse<String>)
    ),
    tag = "regions"
)]
pub async fn list_states(
    State(directory): State<Arc<RegionDirectory>>,
    Path(country): Path<String>,
) -> Result<Json<ApiResponse<Vec<SubdivisionResponseDto>>>> {
    let country = directory
        .resolve_country(&country)
        .ok_or_else(|| AppError::NotFound(format!("Country '{}' is not supported.", country)))?;

    let dtos: Vec<SubdivisionResponseDto> = country.subdivisions.iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(dtos)))
}

/// Check whether a state code is a region of a country
#[utoipa::path(
    get,
    path = "/regions/validate",
    params(ValidateStateQuery),
    responses(
        (status = 200, description = "Validation result", body = ApiResponse<StateValidationDto>),
    ),
    tag = "regions"
)]
pub async fn validate_state(
    State(directory): State<Arc<RegionDirectory>>,
    AppQuery(query): AppQuery<ValidateStateQuery>,
) -> Json<ApiResponse<StateValidationDto>> {
    let valid = directory.validate(&query.state, &query.country);
    let canonical = directory
        .canonical_state(&query.state, &query.country)
        .map(str::to_string);

    Json(ApiResponse::success(StateValidationDto {
        state: query.state,
        country: query.country,
        valid,
        canonical,
    }))
}
