use utoipa::{Modify, OpenApi};

use crate::features::address_records::{
    dtos as address_records_dtos, handlers as address_records_handlers,
};
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ApiResponse, ResponseStatus};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Address records
        address_records_handlers::create_record,
        address_records_handlers::find_records,
        address_records_handlers::get_record,
        address_records_handlers::update_record,
        address_records_handlers::delete_record,
        // Regions
        regions_handlers::list_countries,
        regions_handlers::list_states,
        regions_handlers::validate_state,
    ),
    components(
        schemas(
            // Shared
            ResponseStatus,
            ApiResponse<String>,
            // Address records
            address_records_dtos::AddressRecordResponseDto,
            ApiResponse<address_records_dtos::AddressRecordResponseDto>,
            ApiResponse<Vec<address_records_dtos::AddressRecordResponseDto>>,
            // Regions
            regions_dtos::CountryResponseDto,
            regions_dtos::SubdivisionResponseDto,
            ApiResponse<Vec<regions_dtos::CountryResponseDto>>,
            ApiResponse<Vec<regions_dtos::SubdivisionResponseDto>>,
            regions_dtos::StateValidationDto,
            ApiResponse<regions_dtos::StateValidationDto>,
        )
    ),
    tags(
        (name = "address-records", description = "Address records keyed by name"),
        (name = "regions", description = "Countries and the region codes valid in them"),
    ),
    info(
        title = "Address Records API",
        version = "0.1.0",
        description = "Address record management service",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
