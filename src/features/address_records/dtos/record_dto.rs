use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::features::address_records::models::{AddressRecord, NewAddressRecord, RecordPatch};
use crate::shared::validation::validate_not_blank;

/// Query parameters for creating a record
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CreateRecordQuery {
    /// Person's name, the unique key of the record
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    #[param(example = "Kirk Herritt")]
    pub name: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Street must not exceed 255 characters"))]
    #[param(example = "88 15th Ave Ne")]
    pub street: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "City must not exceed 255 characters"))]
    #[param(example = "Vestal")]
    pub city: String,

    /// State/region code, validated against `country`
    #[serde(default)]
    #[validate(length(max = 255, message = "State must not exceed 255 characters"))]
    #[param(example = "NY")]
    pub state: String,

    #[serde(default)]
    #[validate(length(max = 255, message = "Country must not exceed 255 characters"))]
    #[param(example = "United States of America")]
    pub country: String,
}

impl From<CreateRecordQuery> for NewAddressRecord {
    fn from(query: CreateRecordQuery) -> Self {
        Self {
            name: query.name,
            street: query.street,
            city: query.city,
            state: query.state,
            country: query.country,
        }
    }
}

/// Query parameters for finding records by location
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FindRecordsQuery {
    /// State code in any form accepted on create ("NY", "ny", "US-NY")
    #[serde(default)]
    #[param(example = "NY")]
    pub state: String,

    /// Country name, alias or ISO code
    #[serde(default)]
    #[param(example = "United States of America")]
    pub country: String,
}

/// Query parameters for updating a record. Empty values leave the field unchanged.
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateRecordQuery {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    pub name: String,

    #[validate(length(max = 255, message = "Street must not exceed 255 characters"))]
    pub street: Option<String>,

    #[validate(length(max = 255, message = "City must not exceed 255 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 255, message = "State must not exceed 255 characters"))]
    pub state: Option<String>,

    #[validate(length(max = 255, message = "Country must not exceed 255 characters"))]
    pub country: Option<String>,
}

impl UpdateRecordQuery {
    /// Split into the record name and the partial update it describes
    pub fn into_parts(self) -> (String, RecordPatch) {
        fn supplied(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.trim().is_empty())
        }

        let patch = RecordPatch {
            street: supplied(self.street),
            city: supplied(self.city),
            state: supplied(self.state),
            country: supplied(self.country),
        };
        (self.name, patch)
    }
}

/// Query parameters addressing a single record by name
#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RecordNameQuery {
    #[serde(default)]
    #[validate(
        length(min = 1, max = 255, message = "Name must be 1-255 characters"),
        custom(function = "validate_not_blank")
    )]
    #[param(example = "Kirk Herritt")]
    pub name: String,
}

/// Response DTO for an address record
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressRecordResponseDto {
    pub id: Uuid,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<AddressRecord> for AddressRecordResponseDto {
    fn from(record: AddressRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            street: record.street,
            city: record.city,
            state: record.state,
            country: record.country,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
