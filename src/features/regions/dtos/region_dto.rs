use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{Country, Subdivision};

/// Response DTO for a supported country
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountryResponseDto {
    pub name: String,
    pub alpha2: String,
    pub alpha3: String,
    pub subdivision_count: usize,
}

impl From<&Country> for CountryResponseDto {
    fn from(country: &Country) -> Self {
        Self {
            name: country.name.to_string(),
            alpha2: country.alpha2.to_string(),
            alpha3: country.alpha3.to_string(),
            subdivision_count: country.subdivisions.len(),
        }
    }
}

/// Response DTO for a state/province code
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubdivisionResponseDto {
    pub code: String,
    pub name: String,
}

impl From<&Subdivision> for SubdivisionResponseDto {
    fn from(subdivision: &Subdivision) -> Self {
        Self {
            code: subdivision.code.to_string(),
            name: subdivision.name.to_string(),
        }
    }
}

/// Query parameters for checking a state code against a country
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ValidateStateQuery {
    #[serde(default)]
    #[param(example = "QC")]
    pub state: String,

    #[serde(default)]
    #[param(example = "Canada")]
    pub country: String,
}

/// Result of a state code check
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StateValidationDto {
    pub state: String,
    pub country: String,
    pub valid: bool,
    /// Canonical form of the code when valid, e.g. "NY" for "us-ny"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
}
