use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// Matches any run of whitespace, used to collapse inner spacing in names
    /// - "Kirk   Herritt" -> "Kirk Herritt"
    /// - "Kirk\tHerritt" -> "Kirk Herritt"
    pub static ref WHITESPACE_RUN_REGEX: Regex = Regex::new(r"\s+").unwrap();

    /// Shape of a region code as accepted on input: letters, digits and an
    /// optional single hyphenated ISO prefix
    /// - Valid: "NY", "ny", "US-NY", "CMX", "ACT"
    /// - Invalid: "", "N Y", "US--NY", "INVSALID STATE"
    pub static ref REGION_CODE_REGEX: Regex =
        Regex::new(r"^(?:[A-Za-z]{2}-)?[A-Za-z0-9]{1,3}$").unwrap();
}

/// Normalize a person's name into its lookup key.
///
/// Trims, collapses whitespace runs to a single space and lower-cases.
pub fn normalize_name(name: &str) -> String {
    WHITESPACE_RUN_REGEX
        .replace_all(name.trim(), " ")
        .to_lowercase()
}

/// Reject values made of whitespace only
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Value must not be blank".into());
        return Err(error);
    }
    Ok(())
}
