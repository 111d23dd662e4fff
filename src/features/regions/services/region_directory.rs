use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::features::regions::models::Country;
use crate::features::regions::table::COUNTRIES;
use crate::shared::validation::REGION_CODE_REGEX;

lazy_static! {
    /// Lower-cased name, alias, alpha-2 and alpha-3 -> country
    static ref COUNTRY_INDEX: HashMap<String, &'static Country> = {
        let mut index = HashMap::new();
        for country in COUNTRIES {
            let keys = [country.name, country.alpha2, country.alpha3]
                .into_iter()
                .chain(country.aliases.iter().copied());
            for key in keys {
                index.insert(key.to_lowercase(), country);
            }
        }
        index
    };
}

/// Answers whether a region code is a legal subdivision of a country.
///
/// Backed by the static table in [`crate::features::regions::table`]; every
/// method is a pure function of its inputs.
#[derive(Debug, Default)]
pub struct RegionDirectory;

impl RegionDirectory {
    pub fn new() -> Self {
        Self
    }

    /// All supported countries in table order
    pub fn countries(&self) -> &'static [Country] {
        COUNTRIES
    }

    /// Resolve a country by official name, alias or ISO code (case-insensitive)
    pub fn resolve_country(&self, country: &str) -> Option<&'static Country> {
        COUNTRY_INDEX.get(&country.trim().to_lowercase()).copied()
    }

    /// Canonical code for `state` inside `country`, or `None` when invalid.
    ///
    /// Codes compare case-insensitively and may carry the ISO prefix of the
    /// same country ("US-NY").
    pub fn canonical_state(&self, state: &str, country: &str) -> Option<&'static str> {
        self.canonical_region(state, country).map(|(code, _)| code)
    }

    /// Canonical `(state code, official country name)` for a valid pair.
    ///
    /// Two spellings of the same location ("ny"/"USA" and "NY"/"United States
    /// of America") map to the same pair.
    pub fn canonical_region(
        &self,
        state: &str,
        country: &str,
    ) -> Option<(&'static str, &'static str)> {
        let state = state.trim();
        if !REGION_CODE_REGEX.is_match(state) {
            return None;
        }

        let country = self.resolve_country(country)?;
        let code = state.to_uppercase();
        let code = match code.split_once('-') {
            Some((prefix, rest)) if prefix == country.alpha2 => rest,
            Some(_) => return None,
            None => code.as_str(),
        };

        country.subdivision(code).map(|s| (s.code, country.name))
    }

    pub fn validate(&self, state: &str, country: &str) -> bool {
        self.canonical_state(state, country).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USA: &str = "United States of America";

    #[test]
    fn test_us_states_valid() {
        let directory = RegionDirectory::new();
        for state in ["AZ", "TN", "WI", "NM", "NJ", "NY", "VA", "GA", "LA"] {
            assert!(directory.validate(state, USA), "{state}");
        }
    }

    #[test]
    fn test_canadian_provinces_rejected_for_us() {
        let directory = RegionDirectory::new();
        for state in ["QC", "BC", "NB"] {
            assert!(!directory.validate(state, USA), "{state}");
            assert!(directory.validate(state, "Canada"), "{state}");
        }
    }

    #[test]
    fn test_unknown_code_invalid_everywhere() {
        let directory = RegionDirectory::new();
        for country in directory.countries() {
            assert!(!directory.validate("INVSALID STATE", country.name));
            assert!(!directory.validate("ZZ", country.name));
            assert!(!directory.validate("", country.name));
        }
    }

    #[test]
    fn test_unknown_country_rejects_everything() {
        let directory = RegionDirectory::new();
        assert!(!directory.validate("NY", "Atlantis"));
        assert!(!directory.validate("NY", ""));
    }

    #[test]
    fn test_resolve_country_by_alias_and_iso_code() {
        let directory = RegionDirectory::new();
        for key in [USA, "united states", "US", "usa", "  America "] {
            assert_eq!(directory.resolve_country(key).map(|c| c.alpha2), Some("US"));
        }
        assert_eq!(directory.resolve_country("MEX").map(|c| c.alpha2), Some("MX"));
    }

    #[test]
    fn test_canonical_state_normalizes_case_and_prefix() {
        let directory = RegionDirectory::new();
        assert_eq!(directory.canonical_state("ny", USA), Some("NY"));
        assert_eq!(directory.canonical_state(" US-ny ", USA), Some("NY"));
        assert_eq!(directory.canonical_state("CA-NY", USA), None);
        assert_eq!(directory.canonical_state("nsw", "Australia"), Some("NSW"));
    }

    #[test]
    fn test_canonical_region_merges_spellings() {
        let directory = RegionDirectory::new();
        let expected = Some(("NY", USA));
        assert_eq!(directory.canonical_region("NY", USA), expected);
        assert_eq!(directory.canonical_region("ny", "USA"), expected);
        assert_eq!(directory.canonical_region("US-NY", "us"), expected);
        assert_eq!(directory.canonical_region("QC", "usa"), None);
        assert_eq!(directory.canonical_region("qc", "CAN"), Some(("QC", "Canada")));
    }
}
