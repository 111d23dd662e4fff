use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A live address record as held by the store
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub id: Uuid,
    /// Normalized name, unique among live records
    pub name: String,
    pub street: String,
    pub city: String,
    /// Canonical region code, always valid for `country`
    pub state: String,
    /// Official country name, whichever alias was supplied
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a record
#[derive(Debug, Clone, Default)]
pub struct NewAddressRecord {
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub country: String,
}

/// Partial update: `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl RecordPatch {
    /// Whether the patch changes the (state, country) pair and needs revalidation
    pub fn touches_region(&self) -> bool {
        self.state.is_some() || self.country.is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && !self.touches_region()
    }
}
