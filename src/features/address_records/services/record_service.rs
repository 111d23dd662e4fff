use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::features::address_records::errors::RecordError;
use crate::features::address_records::models::{AddressRecord, NewAddressRecord, RecordPatch};
use crate::features::regions::RegionDirectory;
use crate::shared::validation::normalize_name;

/// Records ordered by insertion sequence plus the name index into them.
///
/// Both maps live behind one lock so readers never observe one updated
/// without the other.
#[derive(Debug, Default)]
struct RecordTable {
    next_seq: u64,
    records: BTreeMap<u64, AddressRecord>,
    by_name: HashMap<String, u64>,
}

/// Service owning every address record, keyed by normalized name
pub struct AddressRecordService {
    regions: Arc<RegionDirectory>,
    table: RwLock<RecordTable>,
}

impl AddressRecordService {
    pub fn new(regions: Arc<RegionDirectory>) -> Self {
        Self {
            regions,
            table: RwLock::new(RecordTable::default()),
        }
    }

    /// Create a record and return its freshly allocated id.
    ///
    /// The duplicate check, the state validation and the insert run under a
    /// single write lock, so of two concurrent creates for one name only one
    /// can succeed.
    pub async fn create(&self, input: NewAddressRecord) -> Result<Uuid, RecordError> {
        let name = normalize_name(&input.name);
        let mut table = self.table.write().await;

        if table.by_name.contains_key(&name) {
            tracing::warn!("Create rejected, name already exists: name={}", name);
            return Err(RecordError::DuplicateName { name });
        }

        let (state, country) = self
            .regions
            .canonical_region(&input.state, &input.country)
            .ok_or_else(|| {
                tracing::warn!(
                    "Create rejected, invalid state: name={}, state={}, country={}",
                    name,
                    input.state,
                    input.country
                );
                RecordError::InvalidState {
                    state: input.state.clone(),
                    country: input.country.clone(),
                }
            })?;

        let now = Utc::now();
        let record = AddressRecord {
            id: Uuid::now_v7(),
            name: name.clone(),
            street: input.street.trim().to_string(),
            city: input.city.trim().to_string(),
            state: state.to_string(),
            country: country.to_string(),
            created_at: now,
            updated_at: now,
        };
        let id = record.id;

        let seq = table.next_seq;
        table.next_seq += 1;
        table.records.insert(seq, record);
        table.by_name.insert(name.clone(), seq);

        tracing::info!("Address record created: id={}, name={}", id, name);
        Ok(id)
    }

    /// All live records located in `state` and `country`, in insertion order.
    ///
    /// The query goes through the same canonicalization as `create`, so any
    /// spelling accepted on create finds the record again. A pair that is not
    /// a valid region matches nothing.
    pub async fn find(&self, state: &str, country: &str) -> Vec<AddressRecord> {
        let Some((state, country)) = self.regions.canonical_region(state, country) else {
            tracing::debug!(
                "Find matched nothing, invalid region: state={}, country={}",
                state,
                country
            );
            return Vec::new();
        };

        let table = self.table.read().await;
        table
            .records
            .values()
            .filter(|r| r.state == state && r.country == country)
            .cloned()
            .collect()
    }

    /// Fetch one live record by name
    pub async fn get(&self, name: &str) -> Result<AddressRecord, RecordError> {
        let name = normalize_name(name);
        let table = self.table.read().await;
        table
            .by_name
            .get(&name)
            .and_then(|seq| table.records.get(seq))
            .cloned()
            .ok_or(RecordError::NotFound { name })
    }

    /// Apply a partial update to the record named `name`.
    ///
    /// When the patch touches state or country, the resulting pair is
    /// validated first; on failure the record is left untouched.
    pub async fn update(&self, name: &str, patch: RecordPatch) -> Result<(), RecordError> {
        let name = normalize_name(name);
        let mut guard = self.table.write().await;
        let table = &mut *guard;

        let record = match table
            .by_name
            .get(&name)
            .and_then(|seq| table.records.get_mut(seq))
        {
            Some(record) => record,
            None => {
                tracing::warn!("Update rejected, no such record: name={}", name);
                return Err(RecordError::NotFound { name });
            }
        };

        if patch.is_empty() {
            tracing::debug!("Update for name={} carries no changes", name);
            return Ok(());
        }

        let region = if patch.touches_region() {
            let state = patch.state.as_deref().unwrap_or(&record.state);
            let country = patch.country.as_deref().unwrap_or(&record.country);
            match self.regions.canonical_region(state, country) {
                Some(region) => Some(region),
                None => {
                    tracing::warn!(
                        "Update rejected, invalid state: name={}, state={}, country={}",
                        name,
                        state,
                        country
                    );
                    return Err(RecordError::InvalidState {
                        state: state.to_string(),
                        country: country.to_string(),
                    });
                }
            }
        } else {
            None
        };

        if let Some(street) = patch.street {
            record.street = street.trim().to_string();
        }
        if let Some(city) = patch.city {
            record.city = city.trim().to_string();
        }
        if let Some((state, country)) = region {
            record.state = state.to_string();
            record.country = country.to_string();
        }
        record.updated_at = Utc::now();

        tracing::info!("Address record updated: id={}, name={}", record.id, name);
        Ok(())
    }

    /// Remove the record named `name`
    pub async fn delete(&self, name: &str) -> Result<(), RecordError> {
        let name = normalize_name(name);
        let mut table = self.table.write().await;

        let Some(seq) = table.by_name.remove(&name) else {
            tracing::warn!("Delete rejected, no such record: name={}", name);
            return Err(RecordError::NotFound { name });
        };

        if let Some(record) = table.records.remove(&seq) {
            tracing::info!("Address record deleted: id={}, name={}", record.id, name);
        }
        Ok(())
    }

    /// Number of live records
    pub async fn count(&self) -> usize {
        self.table.read().await.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{new_record, record_service, seeded_record_service, USA};
    use fake::faker::address::en::{CityName, StreetName};
    use fake::faker::name::en::Name;
    use fake::Fake;
    use std::collections::HashSet;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_create_distinct_names_yield_distinct_ids() {
        let service = record_service();
        let mut names = HashSet::new();
        while names.len() < 50 {
            names.insert(normalize_name(&Name().fake::<String>()));
        }

        let mut ids = HashSet::new();
        for name in &names {
            let street: String = StreetName().fake();
            let city: String = CityName().fake();
            let id = assert_ok!(
                service
                    .create(new_record(name, &street, &city, "NY", USA))
                    .await
            );
            ids.insert(id);
        }

        assert_eq!(ids.len(), names.len());
        assert_eq!(service.count().await, names.len());
    }

    #[tokio::test]
    async fn test_create_duplicate_name_fails_regardless_of_fields() {
        let service = record_service();
        assert_ok!(
            service
                .create(new_record("Ernie Stenseth", "45 E Liberty St", "Ridgefield Park", "NJ", USA))
                .await
        );

        let err = service
            .create(new_record("ERNIE  stenseth", "1 Other Rd", "Toronto", "ON", "Canada"))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            RecordError::DuplicateName {
                name: "ernie stenseth".to_string()
            }
        );

        // Duplicate is reported even when the state would also be invalid
        let err = service
            .create(new_record("Ernie Stenseth", "x", "y", "QC", USA))
            .await
            .unwrap_err();
        assert!(matches!(err, RecordError::DuplicateName { .. }));
        assert_eq!(service.count().await, 1);
    }

    #[tokio::test]
    async fn test_create_invalid_state_leaves_store_unchanged() {
        let service = seeded_record_service().await;
        let before = service.count().await;

        for state in ["QC", "BC", "NB"] {
            let err = service
                .create(new_record("Josphine Villanueva", "63 Smith Ln", "Moss", state, USA))
                .await
                .unwrap_err();
            assert!(matches!(err, RecordError::InvalidState { .. }));
        }

        assert_eq!(service.count().await, before);
        assert_err!(service.get("Josphine Villanueva").await);
    }

    #[tokio::test]
    async fn test_find_returns_matches_in_insertion_order() {
        let service = seeded_record_service().await;

        let found = service.find("NY", USA).await;
        let names: Vec<_> = found.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["alishia sergi", "derick dhamer", "kirk herritt"]);

        assert_eq!(service.find("NJ", USA).await.len(), 4);
        assert!(service.find("NY", "Canada").await.is_empty());
        assert!(service.find("INVSALID STATE", USA).await.is_empty());
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let service = seeded_record_service().await;
        let before = service.get("Gladys Rim").await.unwrap();

        let patch = RecordPatch {
            street: Some("new street".to_string()),
            city: Some("new city".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update("Gladys Rim", patch).await);

        let after = service.get("gladys rim").await.unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.street, "new street");
        assert_eq!(after.city, "new city");
        assert_eq!(after.state, before.state);
        assert_eq!(after.country, before.country);
        assert_eq!(after.created_at, before.created_at);
        assert!(after.updated_at >= before.updated_at);
    }

    #[tokio::test]
    async fn test_update_revalidates_region() {
        let service = seeded_record_service().await;
        let before = service.get("Gladys Rim").await.unwrap();

        let patch = RecordPatch {
            street: Some("new street".to_string()),
            state: Some("INVSALID STATE".to_string()),
            ..Default::default()
        };
        let err = service.update("Gladys Rim", patch).await.unwrap_err();
        assert!(matches!(err, RecordError::InvalidState { .. }));
        assert_eq!(service.get("Gladys Rim").await.unwrap(), before);

        // Changing only the country still checks the stored state against it
        let patch = RecordPatch {
            country: Some("Canada".to_string()),
            ..Default::default()
        };
        assert_err!(service.update("Gladys Rim", patch).await);

        let patch = RecordPatch {
            state: Some("on".to_string()),
            country: Some("Canada".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update("Gladys Rim", patch).await);
        let moved = service.get("Gladys Rim").await.unwrap();
        assert_eq!((moved.state.as_str(), moved.country.as_str()), ("ON", "Canada"));
        assert_eq!(moved.id, before.id);
    }

    #[tokio::test]
    async fn test_empty_update_changes_nothing() {
        let service = seeded_record_service().await;
        let before = service.get("Gladys Rim").await.unwrap();

        assert_ok!(service.update("Gladys Rim", RecordPatch::default()).await);
        assert_eq!(service.get("Gladys Rim").await.unwrap(), before);

        let err = service
            .update("some name", RecordPatch::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RecordError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_missing_name_fails() {
        let service = seeded_record_service().await;
        let snapshot = service.find("WI", USA).await;

        let patch = RecordPatch {
            street: Some("new street".to_string()),
            ..Default::default()
        };
        let err = service.update("some name", patch).await.unwrap_err();
        assert_eq!(
            err,
            RecordError::NotFound {
                name: "some name".to_string()
            }
        );
        assert_eq!(service.find("WI", USA).await, snapshot);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = seeded_record_service().await;

        assert_ok!(service.delete("Kirk Herritt").await);
        let err = service.delete("Kirk Herritt").await.unwrap_err();
        assert!(matches!(err, RecordError::NotFound { .. }));
        assert_eq!(service.find("NY", USA).await.len(), 2);
    }

    #[tokio::test]
    async fn test_recreate_after_delete_gets_new_id() {
        let service = record_service();
        let input = new_record("Leota Ragel", "99 5th Ave", "Trion", "GA", USA);

        let first = service.create(input.clone()).await.unwrap();
        assert!(service.find("GA", USA).await.iter().any(|r| r.id == first));

        service.delete("Leota Ragel").await.unwrap();
        assert!(service.find("GA", USA).await.is_empty());

        let second = service.create(input).await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_find_accepts_spellings_used_on_create() {
        let service = record_service();
        let cases = [
            ("Kirk Herritt", "ny", USA),
            ("Ernie Stenseth", "US-NJ", USA),
            ("Leota Ragel", " ga ", "USA"),
            ("Jerry Dallen", "VA", "united states"),
        ];

        for (name, state, country) in cases {
            let id = assert_ok!(
                service
                    .create(new_record(name, "1 Main St", "Springfield", state, country))
                    .await
            );

            let found = service.find(state, country).await;
            assert_eq!(found.len(), 1, "{state}/{country}");
            assert_eq!(found[0].id, id);
            assert_eq!(found[0].name, normalize_name(name));
            assert_eq!(found[0].country, USA);

            assert_ok!(service.delete(name).await);
            assert!(service.find(state, country).await.is_empty(), "{state}/{country}");
        }
    }

    #[tokio::test]
    async fn test_update_country_alias_is_stored_canonically() {
        let service = seeded_record_service().await;

        let patch = RecordPatch {
            state: Some("qc".to_string()),
            country: Some("can".to_string()),
            ..Default::default()
        };
        assert_ok!(service.update("Gladys Rim", patch).await);

        let found = service.find("QC", "Canada").await;
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "gladys rim");
        assert_eq!(service.find("qc", "CAN").await, found);
        assert!(service.find("WI", USA).await.is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creates_single_winner() {
        let service = Arc::new(record_service());

        let attempts = (0..16).map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create(new_record("Aja Gehrett", &format!("{} Washington Ave", i), "Nutley", "NJ", USA))
                    .await
            })
        });
        let results: Vec<_> = futures::future::join_all(attempts)
            .await
            .into_iter()
            .map(|joined| joined.unwrap())
            .collect();

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, RecordError::DuplicateName { .. })));
        assert_eq!(service.count().await, 1);
    }
}
