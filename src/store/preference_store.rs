//! In-memory preference store with a dual-keyed index.
//!
//! Holds every user record behind a single lock so that the by-id map and the
//! by-email map always change together. Records live only for the lifetime of
//! the process.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{AppError, AppResult};
use crate::models::{NewUserRecord, UserRecord};

/// Authoritative in-memory index of user records, keyed by id with a
/// secondary unique index by email.
///
/// All mutations take the write lock over both maps at once, so no observer
/// ever sees the old email mapped to a missing id or the new email unmapped
/// while the record is already updated. Cloning is cheap (`Arc` internally),
/// matching how the service layer passes shared state around.
#[derive(Clone, Default)]
pub struct PreferenceStore {
    inner: Arc<RwLock<Inner>>,
}

#[derive(Default)]
struct Inner {
    by_id: HashMap<i32, UserRecord>,
    id_by_email: HashMap<String, i32>,
}

impl PreferenceStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given records.
    ///
    /// Intended for the startup seed set; records are assumed to carry
    /// distinct ids and emails.
    pub fn from_records(records: Vec<UserRecord>) -> Self {
        let mut inner = Inner::default();
        for record in records {
            inner.id_by_email.insert(record.email.clone(), record.id);
            inner.by_id.insert(record.id, record);
        }
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Returns every record. Order is unspecified but stable within a
    /// single snapshot.
    pub fn list_all(&self) -> Vec<UserRecord> {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner.by_id.values().cloned().collect()
    }

    /// Finds a record by id.
    pub fn get_by_id(&self, id: i32) -> Option<UserRecord> {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner.by_id.get(&id).cloned()
    }

    /// Finds a record by email via the secondary index.
    pub fn get_by_email(&self, email: &str) -> Option<UserRecord> {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner
            .id_by_email
            .get(email)
            .and_then(|id| inner.by_id.get(id))
            .cloned()
    }

    /// Checks whether a record exists for the given id.
    pub fn exists_by_id(&self, id: i32) -> bool {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner.by_id.contains_key(&id)
    }

    /// Checks whether a record exists for the given email.
    pub fn exists_by_email(&self, email: &str) -> bool {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner.id_by_email.contains_key(email)
    }

    /// Returns the id the next create would assign: one past the highest
    /// existing id, or 1 for an empty store.
    ///
    /// Deleted ids below the maximum are never revisited. Deleting the
    /// highest-id record does make its id eligible again on the next create;
    /// that reuse is accepted.
    pub fn next_id(&self) -> i32 {
        let inner = self.inner.read().expect("preference store lock poisoned");
        inner.next_id()
    }

    /// Inserts a new record, assigning its id and indexing its email.
    ///
    /// Id allocation, the uniqueness check, and both index insertions happen
    /// under one write lock, so concurrent creates cannot collide on an id
    /// or an email.
    ///
    /// # Returns
    /// The created record with its assigned id, or `Duplicate` when the
    /// email is already indexed.
    pub fn create(&self, new_record: NewUserRecord) -> AppResult<UserRecord> {
        let mut inner = self.inner.write().expect("preference store lock poisoned");

        if inner.id_by_email.contains_key(&new_record.email) {
            return Err(AppError::Duplicate {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: new_record.email,
            });
        }

        let id = inner.next_id();
        let record = UserRecord {
            id,
            email: new_record.email,
            phone: new_record.phone,
            preferences: new_record.preferences,
        };

        inner.id_by_email.insert(record.email.clone(), id);
        inner.by_id.insert(id, record.clone());

        Ok(record)
    }

    /// Replaces the record stored under `id`.
    ///
    /// The stored id always wins over whatever id the caller put in
    /// `record`. When the email changes, the old index entry is removed and
    /// the new one added in the same critical section as the by-id
    /// replacement.
    ///
    /// # Returns
    /// The stored record, `NotFound` when the id is absent, or `Duplicate`
    /// when the new email already belongs to a different record.
    pub fn update(&self, id: i32, mut record: UserRecord) -> AppResult<UserRecord> {
        let mut inner = self.inner.write().expect("preference store lock poisoned");

        let old_email = match inner.by_id.get(&id) {
            Some(existing) => existing.email.clone(),
            None => {
                return Err(AppError::NotFound {
                    entity: "user".to_string(),
                    field: "id".to_string(),
                    value: id.to_string(),
                });
            }
        };

        record.id = id;

        if record.email != old_email {
            if let Some(&other_id) = inner.id_by_email.get(&record.email) {
                if other_id != id {
                    return Err(AppError::Duplicate {
                        entity: "user".to_string(),
                        field: "email".to_string(),
                        value: record.email,
                    });
                }
            }
            inner.id_by_email.remove(&old_email);
            inner.id_by_email.insert(record.email.clone(), id);
        }

        inner.by_id.insert(id, record.clone());

        Ok(record)
    }

    /// Removes the record and its email index entry.
    ///
    /// # Returns
    /// `true` when a record existed under the id.
    pub fn delete(&self, id: i32) -> bool {
        let mut inner = self.inner.write().expect("preference store lock poisoned");

        match inner.by_id.remove(&id) {
            Some(record) => {
                inner.id_by_email.remove(&record.email);
                true
            }
            None => false,
        }
    }
}

impl Inner {
    fn next_id(&self) -> i32 {
        self.by_id.keys().max().map_or(1, |max| max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChannelPreferences;
    use proptest::prelude::*;

    fn new_record(email: &str) -> NewUserRecord {
        NewUserRecord {
            email: email.to_string(),
            phone: "+123456789".to_string(),
            preferences: ChannelPreferences {
                email: true,
                sms: false,
            },
        }
    }

    #[test]
    fn test_next_id_on_empty_store() {
        let store = PreferenceStore::new();
        assert_eq!(store.next_id(), 1);
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let store = PreferenceStore::new();
        let created = store.create(new_record("a@x.com")).unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(store.get_by_id(1), Some(created.clone()));
        assert_eq!(store.get_by_email("a@x.com"), Some(created));
        assert!(store.exists_by_id(1));
        assert!(store.exists_by_email("a@x.com"));
        assert!(!store.exists_by_id(2));
        assert!(!store.exists_by_email("b@x.com"));
    }

    #[test]
    fn test_create_rejects_duplicate_email() {
        let store = PreferenceStore::new();
        store.create(new_record("a@x.com")).unwrap();

        let error = store.create(new_record("a@x.com")).unwrap_err();
        assert!(matches!(error, AppError::Duplicate { .. }));
        assert_eq!(store.list_all().len(), 1);
    }

    #[test]
    fn test_update_forces_stored_id() {
        let store = PreferenceStore::new();
        let created = store.create(new_record("a@x.com")).unwrap();

        let mut tampered = created.clone();
        tampered.id = 999;
        let updated = store.update(created.id, tampered).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(store.get_by_id(created.id).unwrap().id, created.id);
        assert!(store.get_by_id(999).is_none());
    }

    #[test]
    fn test_update_reindexes_changed_email() {
        let store = PreferenceStore::new();
        let created = store.create(new_record("old@x.com")).unwrap();

        let mut changed = created.clone();
        changed.email = "new@x.com".to_string();
        store.update(created.id, changed).unwrap();

        assert!(store.get_by_email("old@x.com").is_none());
        assert_eq!(store.get_by_email("new@x.com").unwrap().id, created.id);
    }

    #[test]
    fn test_update_rejects_email_of_other_record() {
        let store = PreferenceStore::new();
        let first = store.create(new_record("first@x.com")).unwrap();
        store.create(new_record("second@x.com")).unwrap();

        let mut stolen = first.clone();
        stolen.email = "second@x.com".to_string();
        let error = store.update(first.id, stolen).unwrap_err();

        assert!(matches!(error, AppError::Duplicate { .. }));
        assert_eq!(store.get_by_email("first@x.com").unwrap().id, first.id);
    }

    #[test]
    fn test_update_missing_id_is_not_found() {
        let store = PreferenceStore::new();
        let record = UserRecord {
            id: 7,
            email: "ghost@x.com".to_string(),
            phone: "+1".to_string(),
            preferences: ChannelPreferences {
                email: false,
                sms: false,
            },
        };

        let error = store.update(7, record).unwrap_err();
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_delete_clears_both_indices() {
        let store = PreferenceStore::new();
        let created = store.create(new_record("a@x.com")).unwrap();

        assert!(store.delete(created.id));
        assert!(store.get_by_id(created.id).is_none());
        assert!(store.get_by_email("a@x.com").is_none());
        assert!(!store.exists_by_id(created.id));
        assert!(!store.exists_by_email("a@x.com"));
        assert!(!store.delete(created.id));
    }

    #[test]
    fn test_id_of_deleted_max_is_reused() {
        let store = PreferenceStore::new();
        store.create(new_record("a@x.com")).unwrap();
        let second = store.create(new_record("b@x.com")).unwrap();

        store.delete(second.id);
        let third = store.create(new_record("c@x.com")).unwrap();
        assert_eq!(third.id, second.id);
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = PreferenceStore::new();
        let mut handles = Vec::new();

        for i in 0..16 {
            let store = store.clone();
            handles.push(std::thread::spawn(move || {
                store.create(new_record(&format!("user{}@x.com", i))).unwrap().id
            }));
        }

        let mut ids: Vec<i32> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 16);
    }

    proptest! {
        #[test]
        fn prop_next_id_is_one_past_max(ids in proptest::collection::btree_set(1..5000i32, 1..40)) {
            let records = ids
                .iter()
                .map(|&id| UserRecord {
                    id,
                    email: format!("user{}@x.com", id),
                    phone: format!("+{}", id),
                    preferences: ChannelPreferences { email: true, sms: true },
                })
                .collect();

            let store = PreferenceStore::from_records(records);
            let max = *ids.iter().max().unwrap();
            prop_assert_eq!(store.next_id(), max + 1);
        }
    }
}
