//! User service for business logic operations.
//!
//! Provides a higher-level API over the preference store, turning lookup
//! misses into `NotFound` errors at the boundary where callers expect them.

use crate::error::{AppError, AppResult};
use crate::models::{ChannelPreferences, NewUserRecord, UserRecord};
use crate::store::PreferenceStore;

/// User service for handling user-related business logic.
///
/// Wraps the `PreferenceStore`; cloning is cheap since the store uses `Arc`
/// internally.
#[derive(Clone)]
pub struct UserService {
    store: PreferenceStore,
}

impl UserService {
    /// Creates a new UserService over the given store.
    pub fn new(store: PreferenceStore) -> Self {
        Self { store }
    }

    /// Lists all user records.
    pub fn list_users(&self) -> Vec<UserRecord> {
        self.store.list_all()
    }

    /// Gets a user by id.
    ///
    /// # Returns
    /// The record, or `NotFound` when the id is absent.
    pub fn get_user(&self, id: i32) -> AppResult<UserRecord> {
        self.store.get_by_id(id).ok_or_else(|| AppError::NotFound {
            entity: "user".to_string(),
            field: "id".to_string(),
            value: id.to_string(),
        })
    }

    /// Gets a user by email.
    ///
    /// # Returns
    /// The record, or `NotFound` when the email is not indexed.
    pub fn get_user_by_email(&self, email: &str) -> AppResult<UserRecord> {
        self.store
            .get_by_email(email)
            .ok_or_else(|| AppError::NotFound {
                entity: "user".to_string(),
                field: "email".to_string(),
                value: email.to_string(),
            })
    }

    /// Creates a new user; the store assigns the id and enforces email
    /// uniqueness.
    pub fn create_user(&self, new_record: NewUserRecord) -> AppResult<UserRecord> {
        let record = self.store.create(new_record)?;
        tracing::info!(user_id = record.id, "User created");
        Ok(record)
    }

    /// Replaces the record stored under `id`; the body's id is ignored in
    /// favor of the path id.
    pub fn update_user(&self, id: i32, record: UserRecord) -> AppResult<UserRecord> {
        self.store.update(id, record)
    }

    /// Updates preferences (and optionally the phone number) for the user
    /// currently holding `email`.
    ///
    /// The phone is only touched when the caller provided one; absence means
    /// "leave as is", not "clear".
    pub fn update_user_by_email(
        &self,
        email: &str,
        preferences: ChannelPreferences,
        phone: Option<String>,
    ) -> AppResult<UserRecord> {
        let mut record = self.get_user_by_email(email)?;
        record.preferences = preferences;
        if let Some(phone) = phone {
            record.phone = phone;
        }
        self.store.update(record.id, record)
    }

    /// Deletes a user.
    ///
    /// # Returns
    /// `Ok(())` when a record was removed, `NotFound` otherwise.
    pub fn delete_user(&self, id: i32) -> AppResult<()> {
        if self.store.delete(id) {
            tracing::info!(user_id = id, "User deleted");
            Ok(())
        } else {
            Err(AppError::NotFound {
                entity: "user".to_string(),
                field: "id".to_string(),
                value: id.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_records;

    fn service() -> UserService {
        UserService::new(PreferenceStore::from_records(seed_records()))
    }

    #[test]
    fn test_get_user_not_found() {
        let error = service().get_user(42).unwrap_err();
        assert!(matches!(error, AppError::NotFound { .. }));
    }

    #[test]
    fn test_create_user_assigns_next_id() {
        let service = service();
        let record = service
            .create_user(NewUserRecord {
                email: "thor@avengers.com".to_string(),
                phone: "+123456785".to_string(),
                preferences: ChannelPreferences {
                    email: true,
                    sms: true,
                },
            })
            .unwrap();

        assert_eq!(record.id, 5);
        assert_eq!(service.get_user(5).unwrap(), record);
    }

    #[test]
    fn test_update_by_email_keeps_phone_when_absent() {
        let service = service();
        let before = service.get_user_by_email("loki@avengers.com").unwrap();

        let updated = service
            .update_user_by_email(
                "loki@avengers.com",
                ChannelPreferences {
                    email: false,
                    sms: true,
                },
                None,
            )
            .unwrap();

        assert_eq!(updated.phone, before.phone);
        assert!(updated.preferences.sms);
        assert!(!updated.preferences.email);
    }

    #[test]
    fn test_update_by_email_replaces_phone_when_present() {
        let service = service();

        let updated = service
            .update_user_by_email(
                "loki@avengers.com",
                ChannelPreferences {
                    email: true,
                    sms: false,
                },
                Some("+999".to_string()),
            )
            .unwrap();

        assert_eq!(updated.phone, "+999");
    }

    #[test]
    fn test_delete_missing_user_is_not_found() {
        let error = service().delete_user(42).unwrap_err();
        assert!(matches!(error, AppError::NotFound { .. }));
    }
}
