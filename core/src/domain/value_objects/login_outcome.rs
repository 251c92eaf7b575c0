//! Result of persisting a successful phone verification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// The user record after a verified login, plus whether it was just created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub user: User,
    pub is_new_user: bool,
    pub requires_profile_setup: bool,
}

impl LoginOutcome {
    pub fn new(user: User, is_new_user: bool) -> Self {
        let requires_profile_setup = is_new_user || user.requires_profile_setup();
        Self {
            user,
            is_new_user,
            requires_profile_setup,
        }
    }

    pub fn created(user: User) -> Self {
        Self::new(user, true)
    }

    pub fn existing(user: User) -> Self {
        Self::new(user, false)
    }

    /// Outcome of an insert-or-update keyed by phone number: the user is new
    /// only if the stored row carries the id that was offered for insertion
    pub fn from_upsert(user: User, inserted_id: Uuid) -> Self {
        let is_new_user = user.id == inserted_id;
        Self::new(user, is_new_user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn now() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_from_upsert_inserted_row_is_new() {
        let user = User::new_verified("+15551234567", now());
        let id = user.id;

        let outcome = LoginOutcome::from_upsert(user, id);
        assert!(outcome.is_new_user);
        assert!(outcome.requires_profile_setup);
    }

    #[test]
    fn test_from_upsert_existing_row_with_same_timestamps_is_not_new() {
        let mut existing = User::new_verified("+15551234567", now());
        existing.full_name = "Jane Doe".to_string();
        existing.email = "jane@example.com".to_string();
        // A second upsert carrying the same instant leaves the row unchanged
        let candidate = User::new_verified("+15551234567", now());

        let outcome = LoginOutcome::from_upsert(existing.clone(), candidate.id);
        assert!(!outcome.is_new_user);
        assert!(!outcome.requires_profile_setup);
        assert_eq!(outcome.user.id, existing.id);
    }
}
