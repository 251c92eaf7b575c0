//! User repository trait defining the interface for user data persistence.
//!
//! The `users` table is keyed by phone number. Implementations only need the
//! three primitive operations; `upsert_verified` has a portable default that
//! recovers from a lost insert race, and backends with a native upsert should
//! override it.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::domain::value_objects::LoginOutcome;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by phone number
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered with this number
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError>;

    /// Create the minimal verified record for a phone number
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError::Conflict)` - A user with this phone number already exists
    /// * `Err(DomainError)` - Any other persistence failure
    async fn create_minimal(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<User, DomainError>;

    /// Set `last_login` and `updated_at` to `now`
    ///
    /// # Returns
    /// * `Ok(User)` - The updated user
    /// * `Err(DomainError::NotFound)` - No user with this id
    async fn update_last_login(&self, id: Uuid, now: DateTime<Utc>) -> Result<User, DomainError>;

    /// Find-or-create the user for a freshly verified phone number
    ///
    /// An existing user gets its login timestamps refreshed; an unknown
    /// number gets a minimal record. If the insert loses a race against a
    /// concurrent request for the same number, the winner's row is re-read
    /// and treated as an existing user.
    async fn upsert_verified(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginOutcome, DomainError> {
        if let Some(user) = self.find_by_phone(phone_number).await? {
            let user = self.update_last_login(user.id, now).await?;
            return Ok(LoginOutcome::existing(user));
        }

        match self.create_minimal(phone_number, now).await {
            Ok(user) => Ok(LoginOutcome::created(user)),
            Err(DomainError::Conflict { .. }) => {
                tracing::info!(
                    phone = %pv_shared::phone::mask_phone_number(phone_number),
                    event = "user_insert_conflict",
                    "Concurrent insert detected, re-reading existing user"
                );
                let user = self
                    .find_by_phone(phone_number)
                    .await?
                    .ok_or_else(|| DomainError::NotFound {
                        resource: "User".to_string(),
                    })?;
                let user = self.update_last_login(user.id, now).await?;
                Ok(LoginOutcome::existing(user))
            }
            Err(e) => Err(e),
        }
    }
}
