//! In-memory implementation of UserRepository for tests and local runs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::trait_::UserRepository;

/// Mock user repository for testing
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockUserRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        let repo = Self::new();
        repo.set_should_fail(true);
        repo
    }

    /// Toggle failure simulation
    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }

    /// Insert a user directly, bypassing the uniqueness check
    pub async fn insert(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }

    /// Number of stored users
    pub async fn count(&self) -> usize {
        self.users.read().await.len()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::Database(
                "connection refused (simulated)".to_string(),
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        self.check_available()?;
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.phone_number == phone_number)
            .cloned())
    }

    async fn create_minimal(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<User, DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;

        if users.values().any(|u| u.phone_number == phone_number) {
            return Err(DomainError::Conflict {
                message: "Phone number already registered".to_string(),
            });
        }

        let user = User::new_verified(phone_number, now);
        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid, now: DateTime<Utc>) -> Result<User, DomainError> {
        self.check_available()?;
        let mut users = self.users.write().await;

        let user = users.get_mut(&id).ok_or_else(|| DomainError::NotFound {
            resource: "User".to_string(),
        })?;
        user.record_login(now);
        Ok(user.clone())
    }
}
