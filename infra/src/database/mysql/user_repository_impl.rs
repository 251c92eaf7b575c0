//! MySQL implementation of the UserRepository trait.
//!
//! Users are keyed by `phone_number` (unique index). The verified-login
//! upsert is a single `INSERT … ON DUPLICATE KEY UPDATE` so concurrent
//! verifications of the same number cannot create two rows.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use pv_core::domain::entities::user::User;
use pv_core::domain::value_objects::LoginOutcome;
use pv_core::errors::DomainError;
use pv_core::repositories::UserRepository;

const USER_COLUMNS: &str = r#"
    id, phone_number, email, full_name, profile_image_url, is_verified,
    total_reports, resolved_reports, last_login, created_at, updated_at
"#;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Database(format!("Invalid UUID: {}", e)))?,
            phone_number: row
                .try_get("phone_number")
                .map_err(column_error("phone_number"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            full_name: row.try_get("full_name").map_err(column_error("full_name"))?,
            profile_image_url: row
                .try_get("profile_image_url")
                .map_err(column_error("profile_image_url"))?,
            is_verified: row
                .try_get("is_verified")
                .map_err(column_error("is_verified"))?,
            total_reports: row
                .try_get("total_reports")
                .map_err(column_error("total_reports"))?,
            resolved_reports: row
                .try_get("resolved_reports")
                .map_err(column_error("resolved_reports"))?,
            last_login: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login")
                .map_err(column_error("last_login"))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database(format!("Failed to get {}: {}", column, e))
}

fn query_error(context: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::Database(format!("{}: {}", context, e))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_phone(&self, phone_number: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE phone_number = ? LIMIT 1",
            USER_COLUMNS
        );

        let row = sqlx::query(&query)
            .bind(phone_number)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("Database query failed"))?;

        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create_minimal(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<User, DomainError> {
        let user = User::new_verified(phone_number, now);

        let query = r#"
            INSERT INTO users (
                id, phone_number, email, full_name, profile_image_url, is_verified,
                total_reports, resolved_reports, last_login, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.phone_number)
            .bind(&user.email)
            .bind(&user.full_name)
            .bind(&user.profile_image_url)
            .bind(user.is_verified)
            .bind(user.total_reports)
            .bind(user.resolved_reports)
            .bind(user.last_login)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DomainError::Conflict {
                        message: "Phone number already registered".to_string(),
                    }
                } else {
                    DomainError::Database(format!("Failed to create user: {}", e))
                }
            })?;

        Ok(user)
    }

    async fn update_last_login(&self, id: Uuid, now: DateTime<Utc>) -> Result<User, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(query_error("Failed to acquire connection"))?;

        let result = sqlx::query("UPDATE users SET last_login = ?, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(now)
            .bind(id.to_string())
            .execute(&mut *conn)
            .await
            .map_err(query_error("Failed to update user"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }

        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);
        let row = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_one(&mut *conn)
            .await
            .map_err(query_error("Database query failed"))?;

        Self::row_to_user(&row)
    }

    async fn upsert_verified(
        &self,
        phone_number: &str,
        now: DateTime<Utc>,
    ) -> Result<LoginOutcome, DomainError> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(query_error("Failed to acquire connection"))?;

        let candidate = User::new_verified(phone_number, now);

        // Affected-row counts are unreliable here (sqlx sets CLIENT_FOUND_ROWS),
        // so newness is decided by whose id ends up in the row.
        let query = r#"
            INSERT INTO users (
                id, phone_number, email, full_name, profile_image_url, is_verified,
                total_reports, resolved_reports, last_login, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                last_login = VALUES(last_login),
                updated_at = VALUES(updated_at)
        "#;

        sqlx::query(query)
            .bind(candidate.id.to_string())
            .bind(&candidate.phone_number)
            .bind(&candidate.email)
            .bind(&candidate.full_name)
            .bind(&candidate.profile_image_url)
            .bind(candidate.is_verified)
            .bind(candidate.total_reports)
            .bind(candidate.resolved_reports)
            .bind(candidate.last_login)
            .bind(candidate.created_at)
            .bind(candidate.updated_at)
            .execute(&mut *conn)
            .await
            .map_err(query_error("Failed to upsert user"))?;

        let select = format!(
            "SELECT {} FROM users WHERE phone_number = ? LIMIT 1",
            USER_COLUMNS
        );
        let row = sqlx::query(&select)
            .bind(phone_number)
            .fetch_one(&mut *conn)
            .await
            .map_err(query_error("Database query failed"))?;

        let outcome = LoginOutcome::from_upsert(Self::row_to_user(&row)?, candidate.id);

        tracing::debug!(
            user_id = %outcome.user.id,
            is_new_user = outcome.is_new_user,
            "Upserted verified user"
        );

        Ok(outcome)
    }
}
