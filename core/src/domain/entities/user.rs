//! User entity representing a phone-verified user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity keyed by phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Phone number in the form it was verified; unique across users
    pub phone_number: String,

    /// Email address, empty until the profile is completed
    pub email: String,

    /// Display name, empty until the profile is completed
    pub full_name: String,

    /// Avatar URL, empty until set
    pub profile_image_url: String,

    /// Whether the user's phone number has been verified
    pub is_verified: bool,

    /// Number of reports filed by the user
    pub total_reports: i32,

    /// Number of the user's reports that were resolved
    pub resolved_reports: i32,

    /// Timestamp of the user's last successful verification
    pub last_login: Option<DateTime<Utc>>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates the minimal record written on a number's first successful
    /// verification: empty profile, verified, zero counters
    pub fn new_verified(phone_number: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            email: String::new(),
            full_name: String::new(),
            profile_image_url: String::new(),
            is_verified: true,
            total_reports: 0,
            resolved_reports: 0,
            last_login: Some(now),
            created_at: now,
            updated_at: now,
        }
    }

    /// Updates the last login timestamp
    pub fn record_login(&mut self, now: DateTime<Utc>) {
        self.last_login = Some(now);
        self.updated_at = now;
    }

    /// Whether the client should prompt for name and email
    pub fn requires_profile_setup(&self) -> bool {
        self.full_name.trim().is_empty() || self.email.trim().is_empty()
    }
}
