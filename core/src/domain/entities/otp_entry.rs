//! OTP entry entity held by the in-memory OTP store.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default expiration time for verification codes (5 minutes)
pub const DEFAULT_EXPIRATION_MINUTES: i64 = 5;

/// Longest accepted code lifetime (one day)
pub const MAX_EXPIRATION_MINUTES: i64 = 24 * 60;

/// A pending one-time passcode for a single phone number
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtpEntry {
    /// Phone number the code was issued for; the store key
    pub phone_number: String,

    /// The numeric code
    pub code: String,

    /// Instant after which the code is no longer accepted
    pub expires_at: DateTime<Utc>,
}

impl OtpEntry {
    /// Creates an entry that expires `ttl` after `issued_at`
    pub fn new(
        phone_number: impl Into<String>,
        code: impl Into<String>,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            phone_number: phone_number.into(),
            code: code.into(),
            expires_at: issued_at + ttl,
        }
    }

    /// Checks if the code has expired at `now`
    ///
    /// The entry is still valid at exactly `expires_at`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
