//! Configuration for the OTP store

use chrono::Duration;

use crate::domain::entities::otp_entry::DEFAULT_EXPIRATION_MINUTES;

/// Configuration for the OTP store
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// How long a stored code stays valid
    pub ttl: Duration,
}

impl OtpConfig {
    pub fn with_expiration_minutes(minutes: i64) -> Self {
        Self {
            ttl: Duration::minutes(minutes),
        }
    }
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self::with_expiration_minutes(DEFAULT_EXPIRATION_MINUTES)
    }
}
