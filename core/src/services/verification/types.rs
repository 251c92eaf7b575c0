//! Types for verification service results

use chrono::{DateTime, Utc};

use crate::domain::value_objects::LoginOutcome;

/// Result of sending a verification code
#[derive(Debug, Clone)]
pub struct SendCodeResult {
    /// The SMS message ID from the provider
    pub message_id: String,
    /// The code that was sent; only surfaced by the test-send flow
    pub code: String,
    /// When the code stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Result of a successful code verification
#[derive(Debug, Clone)]
pub enum VerifiedLogin {
    /// The user record was created or refreshed
    Account(LoginOutcome),
    /// The code was valid but the user record could not be written
    PersistenceFailed { error: String },
}

impl VerifiedLogin {
    pub fn outcome(&self) -> Option<&LoginOutcome> {
        match self {
            VerifiedLogin::Account(outcome) => Some(outcome),
            VerifiedLogin::PersistenceFailed { .. } => None,
        }
    }
}
