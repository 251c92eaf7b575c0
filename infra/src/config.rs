//! Configuration management for infrastructure services
//!
//! Database settings live in `pv_shared::config::DatabaseConfig`; this module
//! holds the SMS provider selection and credentials.

use serde::{Deserialize, Serialize};

/// SMS service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// SMS service provider ("twilio", "mock")
    pub provider: String,
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (E.164)
    pub from_number: String,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            account_sid: String::new(),
            auth_token: String::new(),
            from_number: String::new(),
        }
    }
}

impl SmsConfig {
    /// Load from `SMS_PROVIDER` and the `TWILIO_*` variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER")
                .map(|p| p.trim().to_lowercase())
                .unwrap_or_else(|_| "mock".to_string()),
            account_sid: std::env::var("TWILIO_ACCOUNT_SID").unwrap_or_default(),
            auth_token: std::env::var("TWILIO_AUTH_TOKEN").unwrap_or_default(),
            from_number: std::env::var("TWILIO_FROM_NUMBER").unwrap_or_default(),
        }
    }

    pub fn mock() -> Self {
        Self::default()
    }

    pub fn is_mock(&self) -> bool {
        self.provider == "mock"
    }
}
