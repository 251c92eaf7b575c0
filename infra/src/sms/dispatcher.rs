//! Adapter exposing any [`SmsService`] as the core `SmsDispatcher`

use async_trait::async_trait;
use pv_core::domain::entities::otp_entry::DEFAULT_EXPIRATION_MINUTES;
use pv_core::services::verification::SmsDispatcher;

use crate::sms::sms_service::SmsService;
use crate::InfrastructureError;

/// Bridges an infrastructure SMS provider to the verification service
pub struct SmsDispatcherAdapter {
    inner: Box<dyn SmsService>,
    expires_in_minutes: i64,
}

impl SmsDispatcherAdapter {
    pub fn new(inner: Box<dyn SmsService>) -> Self {
        Self {
            inner,
            expires_in_minutes: DEFAULT_EXPIRATION_MINUTES,
        }
    }

    /// Code lifetime quoted in the message body
    pub fn with_expiration_minutes(mut self, minutes: i64) -> Self {
        self.expires_in_minutes = minutes;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.inner.provider_name()
    }
}

#[async_trait]
impl SmsDispatcher for SmsDispatcherAdapter {
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String> {
        self.inner
            .send_verification_code(phone, code, self.expires_in_minutes)
            .await
            .map_err(|e| match e {
                // Provider text is passed through unchanged
                InfrastructureError::Sms(message) => message,
                other => other.to_string(),
            })
    }
}
