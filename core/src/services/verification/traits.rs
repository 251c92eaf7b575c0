//! Trait for SMS provider integration

use async_trait::async_trait;

/// Outbound SMS channel used to deliver verification codes
#[async_trait]
pub trait SmsDispatcher: Send + Sync {
    /// Send `code` to `phone`
    ///
    /// Returns the provider's message id, or the provider's error text.
    async fn send_code(&self, phone: &str, code: &str) -> Result<String, String>;
}
