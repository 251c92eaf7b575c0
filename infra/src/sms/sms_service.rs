//! SMS Service Interface
//!
//! Defines the trait for SMS provider implementations that deliver
//! verification codes.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Body of the verification message; `{code}` and `{minutes}` are filled in
pub const VERIFICATION_MESSAGE_TEMPLATE: &str =
    "Your PhoneVerify verification code is: {code}. This code will expire in {minutes} minutes.";

/// SMS service trait for sending text messages
///
/// Implementations include:
/// - Twilio SMS API
/// - Mock implementation for development
#[async_trait]
pub trait SmsService: Send + Sync {
    /// Send an SMS message to a phone number
    ///
    /// # Arguments
    ///
    /// * `phone_number` - The recipient's phone number (E.164 format)
    /// * `message` - The message content to send
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Provider identifier for the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError>;

    /// Send a verification code via SMS using the standard message template
    async fn send_verification_code(
        &self,
        phone_number: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, InfrastructureError> {
        let message = verification_message(code, expires_in_minutes);
        self.send_sms(phone_number, &message).await
    }

    /// Get the service provider name (e.g., "Twilio", "Mock")
    fn provider_name(&self) -> &str;
}

/// Render the verification message for `code`
pub fn verification_message(code: &str, expires_in_minutes: i64) -> String {
    VERIFICATION_MESSAGE_TEMPLATE
        .replace("{code}", code)
        .replace("{minutes}", &expires_in_minutes.to_string())
}
