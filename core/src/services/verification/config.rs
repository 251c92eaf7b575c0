//! Configuration for the verification service

/// Configuration for the verification service
#[derive(Debug, Clone, Default)]
pub struct VerificationServiceConfig {
    /// Destination of the test-send flow; unset disables it
    pub test_phone_number: Option<String>,
}

impl VerificationServiceConfig {
    pub fn with_test_phone_number(mut self, phone: impl Into<String>) -> Self {
        self.test_phone_number = Some(phone.into());
        self
    }
}
