//! SMS Service Module
//!
//! This module provides SMS provider implementations for sending verification
//! codes, and the adapter that plugs them into the core verification service.
//!
//! ## Features
//!
//! - **SMS Service Trait**: Common interface for all SMS providers
//! - **Mock Implementation**: Log output for development
//! - **Twilio Support**: Production SMS via the Twilio API
//! - **Phone Number Validation**: E.164 normalisation before sending

pub mod dispatcher;
pub mod mock_sms;
pub mod sms_service;

// Twilio SMS service (feature-gated)
#[cfg(feature = "twilio-sms")]
pub mod twilio;

pub use dispatcher::SmsDispatcherAdapter;
pub use mock_sms::MockSmsService;
pub use sms_service::{verification_message, SmsService};

#[cfg(feature = "twilio-sms")]
pub use twilio::{TwilioConfig, TwilioSmsService};

#[cfg(test)]
mod tests;

use crate::{config::SmsConfig, InfrastructureError};

/// Create an SMS service based on configuration
///
/// # Arguments
///
/// * `config` - SMS configuration containing provider settings
///
/// # Returns
///
/// * `Ok(Box<dyn SmsService>)` - The configured provider
/// * `Err(InfrastructureError::Config)` - Unknown provider or incomplete credentials
pub fn create_sms_service(config: &SmsConfig) -> Result<Box<dyn SmsService>, InfrastructureError> {
    match config.provider.as_str() {
        "mock" => {
            tracing::warn!("Using mock SMS service; messages are logged, not sent");
            Ok(Box::new(MockSmsService::new()))
        }
        #[cfg(feature = "twilio-sms")]
        "twilio" => {
            let twilio_config = TwilioConfig::from_sms_config(config)?;
            Ok(Box::new(TwilioSmsService::new(twilio_config)?))
        }
        other => Err(InfrastructureError::Config(format!(
            "Unknown SMS provider '{}'",
            other
        ))),
    }
}
