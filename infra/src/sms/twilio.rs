//! Twilio SMS Service Implementation
//!
//! Sends messages through the Twilio Messages API. Each message is a single
//! attempt; a failure is reported once, with Twilio's error text.

use async_trait::async_trait;
use phonenumber::{Mode, PhoneNumber};
use tracing::{debug, error, info};
use twilio::{Client, OutboundMessage};

use pv_shared::phone::mask_phone_number;

use crate::{config::SmsConfig, sms::sms_service::SmsService, InfrastructureError};

/// Twilio accepts at most this many characters per message
pub const MAX_MESSAGE_LENGTH: usize = 1600;

/// Twilio SMS service configuration
#[derive(Debug, Clone)]
pub struct TwilioConfig {
    /// Twilio Account SID
    pub account_sid: String,
    /// Twilio Auth Token
    pub auth_token: String,
    /// From phone number (must be a Twilio phone number)
    pub from_number: String,
}

impl TwilioConfig {
    /// Take the Twilio fields of an [`SmsConfig`] and validate them
    pub fn from_sms_config(config: &SmsConfig) -> Result<Self, InfrastructureError> {
        let twilio = Self {
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            from_number: config.from_number.clone(),
        };
        twilio.validate()?;
        Ok(twilio)
    }

    pub fn validate(&self) -> Result<(), InfrastructureError> {
        if self.account_sid.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_ACCOUNT_SID not set".to_string()));
        }
        if self.auth_token.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_AUTH_TOKEN not set".to_string()));
        }
        if self.from_number.trim().is_empty() {
            return Err(InfrastructureError::Config("TWILIO_FROM_NUMBER not set".to_string()));
        }
        if !self.from_number.starts_with('+') {
            return Err(InfrastructureError::Config(
                "TWILIO_FROM_NUMBER must be in E.164 format (starting with '+')".to_string(),
            ));
        }
        Ok(())
    }
}

/// Twilio SMS service implementation
pub struct TwilioSmsService {
    client: Client,
    config: TwilioConfig,
}

impl TwilioSmsService {
    /// Create a new Twilio SMS service
    pub fn new(config: TwilioConfig) -> Result<Self, InfrastructureError> {
        config.validate()?;
        let client = Client::new(&config.account_sid, &config.auth_token);

        info!(
            from = %mask_phone_number(&config.from_number),
            "Twilio SMS service initialized"
        );

        Ok(Self { client, config })
    }
}

/// Parse `phone` and format it as E.164
///
/// Numbers without a leading `+` are rejected; there is no default region.
pub fn normalize_e164(phone: &str) -> Result<String, InfrastructureError> {
    let phone = phone.trim();
    if !phone.starts_with('+') {
        return Err(InfrastructureError::Sms(
            "Phone number must be in E.164 format (e.g., +15551234567)".to_string(),
        ));
    }

    let parsed = phone
        .parse::<PhoneNumber>()
        .map_err(|e| InfrastructureError::Sms(format!("Invalid phone number format: {}", e)))?;
    let formatted = parsed.format().mode(Mode::E164).to_string();
    debug!(phone = %mask_phone_number(&formatted), "Validated phone number");
    Ok(formatted)
}

#[async_trait]
impl SmsService for TwilioSmsService {
    async fn send_sms(&self, phone_number: &str, message: &str) -> Result<String, InfrastructureError> {
        let to = normalize_e164(phone_number)?;

        if message.chars().count() > MAX_MESSAGE_LENGTH {
            return Err(InfrastructureError::Sms(format!(
                "Message exceeds maximum length of {} characters",
                MAX_MESSAGE_LENGTH
            )));
        }

        info!(
            provider = "twilio",
            phone = %mask_phone_number(&to),
            message_length = message.len(),
            "Sending SMS"
        );

        let msg = OutboundMessage::new(&self.config.from_number, &to, message);
        match self.client.send_message(msg).await {
            Ok(response) => {
                info!(
                    provider = "twilio",
                    phone = %mask_phone_number(&to),
                    sid = %response.sid,
                    "SMS sent"
                );
                Ok(response.sid)
            }
            Err(e) => {
                error!(
                    provider = "twilio",
                    phone = %mask_phone_number(&to),
                    error = %e,
                    "Failed to send SMS"
                );
                Err(InfrastructureError::Sms(e.to_string()))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Twilio"
    }
}
