//! Unit tests for Twilio SMS service

use crate::config::SmsConfig;
use crate::sms::twilio::{normalize_e164, MAX_MESSAGE_LENGTH};
use crate::sms::{SmsService, TwilioConfig, TwilioSmsService};
use crate::InfrastructureError;

fn test_config() -> TwilioConfig {
    TwilioConfig {
        account_sid: "ACtest_account_sid".to_string(),
        auth_token: "test_auth_token".to_string(),
        from_number: "+15551234567".to_string(),
    }
}

#[test]
fn test_twilio_config_validation() {
    assert!(test_config().validate().is_ok());

    let mut missing_sid = test_config();
    missing_sid.account_sid = String::new();
    assert!(matches!(missing_sid.validate(), Err(InfrastructureError::Config(_))));

    let mut bad_from = test_config();
    bad_from.from_number = "15551234567".to_string();
    match bad_from.validate() {
        Err(InfrastructureError::Config(msg)) => assert!(msg.contains("E.164")),
        _ => panic!("Expected Config error"),
    }
}

#[test]
fn test_twilio_config_from_sms_config() {
    let sms = SmsConfig {
        provider: "twilio".to_string(),
        account_sid: "ACabc".to_string(),
        auth_token: "token".to_string(),
        from_number: "+15550001111".to_string(),
    };

    let config = TwilioConfig::from_sms_config(&sms).unwrap();
    assert_eq!(config.account_sid, "ACabc");
    assert_eq!(config.from_number, "+15550001111");
}

#[test]
fn test_twilio_service_creation() {
    let service = TwilioSmsService::new(test_config()).unwrap();
    assert_eq!(service.provider_name(), "Twilio");
}

#[test]
fn test_normalize_e164() {
    assert_eq!(normalize_e164("+1 415 555 2671").unwrap(), "+14155552671");
    assert_eq!(normalize_e164("+447911123456").unwrap(), "+447911123456");
    assert!(normalize_e164("4155552671").is_err());
    assert!(normalize_e164("+abc").is_err());
}

#[tokio::test]
async fn test_twilio_rejects_long_message_before_sending() {
    let service = TwilioSmsService::new(test_config()).unwrap();
    let message = "x".repeat(MAX_MESSAGE_LENGTH + 1);

    match service.send_sms("+14155552671", &message).await {
        Err(InfrastructureError::Sms(msg)) => assert!(msg.contains("maximum length")),
        _ => panic!("Expected Sms error"),
    }
}

#[tokio::test]
async fn test_twilio_rejects_invalid_number_before_sending() {
    let service = TwilioSmsService::new(test_config()).unwrap();
    let result = service.send_sms("not-a-number", "hello").await;
    assert!(matches!(result, Err(InfrastructureError::Sms(_))));
}
