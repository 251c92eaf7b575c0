//! Request and response bodies for `/api/v1/auth`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use validator::Validate;

use pv_core::domain::entities::otp_entry::OtpEntry;
use pv_core::domain::entities::user::User;

/// Body of `POST /send-otp`
///
/// Fields are optional so a missing value reaches the handler and is
/// reported as a validation error rather than a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,
}

/// Body of `POST /verify-otp`
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(max = 32))]
    pub phone_number: Option<String>,

    #[validate(length(max = 16))]
    pub otp: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpResponse {
    pub success: bool,
    pub message: String,
    pub message_sid: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_new_user: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requires_profile_setup: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTestOtpResponse {
    pub success: bool,
    pub message: String,
    pub message_sid: String,
    #[serde(rename = "testOTP")]
    pub test_otp: String,
}

/// One pending code as shown by `GET /stored-otps`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOtp {
    pub code: String,
    pub expires_at: DateTime<Utc>,
}

impl From<OtpEntry> for StoredOtp {
    fn from(entry: OtpEntry) -> Self {
        Self {
            code: entry.code,
            expires_at: entry.expires_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredOtpsResponse {
    pub success: bool,
    pub message: String,
    pub data: BTreeMap<String, StoredOtp>,
}
