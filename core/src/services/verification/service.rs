//! Main verification service implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use pv_shared::phone::mask_phone_number;

use crate::domain::entities::otp_entry::OtpEntry;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use crate::services::clock::Clock;
use crate::services::otp::OtpStore;

use super::config::VerificationServiceConfig;
use super::traits::SmsDispatcher;
use super::types::{SendCodeResult, VerifiedLogin};

/// Verification service driving the send/verify handshake
pub struct VerificationService<S: SmsDispatcher, U: UserRepository> {
    /// SMS dispatcher for delivering codes
    sms_dispatcher: Arc<S>,
    /// User persistence
    user_repository: Arc<U>,
    /// Pending codes
    otp_store: Arc<OtpStore>,
    /// Time source for user timestamps
    clock: Arc<dyn Clock>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<S: SmsDispatcher, U: UserRepository> VerificationService<S, U> {
    /// Create a new verification service
    ///
    /// # Arguments
    ///
    /// * `sms_dispatcher` - SMS provider
    /// * `user_repository` - User repository implementation
    /// * `otp_store` - Shared OTP store, also driven by the expiry sweeper
    /// * `clock` - Time source, the same one the store uses
    /// * `config` - Service configuration
    pub fn new(
        sms_dispatcher: Arc<S>,
        user_repository: Arc<U>,
        otp_store: Arc<OtpStore>,
        clock: Arc<dyn Clock>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            sms_dispatcher,
            user_repository,
            otp_store,
            clock,
            config,
        }
    }

    /// Generate, store and send a verification code
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The provider message id and the stored code
    /// * `Err(DomainError::ValidationErr)` - `phone` is blank; nothing is stored
    /// * `Err(DomainError::SmsDispatch)` - The provider rejected the message.
    ///   The stored code is left in place.
    pub async fn send_code(&self, phone: &str) -> DomainResult<SendCodeResult> {
        let phone = required("phoneNumber", phone)?;

        let code = self.otp_store.generate();
        let entry = self.otp_store.store(phone, &code).await;

        tracing::info!(
            phone = %mask_phone_number(phone),
            expires_at = %entry.expires_at,
            event = "otp_generated",
            "Verification code generated"
        );

        match self.sms_dispatcher.send_code(phone, &code).await {
            Ok(message_id) => {
                tracing::info!(
                    phone = %mask_phone_number(phone),
                    message_id = %message_id,
                    event = "otp_sent",
                    "Verification code sent"
                );
                Ok(SendCodeResult {
                    message_id,
                    code,
                    expires_at: entry.expires_at,
                })
            }
            Err(error) => {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %error,
                    event = "otp_send_failed",
                    "Failed to send verification code"
                );
                Err(DomainError::SmsDispatch { message: error })
            }
        }
    }

    /// Run the send flow against the configured test number
    ///
    /// Fails with `DomainError::Internal` when no test number is configured.
    pub async fn send_test_code(&self) -> DomainResult<SendCodeResult> {
        let phone = self
            .config
            .test_phone_number
            .as_deref()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| DomainError::Internal {
                message: "Test phone number is not configured".to_string(),
            })?;

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_test_send",
            "Sending test verification code"
        );
        self.send_code(phone).await
    }

    /// Check a submitted code and record the login
    ///
    /// # Returns
    ///
    /// * `Ok(VerifiedLogin::Account)` - Code accepted, user created or refreshed
    /// * `Ok(VerifiedLogin::PersistenceFailed)` - Code accepted, user write failed
    /// * `Err(DomainError::ValidationErr)` - A field is blank
    /// * `Err(DomainError::Otp)` - No code, expired code, or wrong code
    pub async fn verify_code(&self, phone: &str, code: &str) -> DomainResult<VerifiedLogin> {
        let phone = required("phoneNumber", phone)?;
        let code = required("otp", code)?;

        if let Err(e) = self.otp_store.verify(phone, code).await {
            tracing::warn!(
                phone = %mask_phone_number(phone),
                reason = ?e,
                event = "otp_verification_failed",
                "Verification code rejected"
            );
            return Err(e.into());
        }

        tracing::info!(
            phone = %mask_phone_number(phone),
            event = "otp_verified",
            "Verification code accepted"
        );

        match self
            .user_repository
            .upsert_verified(phone, self.clock.now())
            .await
        {
            Ok(outcome) => {
                tracing::info!(
                    user_id = %outcome.user.id,
                    is_new_user = outcome.is_new_user,
                    event = "user_login_recorded",
                    "User login recorded"
                );
                Ok(VerifiedLogin::Account(outcome))
            }
            Err(e) => {
                tracing::error!(
                    phone = %mask_phone_number(phone),
                    error = %e,
                    event = "user_persistence_failed",
                    "Verified login could not be persisted"
                );
                Ok(VerifiedLogin::PersistenceFailed {
                    error: e.to_string(),
                })
            }
        }
    }

    /// All pending codes, keyed by phone number
    pub async fn stored_codes(&self) -> BTreeMap<String, OtpEntry> {
        self.otp_store.list_all().await
    }

    /// The shared OTP store
    pub fn otp_store(&self) -> &Arc<OtpStore> {
        &self.otp_store
    }
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::required(field).into());
    }
    Ok(trimmed)
}
