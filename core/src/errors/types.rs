//! Error types for the OTP handshake and request validation

use thiserror::Error;

/// Why an OTP verification attempt failed
///
/// Every variant maps to the same client status; only the message differs.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpError {
    #[error("OTP not found or already used. Please request a new code.")]
    NotFound,

    #[error("OTP has expired. Please request a new code.")]
    Expired,

    #[error("Invalid OTP. Please try again.")]
    Mismatch,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: String },
}

impl ValidationError {
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::RequiredField { field: field.into() }
    }
}
