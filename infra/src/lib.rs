//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the PhoneVerify backend,
//! following Clean Architecture principles. It provides concrete implementations
//! of the core seams: user persistence and SMS delivery.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL connection pool, schema bootstrap and the user repository (SQLx)
//! - **SMS**: SMS provider integrations (Twilio, mock) and the adapter to the core dispatcher
//!
//! ## Features
//!
//! - `mysql`: Enable MySQL database support (default)
//! - `twilio-sms`: Enable Twilio SMS service (default)

/// Database module - MySQL implementations using SQLx
#[cfg(feature = "mysql")]
pub mod database;

/// SMS service module - External SMS providers
pub mod sms;

/// Configuration module for infrastructure services
pub mod config;

pub use config::SmsConfig;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// SMS service error
    #[error("SMS service error: {0}")]
    Sms(String),
}

impl From<InfrastructureError> for pv_core::errors::DomainError {
    fn from(err: InfrastructureError) -> Self {
        match err {
            InfrastructureError::Database(e) => pv_core::errors::DomainError::Database(e.to_string()),
            InfrastructureError::Sms(message) => pv_core::errors::DomainError::SmsDispatch { message },
            other => pv_core::errors::DomainError::Internal {
                message: other.to_string(),
            },
        }
    }
}
