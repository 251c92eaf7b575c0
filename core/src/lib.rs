//! # PhoneVerify Core
//!
//! Core business logic and domain layer for the PhoneVerify backend.
//! This crate contains domain entities, the OTP store, the verification
//! handshake, repository interfaces, and error types.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::{LoginOutcome, OtpEntry, User};
pub use errors::{DomainError, DomainResult, OtpError, ValidationError};
pub use repositories::{MockUserRepository, UserRepository};
pub use services::{OtpStore, SmsDispatcher, VerificationService};
