//! Verification service module for SMS-based phone verification
//!
//! This module provides the two-step OTP handshake:
//! - Code generation, storage and SMS delivery
//! - Code verification followed by find-or-create of the user record
//! - Debug helpers for the test-send flow and listing pending codes

mod config;
pub mod mock;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use mock::MockSmsDispatcher;
pub use service::VerificationService;
pub use traits::SmsDispatcher;
pub use types::{SendCodeResult, VerifiedLogin};
