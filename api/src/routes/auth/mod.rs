//! Phone verification route handlers
//!
//! - `send_otp` / `verify_otp`: the two-step OTP handshake
//! - `send_test_otp` / `stored_otps`: debug helpers, mounted only when enabled

pub mod send_otp;
pub mod send_test_otp;
pub mod stored_otps;
pub mod verify_otp;

use std::sync::Arc;

use pv_core::repositories::UserRepository;
use pv_core::services::verification::{SmsDispatcher, VerificationService};

/// Application state that holds shared services
pub struct AppState<S, U>
where
    S: SmsDispatcher,
    U: UserRepository,
{
    pub verification_service: Arc<VerificationService<S, U>>,
}

impl<S: SmsDispatcher, U: UserRepository> AppState<S, U> {
    pub fn new(verification_service: Arc<VerificationService<S, U>>) -> Self {
        Self {
            verification_service,
        }
    }
}
