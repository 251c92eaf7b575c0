//! Business services for the phone verification flow

pub mod clock;
pub mod otp;
pub mod verification;

pub use clock::{Clock, ManualClock, SystemClock};
pub use otp::{OtpConfig, OtpStore};
pub use verification::{
    MockSmsDispatcher, SendCodeResult, SmsDispatcher, VerificationService,
    VerificationServiceConfig, VerifiedLogin,
};
