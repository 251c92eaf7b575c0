//! In-process OTP storage with expiry
//!
//! One pending code per phone number. Codes are single use and are dropped
//! on successful verification, on an expired verification attempt, or by
//! `OtpStore::purge_expired`.

mod config;
mod store;

#[cfg(test)]
mod tests;

pub use config::OtpConfig;
pub use store::OtpStore;
