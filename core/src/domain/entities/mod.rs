//! Domain entities representing core business objects.

pub mod otp_entry;
pub mod user;

#[cfg(test)]
mod tests;

pub use otp_entry::{OtpEntry, CODE_LENGTH, DEFAULT_EXPIRATION_MINUTES};
pub use user::User;
