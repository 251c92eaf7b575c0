//! Value objects produced by domain services.

pub mod login_outcome;

pub use login_outcome::LoginOutcome;
