//! Shared utilities and common types for the PhoneVerify server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types loaded from the environment
//! - The JSON error body returned by every endpoint
//! - Phone number helpers (normalisation, log masking)

pub mod config;
pub mod errors;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, Environment, ServerConfig};
pub use errors::{error_codes, ErrorResponse};
pub use utils::phone;
