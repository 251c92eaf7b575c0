//! Configuration module
//!
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and env var helpers
//! - `server` - HTTP server configuration

pub mod database;
pub mod environment;
pub mod server;

pub use database::DatabaseConfig;
pub use environment::{env_bool, env_parse, Environment};
pub use server::ServerConfig;
