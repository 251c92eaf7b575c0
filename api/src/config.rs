//! Application configuration assembled from the environment

use pv_core::domain::entities::otp_entry::{DEFAULT_EXPIRATION_MINUTES, MAX_EXPIRATION_MINUTES};
use pv_infra::config::SmsConfig;
use pv_shared::config::{env_bool, env_parse, DatabaseConfig, Environment, ServerConfig};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// OTP handshake settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtpSettings {
    /// Destination of the test-send flow
    pub test_phone_number: Option<String>,
    /// Lifetime of a stored code
    pub expiration_minutes: i64,
    /// Period of the expiry sweeper
    pub sweep_interval_secs: u64,
}

impl Default for OtpSettings {
    fn default() -> Self {
        Self {
            test_phone_number: None,
            expiration_minutes: DEFAULT_EXPIRATION_MINUTES,
            sweep_interval_secs: 60,
        }
    }
}

impl OtpSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            test_phone_number: std::env::var("OTP_TEST_PHONE_NUMBER")
                .ok()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
            expiration_minutes: env_parse("OTP_EXPIRATION_MINUTES", defaults.expiration_minutes),
            sweep_interval_secs: env_parse("OTP_SWEEP_INTERVAL_SECS", defaults.sweep_interval_secs),
        }
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub sms: SmsConfig,
    pub otp: OtpSettings,
    /// Mount `/send-test-otp` and `/stored-otps`
    pub enable_debug_routes: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();
        let enable_debug_routes =
            env_bool("ENABLE_DEBUG_ROUTES").unwrap_or_else(|| environment.debug_routes_by_default());

        let config = Config {
            environment,
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            sms: SmsConfig::from_env(),
            otp: OtpSettings::from_env(),
            enable_debug_routes,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.otp.expiration_minutes <= 0 {
            return Err(ConfigError::Invalid(
                "OTP_EXPIRATION_MINUTES must be positive".to_string(),
            ));
        }
        if self.otp.expiration_minutes > MAX_EXPIRATION_MINUTES {
            return Err(ConfigError::Invalid(format!(
                "OTP_EXPIRATION_MINUTES must not exceed {}",
                MAX_EXPIRATION_MINUTES
            )));
        }
        if self.otp.sweep_interval_secs == 0 {
            return Err(ConfigError::Invalid(
                "OTP_SWEEP_INTERVAL_SECS must be positive".to_string(),
            ));
        }
        if self.environment.is_production() && self.sms.is_mock() {
            tracing::warn!("Mock SMS provider configured in production");
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config {
            environment: Environment::Development,
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            sms: SmsConfig::mock(),
            otp: OtpSettings::default(),
            enable_debug_routes: true,
        }
    }

    #[test]
    fn test_default_otp_settings() {
        let otp = OtpSettings::default();
        assert_eq!(otp.expiration_minutes, 5);
        assert_eq!(otp.sweep_interval(), Duration::from_secs(60));
        assert!(otp.test_phone_number.is_none());
    }

    #[test]
    fn test_validate_rejects_non_positive_expiry() {
        let mut config = config();
        config.otp.expiration_minutes = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_expiry() {
        let mut config = config();
        config.otp.expiration_minutes = i64::MAX;
        assert!(config.validate().is_err());

        config.otp.expiration_minutes = MAX_EXPIRATION_MINUTES;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_sweep_interval() {
        let mut config = config();
        config.otp.sweep_interval_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(config().validate().is_ok());
    }
}
