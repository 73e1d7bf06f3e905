//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `PROPLENS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use proplens::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Starting with LTV {}%", config.financing.ltv_percent);
//! ```

mod error;
mod financing;
mod runtime;
mod seed;

pub use error::{ConfigError, ValidationError};
pub use financing::FinancingConfig;
pub use runtime::{Environment, LogFormat, RuntimeConfig};
pub use seed::SeedConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Runtime configuration (environment, logging)
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Initial financing assumptions
    #[serde(default)]
    pub financing: FinancingConfig,

    /// Sample data seeding
    #[serde(default)]
    pub seed: SeedConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `PROPLENS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `PROPLENS__RUNTIME__LOG_FORMAT=json` -> `runtime.log_format = json`
    /// - `PROPLENS__FINANCING__LTV_PERCENT=60` -> `financing.ltv_percent = 60`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("PROPLENS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.runtime.validate()?;
        self.financing.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("PROPLENS__RUNTIME__ENVIRONMENT");
        env::remove_var("PROPLENS__RUNTIME__LOG_FORMAT");
        env::remove_var("PROPLENS__FINANCING__LTV_PERCENT");
        env::remove_var("PROPLENS__FINANCING__TERM_YEARS");
        env::remove_var("PROPLENS__SEED__SAMPLE_DEALS");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.runtime.environment, Environment::Development);
        assert_eq!(config.financing.ltv_percent, 75.0);
        assert!(config.seed.sample_deals);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_financing_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROPLENS__FINANCING__LTV_PERCENT", "60");
        env::set_var("PROPLENS__FINANCING__TERM_YEARS", "30");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.financing.ltv_percent, 60.0);
        assert_eq!(config.financing.term_years, 30);
        assert_eq!(config.financing.interest_rate_percent, 4.5);
    }

    #[test]
    fn test_load_environment_and_log_format() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROPLENS__RUNTIME__ENVIRONMENT", "production");
        env::set_var("PROPLENS__RUNTIME__LOG_FORMAT", "json");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.runtime.environment, Environment::Production);
        assert_eq!(config.runtime.log_format, LogFormat::Json);
    }

    #[test]
    fn test_seed_can_be_disabled() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("PROPLENS__SEED__SAMPLE_DEALS", "false");
        let result = AppConfig::load();
        clear_env();

        assert!(!result.unwrap().seed.sample_deals);
    }

    #[test]
    fn test_validate_rejects_bad_financing() {
        let config = AppConfig {
            financing: FinancingConfig {
                ltv_percent: 120.0,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidLtv)));
    }
}
