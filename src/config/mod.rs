//! Interaction layer configuration
//!
//! Configuration is loaded from environment variables using the `config` and
//! `dotenvy` crates. Variables use the `COMMON_INTERACTIONS` prefix and nested
//! values are separated by double underscores. An optional file (TOML, YAML or
//! JSON, picked by extension) can provide a base that the environment
//! overrides.
//!
//! # Example
//!
//! ```no_run
//! use common_interactions::config::InteractionsConfig;
//!
//! let config = InteractionsConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Completion timeout: {:?}", config.session.completion_timeout());
//! ```

mod analytics;
mod error;
mod session;
mod telemetry;

pub use analytics::AnalyticsConfig;
pub use error::{ConfigError, ValidationError};
pub use session::SessionConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;
use std::path::Path;

const ENV_PREFIX: &str = "COMMON_INTERACTIONS";

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InteractionsConfig {
    /// Logging (level, output format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Host completion timeouts
    #[serde(default)]
    pub session: SessionConfig,

    /// Analytics buffering
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

impl InteractionsConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COMMON_INTERACTIONS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `COMMON_INTERACTIONS__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = "debug"`
    /// - `COMMON_INTERACTIONS__SESSION__COMPLETION_TIMEOUT_SECS=10` -> `session.completion_timeout_secs = 10`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load configuration from a file, with environment variables taking
    /// precedence over file values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing, malformed, or holds
    /// values of the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first invalid section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        self.session.validate()?;
        self.analytics.validate()?;
        Ok(())
    }
}

fn environment() -> config::Environment {
    config::Environment::default()
        .prefix(ENV_PREFIX)
        .separator("__")
}
