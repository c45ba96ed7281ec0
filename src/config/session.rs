//! Session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// How long feature modules wait on host completions
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Seconds to wait for `token`, `renew_token` and `abo_identity` completions
    #[serde(default = "default_completion_timeout")]
    pub completion_timeout_secs: u64,
}

impl SessionConfig {
    /// Get completion timeout as Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate session configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.completion_timeout_secs == 0 || self.completion_timeout_secs > 300 {
            return Err(ValidationError::InvalidCompletionTimeout);
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            completion_timeout_secs: default_completion_timeout(),
        }
    }
}

fn default_completion_timeout() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.completion_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_timeout() {
        let config = SessionConfig {
            completion_timeout_secs: 0,
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCompletionTimeout));
    }

    #[test]
    fn test_validation_rejects_long_timeout() {
        let config = SessionConfig {
            completion_timeout_secs: 301,
        };
        assert!(config.validate().is_err());
    }
}
