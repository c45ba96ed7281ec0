//! Analytics configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Analytics buffering configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyticsConfig {
    /// Records held before the oldest is dropped
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

impl AnalyticsConfig {
    /// Validate analytics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.buffer_capacity == 0 || self.buffer_capacity > 100_000 {
            return Err(ValidationError::InvalidBufferCapacity);
        }
        Ok(())
    }
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}

fn default_buffer_capacity() -> usize {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analytics_defaults() {
        let config = AnalyticsConfig::default();
        assert_eq!(config.buffer_capacity, 1000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_zero_capacity() {
        let config = AnalyticsConfig { buffer_capacity: 0 };
        assert_eq!(config.validate(), Err(ValidationError::InvalidBufferCapacity));
    }

    #[test]
    fn test_deserialization() {
        let config: AnalyticsConfig = serde_json::from_str(r#"{"buffer_capacity": 50}"#).unwrap();
        assert_eq!(config.buffer_capacity, 50);
    }
}
