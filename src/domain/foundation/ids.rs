//! Identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a captured analytics record.
///
/// Transports use it to drop duplicates when a batch is resent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Creates a new random RecordId using UUID v4.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_generates_unique_values() {
        assert_ne!(RecordId::new(), RecordId::new());
    }

    #[test]
    fn record_id_displays_inner_value() {
        let id = RecordId::new();
        assert_eq!(id.to_string(), id.as_str());
    }

    #[test]
    fn record_id_serializes_transparently() {
        let id: RecordId = serde_json::from_str("\"rec-1\"").unwrap();
        assert_eq!(id.as_str(), "rec-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"rec-1\"");
    }
}
