//! Captured form of an analytics event.

use serde::{Deserialize, Serialize};

use super::{AnalyticsEvent, Metadata};
use crate::domain::foundation::{RecordId, Timestamp};

/// An analytics event after the host has encoded it.
///
/// This is what sinks receive: the event's name, its encoded payload and the
/// capture context needed to deduplicate and order records downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsRecord {
    /// Unique ID for this record.
    pub record_id: RecordId,

    /// Name the event was recorded under (e.g., "program.start").
    pub name: String,

    /// Encoded event payload.
    pub payload: Metadata,

    /// When the host captured the event.
    pub recorded_at: Timestamp,
}

impl AnalyticsRecord {
    /// Creates a record with a fresh ID, captured now.
    pub fn new(name: impl Into<String>, payload: Metadata) -> Self {
        Self {
            record_id: RecordId::new(),
            name: name.into(),
            payload,
            recorded_at: Timestamp::now(),
        }
    }

    /// Encodes an event and captures it.
    ///
    /// Calls `encode` exactly once.
    pub fn from_event(event: &dyn AnalyticsEvent) -> Self {
        Self::new(event.name(), event.encode())
    }

    /// Deserialize the payload into a typed value.
    pub fn payload_as<T: for<'de> Deserialize<'de>>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(self.payload.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingEvent {
        encodes: AtomicUsize,
    }

    impl AnalyticsEvent for CountingEvent {
        fn name(&self) -> &str {
            "counting.event"
        }

        fn encode(&self) -> Metadata {
            self.encodes.fetch_add(1, Ordering::SeqCst);
            let mut metadata = Metadata::new();
            metadata.insert("screen".to_string(), json!("home"));
            metadata
        }
    }

    #[test]
    fn from_event_captures_name_and_payload() {
        let event = CountingEvent {
            encodes: AtomicUsize::new(0),
        };

        let record = AnalyticsRecord::from_event(&event);

        assert_eq!(record.name, "counting.event");
        assert_eq!(record.payload.get("screen"), Some(&json!("home")));
        assert_eq!(event.encodes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn records_get_distinct_ids() {
        let a = AnalyticsRecord::new("a", Metadata::new());
        let b = AnalyticsRecord::new("a", Metadata::new());
        assert_ne!(a.record_id, b.record_id);
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let record = AnalyticsRecord::new("program.start", Metadata::new());
        let value = serde_json::to_value(&record).unwrap();

        assert!(value.get("recordId").is_some());
        assert!(value.get("recordedAt").is_some());
        assert_eq!(value["name"], "program.start");
    }

    #[test]
    fn payload_as_deserializes_typed_payload() {
        #[derive(Deserialize)]
        struct Screen {
            screen: String,
        }

        let mut payload = Metadata::new();
        payload.insert("screen".to_string(), json!("profile"));
        let record = AnalyticsRecord::new("screen.view", payload);

        let screen: Screen = record.payload_as().unwrap();
        assert_eq!(screen.screen, "profile");
    }
}
