//! The analytics event capability.
//!
//! - `AnalyticsEvent` - Trait every recordable event implements
//! - `Metadata` - The payload an event encodes into
//! - `analytics_event!` - Macro implementing `AnalyticsEvent` for `Serialize` types

use serde::Serialize;
use serde_json::{Map, Value};

/// Encoded event payload.
///
/// Values are restricted to what JSON can carry: strings, numbers, booleans,
/// null, nested mappings and sequences. Keys are kept sorted, so two
/// encodings of equal inputs compare equal.
pub type Metadata = Map<String, Value>;

/// An analytics event that a feature module asks the host to record.
///
/// `encode` runs synchronously on the dispatch path. Keep it a plain field
/// mapping: no I/O, no locking, no fallible work. When a field has no
/// sensible value, substitute a default instead of failing.
///
/// # Example
///
/// ```
/// use common_interactions::domain::analytics::{AnalyticsEvent, Metadata};
/// use serde_json::json;
///
/// struct ProgramStartEvent {
///     identifier: String,
///     program_type: String,
///     is_preview: bool,
/// }
///
/// impl AnalyticsEvent for ProgramStartEvent {
///     fn name(&self) -> &str {
///         "program.start"
///     }
///
///     fn encode(&self) -> Metadata {
///         let mut metadata = Metadata::new();
///         metadata.insert("identifier".into(), json!(self.identifier));
///         metadata.insert("programType".into(), json!(self.program_type));
///         metadata.insert("isPreview".into(), json!(self.is_preview));
///         metadata
///     }
/// }
///
/// let event = ProgramStartEvent {
///     identifier: "p-1".into(),
///     program_type: "5-day-program".into(),
///     is_preview: false,
/// };
/// assert_eq!(event.encode()["programType"], "5-day-program");
/// ```
pub trait AnalyticsEvent: Send + Sync {
    /// The name the event is recorded under.
    fn name(&self) -> &str;

    /// Converts the event into its recorded payload.
    fn encode(&self) -> Metadata;
}

/// Encodes any `Serialize` value as analytics metadata.
///
/// Structs and maps become their fields. `null` becomes an empty payload and
/// any other scalar or sequence is stored under `"value"`. Serialization
/// failures (such as maps with non-string keys) are logged and produce an
/// empty payload, so this never fails.
pub fn encode_serialized<T: Serialize + ?Sized>(value: &T) -> Metadata {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Metadata::new(),
        Ok(other) => {
            let mut metadata = Metadata::new();
            metadata.insert("value".to_string(), other);
            metadata
        }
        Err(error) => {
            tracing::warn!(%error, "analytics payload failed to serialize, recording empty metadata");
            Metadata::new()
        }
    }
}

/// Implements [`AnalyticsEvent`] for a `Serialize` type.
///
/// The payload is the serde representation of the value, so field renames
/// and skips declared with serde attributes apply.
///
/// # Example
///
/// ```
/// use common_interactions::analytics_event;
/// use common_interactions::domain::analytics::AnalyticsEvent;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// #[serde(rename_all = "camelCase")]
/// struct LessonCompleted {
///     lesson_id: String,
///     duration_secs: u32,
/// }
///
/// analytics_event!(LessonCompleted, name = "lesson.completed");
///
/// let event = LessonCompleted { lesson_id: "l-7".into(), duration_secs: 95 };
/// assert_eq!(event.name(), "lesson.completed");
/// assert_eq!(event.encode()["durationSecs"], 95);
/// ```
///
/// Events whose name is carried in a field use `name_field`:
///
/// ```ignore
/// analytics_event!(CustomEvent, name_field = event_name);
/// ```
#[macro_export]
macro_rules! analytics_event {
    ($event_name:ident, name = $name:expr) => {
        impl $crate::domain::analytics::AnalyticsEvent for $event_name {
            fn name(&self) -> &str {
                $name
            }

            fn encode(&self) -> $crate::domain::analytics::Metadata {
                $crate::domain::analytics::encode_serialized(self)
            }
        }
    };
    ($event_name:ident, name_field = $field:ident) => {
        impl $crate::domain::analytics::AnalyticsEvent for $event_name {
            fn name(&self) -> &str {
                &self.$field
            }

            fn encode(&self) -> $crate::domain::analytics::Metadata {
                $crate::domain::analytics::encode_serialized(self)
            }
        }
    };
}
