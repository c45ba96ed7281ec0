//! Analytics module - event encoding contract and captured records.
//!
//! Feature modules define their own event types and implement
//! [`AnalyticsEvent`] for them. The host records the encoded payload under
//! the event's name; how it is batched and shipped is the host's concern.

mod event;
mod record;

pub use event::{encode_serialized, AnalyticsEvent, Metadata};
pub use record::AnalyticsRecord;
