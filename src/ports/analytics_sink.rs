//! AnalyticsSink port - the host's analytics transport.
//!
//! Batching, retries and network delivery live behind this port.

use crate::domain::analytics::AnalyticsRecord;
use crate::domain::foundation::InteractionError;

/// Accepts encoded analytics records for delivery.
///
/// `record` is called on the dispatch path and must not block on network
/// I/O; enqueue and return.
pub trait AnalyticsSink: Send + Sync {
    /// Hand a record over for delivery.
    ///
    /// An error means the record was not accepted (e.g., the buffer is shut
    /// down). Dispatchers log it; feature modules never see it.
    fn record(&self, record: AnalyticsRecord) -> Result<(), InteractionError>;
}
