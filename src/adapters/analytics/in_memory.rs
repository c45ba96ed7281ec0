//! In-memory analytics sink.
//!
//! Buffers records in arrival order up to a fixed capacity, dropping the
//! oldest record when full. A transport drains it with `drain`; tests assert
//! on it with the query helpers.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::AnalyticsConfig;
use crate::domain::analytics::AnalyticsRecord;
use crate::domain::foundation::InteractionError;
use crate::ports::AnalyticsSink;

/// Bounded FIFO buffer of analytics records.
///
/// # Example
///
/// ```
/// use common_interactions::adapters::InMemoryAnalyticsSink;
/// use common_interactions::domain::analytics::{AnalyticsRecord, Metadata};
/// use common_interactions::ports::AnalyticsSink;
///
/// let sink = InMemoryAnalyticsSink::with_capacity(2);
/// sink.record(AnalyticsRecord::new("a", Metadata::new())).unwrap();
/// sink.record(AnalyticsRecord::new("b", Metadata::new())).unwrap();
/// sink.record(AnalyticsRecord::new("c", Metadata::new())).unwrap();
///
/// assert_eq!(sink.record_count(), 2);
/// assert_eq!(sink.dropped_count(), 1);
/// assert!(!sink.has_record("a"));
/// ```
#[derive(Debug)]
pub struct InMemoryAnalyticsSink {
    records: Mutex<VecDeque<AnalyticsRecord>>,
    capacity: usize,
    dropped: AtomicU64,
    closed: AtomicBool,
}

impl InMemoryAnalyticsSink {
    /// Creates a sink sized from configuration.
    pub fn new(config: &AnalyticsConfig) -> Self {
        Self::with_capacity(config.buffer_capacity)
    }

    /// Creates a sink holding at most `capacity` records (minimum 1).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            records: Mutex::new(VecDeque::with_capacity(capacity.min(1024))),
            capacity,
            dropped: AtomicU64::new(0),
            closed: AtomicBool::new(false),
        }
    }

    fn buffer(&self) -> MutexGuard<'_, VecDeque<AnalyticsRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Removes and returns every buffered record, oldest first.
    pub fn drain(&self) -> Vec<AnalyticsRecord> {
        self.buffer().drain(..).collect()
    }

    /// Stops accepting records. Buffered records stay drainable.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    /// Returns true once `close` has been called.
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Number of records evicted because the buffer was full.
    pub fn dropped_count(&self) -> u64 {
        self.dropped.load(Ordering::SeqCst)
    }

    /// Maximum number of buffered records.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // === Test Helpers ===

    /// Returns all buffered records, oldest first.
    pub fn records(&self) -> Vec<AnalyticsRecord> {
        self.buffer().iter().cloned().collect()
    }

    /// Returns buffered records recorded under `name`.
    pub fn records_named(&self, name: &str) -> Vec<AnalyticsRecord> {
        self.buffer()
            .iter()
            .filter(|record| record.name == name)
            .cloned()
            .collect()
    }

    /// Returns the number of buffered records.
    pub fn record_count(&self) -> usize {
        self.buffer().len()
    }

    /// Checks if a record with `name` is buffered.
    pub fn has_record(&self, name: &str) -> bool {
        self.buffer().iter().any(|record| record.name == name)
    }

    /// Discards all buffered records.
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl Default for InMemoryAnalyticsSink {
    fn default() -> Self {
        Self::new(&AnalyticsConfig::default())
    }
}

impl AnalyticsSink for InMemoryAnalyticsSink {
    fn record(&self, record: AnalyticsRecord) -> Result<(), InteractionError> {
        if self.is_closed() {
            return Err(InteractionError::operation_failed("analytics sink is closed"));
        }

        let mut buffer = self.buffer();
        if buffer.len() >= self.capacity {
            if let Some(evicted) = buffer.pop_front() {
                self.dropped.fetch_add(1, Ordering::SeqCst);
                tracing::warn!(
                    evicted = %evicted.name,
                    recorded_at = %evicted.recorded_at.as_datetime(),
                    capacity = self.capacity,
                    "analytics buffer full, dropping oldest record"
                );
            }
        }
        buffer.push_back(record);
        Ok(())
    }
}
