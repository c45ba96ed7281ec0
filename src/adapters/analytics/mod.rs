//! Analytics adapters.
//!
//! - `InMemoryAnalyticsSink` - Bounded in-process buffer of analytics records

mod in_memory;

pub use in_memory::InMemoryAnalyticsSink;
