//! Foundation module - Shared domain primitives.
//!
//! Contains the error channel, identifiers and timestamps used across the
//! interaction contracts.

mod errors;
mod ids;
mod timestamp;

pub use errors::InteractionError;
pub use ids::RecordId;
pub use timestamp::Timestamp;
