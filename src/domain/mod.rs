//! Domain layer - the types exchanged between feature modules and the host.
//!
//! - `foundation` - Error channel, identifiers, timestamps
//! - `analytics` - Event encoding contract and captured records
//! - `identity` - ABO identity record
//! - `actions` - The closed set of delegated actions

pub mod actions;
pub mod analytics;
pub mod foundation;
pub mod identity;
