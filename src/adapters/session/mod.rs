//! Session adapters.
//!
//! Implementations of the `AmwayAuthentication` port:
//!
//! - `InMemoryAuthentication` - Session state held in process memory

mod in_memory;

pub use in_memory::InMemoryAuthentication;
