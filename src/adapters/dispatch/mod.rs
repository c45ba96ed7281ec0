//! Dispatch adapters.
//!
//! Implementations of the `CreatorsAction` port:
//!
//! - `HostDispatcher` - Routes each action to the host collaborator that performs it

mod host_dispatcher;

pub use host_dispatcher::HostDispatcher;
