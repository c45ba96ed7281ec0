//! Adapters - Host-side implementations of port interfaces.
//!
//! - `dispatch` - `CreatorsAction` routing to host collaborators
//! - `session` - In-memory `AmwayAuthentication`
//! - `analytics` - In-memory analytics buffer
//! - `host` - Mock navigation, renewal and identity collaborators

pub mod analytics;
pub mod dispatch;
pub mod host;
pub mod session;

pub use analytics::InMemoryAnalyticsSink;
pub use dispatch::HostDispatcher;
pub use host::{MockIdentityProvider, MockProfileNavigator, MockTokenRenewer};
pub use session::InMemoryAuthentication;
