//! Ports - Interfaces between feature modules and the host app.
//!
//! Following hexagonal architecture, ports define the contracts; the host
//! supplies the implementations and injects them into feature modules.
//!
//! ## Feature-facing Ports
//!
//! - `CreatorsAction` - Performs delegated `ComponentAction`s
//! - `AmwayAuthentication` - Session token access and session notifications
//!
//! ## Host Collaborator Ports
//!
//! Used by the host's own `CreatorsAction` implementation:
//!
//! - `ProfileNavigator` - Navigation to the profile view
//! - `AnalyticsSink` - Analytics transport
//! - `TokenRenewer` - Network layer for forced token renewal
//! - `IdentityProvider` - Source of the signed-in ABO identity

mod analytics_sink;
mod authentication;
mod creators_action;
mod identity_provider;
mod profile_navigator;
mod token_renewer;

pub use analytics_sink::AnalyticsSink;
pub use authentication::{AmwayAuthentication, LogoutHandler, SessionCompletion, SessionHandler};
pub use creators_action::CreatorsAction;
pub use identity_provider::IdentityProvider;
pub use profile_navigator::ProfileNavigator;
pub use token_renewer::TokenRenewer;
