//! Host collaborator adapters.
//!
//! Implementations of the `ProfileNavigator`, `TokenRenewer` and
//! `IdentityProvider` ports:
//!
//! - `mock` - Test implementations that don't require a real host app

mod mock;

pub use mock::{MockIdentityProvider, MockProfileNavigator, MockTokenRenewer};
