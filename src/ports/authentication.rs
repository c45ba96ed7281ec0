//! AmwayAuthentication port - access to the host's authenticated session.
//!
//! The session (token, renewal hook, logout hook) is owned and mutated by the
//! host. Feature modules only read the token and register callbacks.

use std::sync::Arc;

use crate::domain::foundation::InteractionError;

/// One-shot receiver for a `token` request.
pub type SessionCompletion = Box<dyn FnOnce(Result<String, InteractionError>) + Send + 'static>;

/// Receives every out-of-band renewal: the new token, or why renewal failed.
pub type SessionHandler = Arc<dyn Fn(Result<String, InteractionError>) + Send + Sync + 'static>;

/// Notified when the session ends.
pub type LogoutHandler = Arc<dyn Fn() + Send + Sync + 'static>;

/// Session authentication state exposed by the host.
///
/// # Contract
///
/// Implementations must:
/// - Invoke the `token` completion exactly once per call
/// - Complete `token` with `Err(InteractionError::NoToken)` when no token is set
/// - Hold at most one renewal and one logout handler; registering replaces
///   the previous one and `None` clears it
///
/// The logout handler is a best-effort notification. Hosts do not wait for
/// it and give it no minimum time budget, so it should only drop
/// session-scoped data and return.
pub trait AmwayAuthentication: Send + Sync {
    /// Retrieves the session token, if one is set.
    fn token(&self, completion: SessionCompletion);

    /// Replaces the handler invoked when the token is renewed.
    fn register_renewal(&self, action: Option<SessionHandler>);

    /// Replaces the handler invoked when the session is terminated.
    fn register_logout(&self, action: Option<LogoutHandler>);
}
