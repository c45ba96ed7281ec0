//! In-memory session authentication.
//!
//! Holds the session token and the two single-slot notification handlers.
//! The host drives it through `set_token`, `apply_renewal` and `end_session`;
//! feature modules see it only through the `AmwayAuthentication` port.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use common_interactions::adapters::InMemoryAuthentication;
//! use common_interactions::ports::AmwayAuthentication;
//!
//! let session = InMemoryAuthentication::new().with_token("tok-1");
//!
//! session.token(Box::new(|result| {
//!     assert_eq!(result.unwrap(), "tok-1");
//! }));
//!
//! session.register_renewal(Some(Arc::new(|result| {
//!     println!("renewed: {result:?}");
//! })));
//! session.apply_renewal(Ok("tok-2".to_string()));
//! assert_eq!(session.current_token().as_deref(), Some("tok-2"));
//! ```

use std::sync::{PoisonError, RwLock};

use crate::domain::foundation::InteractionError;
use crate::ports::{AmwayAuthentication, LogoutHandler, SessionCompletion, SessionHandler};

/// Session state for a single signed-in user.
///
/// Handlers are invoked after the internal locks are released, so a handler
/// may call back into the session (e.g., to read the new token).
#[derive(Default)]
pub struct InMemoryAuthentication {
    token: RwLock<Option<String>>,
    renewal: RwLock<Option<SessionHandler>>,
    logout: RwLock<Option<LogoutHandler>>,
}

impl InMemoryAuthentication {
    /// Creates a session with no token set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the session with a token.
    pub fn with_token(self, token: impl Into<String>) -> Self {
        self.set_token(token);
        self
    }

    /// Stores a token without notifying the renewal handler.
    ///
    /// Use this for sign-in. Renewals go through [`Self::apply_renewal`].
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    /// Returns the current token, if any.
    pub fn current_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Records the outcome of an out-of-band renewal and notifies the
    /// registered renewal handler.
    ///
    /// A successful renewal replaces the stored token. A failed one leaves the
    /// previous token in place; the handler decides what the failure means.
    pub fn apply_renewal(&self, result: Result<String, InteractionError>) {
        if let Ok(token) = &result {
            self.set_token(token.clone());
        }

        let handler = self
            .renewal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        match handler {
            Some(handler) => {
                tracing::debug!(success = result.is_ok(), "notifying renewal handler");
                handler(result);
            }
            None => tracing::debug!("token renewed with no renewal handler registered"),
        }
    }

    /// Ends the session: clears the token and notifies the logout handler.
    ///
    /// Handlers stay registered so a module outlives a sign-out/sign-in cycle
    /// without re-registering.
    pub fn end_session(&self) {
        self.token
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let handler = self
            .logout
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        if let Some(handler) = handler {
            tracing::debug!("notifying logout handler");
            handler();
        }
    }

    /// Returns true if a renewal handler is registered.
    pub fn has_renewal_handler(&self) -> bool {
        self.renewal
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Returns true if a logout handler is registered.
    pub fn has_logout_handler(&self) -> bool {
        self.logout
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl AmwayAuthentication for InMemoryAuthentication {
    fn token(&self, completion: SessionCompletion) {
        let result = self.current_token().ok_or(InteractionError::NoToken);
        completion(result);
    }

    fn register_renewal(&self, action: Option<SessionHandler>) {
        *self.renewal.write().unwrap_or_else(PoisonError::into_inner) = action;
    }

    fn register_logout(&self, action: Option<LogoutHandler>) {
        *self.logout.write().unwrap_or_else(PoisonError::into_inner) = action;
    }
}
