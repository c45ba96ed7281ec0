//! Error types shared across the interaction contracts.
//!
//! A single error channel is used for every asynchronous result a host
//! delivers to a feature module: token retrieval, token renewal and identity
//! lookups. Hosts that need something more specific than the provided
//! variants report it through [`InteractionError::OperationFailed`].

use std::time::Duration;
use thiserror::Error;

/// Failure delivered through a completion's `Err` branch.
///
/// The error is `Clone` so that a single host result can be fanned out to
/// every caller waiting on a coalesced request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// No session token is currently set.
    #[error("No session token is set")]
    NoToken,

    /// The host tried to renew the session token and failed.
    #[error("Session token renewal failed: {0}")]
    RenewalFailed(String),

    /// The host could not provide the current ABO identity.
    #[error("ABO identity unavailable: {0}")]
    IdentityUnavailable(String),

    /// The host dropped a completion without ever invoking it.
    #[error("Host dropped the completion without invoking it")]
    CompletionDropped,

    /// The host did not invoke a completion within the allotted time.
    #[error("Host did not complete the request within {0:?}")]
    TimedOut(Duration),

    /// Generic host-defined failure.
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl InteractionError {
    /// Creates a renewal failure with a message.
    pub fn renewal_failed(message: impl Into<String>) -> Self {
        Self::RenewalFailed(message.into())
    }

    /// Creates an identity failure with a message.
    pub fn identity_unavailable(message: impl Into<String>) -> Self {
        Self::IdentityUnavailable(message.into())
    }

    /// Creates a generic host failure with a message.
    pub fn operation_failed(message: impl Into<String>) -> Self {
        Self::OperationFailed(message.into())
    }

    /// Returns true if the feature module should treat the session as gone.
    pub fn requires_reauthentication(&self) -> bool {
        matches!(self, InteractionError::NoToken | InteractionError::RenewalFailed(_))
    }

    /// Returns true if asking again may succeed.
    ///
    /// Retrying is the caller's decision; hosts never retry on their behalf.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            InteractionError::TimedOut(_) | InteractionError::CompletionDropped
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_token_displays_correctly() {
        assert_eq!(format!("{}", InteractionError::NoToken), "No session token is set");
    }

    #[test]
    fn renewal_failed_displays_message() {
        let err = InteractionError::renewal_failed("refresh token revoked");
        assert_eq!(
            format!("{}", err),
            "Session token renewal failed: refresh token revoked"
        );
    }

    #[test]
    fn operation_failed_displays_message() {
        let err = InteractionError::operation_failed("navigation stack busy");
        assert_eq!(format!("{}", err), "Operation failed: navigation stack busy");
    }

    #[test]
    fn timed_out_displays_duration() {
        let err = InteractionError::TimedOut(Duration::from_secs(5));
        assert_eq!(format!("{}", err), "Host did not complete the request within 5s");
    }

    #[test]
    fn requires_reauthentication_for_session_errors() {
        assert!(InteractionError::NoToken.requires_reauthentication());
        assert!(InteractionError::renewal_failed("x").requires_reauthentication());
        assert!(!InteractionError::identity_unavailable("x").requires_reauthentication());
        assert!(!InteractionError::CompletionDropped.requires_reauthentication());
    }

    #[test]
    fn is_transient_for_delivery_errors() {
        assert!(InteractionError::TimedOut(Duration::from_secs(1)).is_transient());
        assert!(InteractionError::CompletionDropped.is_transient());
        assert!(!InteractionError::NoToken.is_transient());
        assert!(!InteractionError::operation_failed("x").is_transient());
    }

    #[test]
    fn clones_compare_equal() {
        let err = InteractionError::renewal_failed("offline");
        assert_eq!(err.clone(), err);
    }
}
