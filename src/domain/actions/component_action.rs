//! ComponentAction - requests a feature module delegates to the host app.
//!
//! The set is closed: adding an action means adding a variant here and
//! handling it in every `CreatorsAction` implementation. Host dispatchers
//! match exhaustively, so a new variant is a compile error until handled.

use std::fmt;

use serde::Serialize;

use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::InteractionError;
use crate::domain::identity::AmwayAboIdentity;

/// Invoked once the requested navigation has completed.
pub type ActionCompletion = Box<dyn FnOnce() + Send + 'static>;

/// Invoked once with the renewed session token or the renewal failure.
pub type RenewTokenCompletion = Box<dyn FnOnce(Result<String, InteractionError>) + Send + 'static>;

/// Invoked once with the current ABO identity or the lookup failure.
pub type AboIdentityCompletion =
    Box<dyn FnOnce(Result<AmwayAboIdentity, InteractionError>) + Send + 'static>;

/// An action requested from the host.
///
/// Completions are optional. A variant built without one is
/// fire-and-forget: the host performs the action and reports nothing back.
///
/// # Example
///
/// ```
/// use common_interactions::domain::actions::{ActionKind, ComponentAction};
///
/// let action = ComponentAction::renew_token_then(|result| {
///     if let Ok(token) = result {
///         println!("renewed: {token}");
///     }
/// });
/// assert_eq!(action.kind(), ActionKind::RenewToken);
/// ```
pub enum ComponentAction {
    /// Show the profile view.
    ShowProfile(Option<ActionCompletion>),

    /// Record an analytics event under its name.
    Analytics { event: Box<dyn AnalyticsEvent> },

    /// Force a session token renewal.
    RenewToken(Option<RenewTokenCompletion>),

    /// Fetch the current ABO identity.
    AboIdentity(Option<AboIdentityCompletion>),
}

impl ComponentAction {
    /// Show the profile without waiting for it to appear.
    pub fn show_profile() -> Self {
        Self::ShowProfile(None)
    }

    /// Show the profile, then run `completion` once it is displayed.
    pub fn show_profile_then(completion: impl FnOnce() + Send + 'static) -> Self {
        Self::ShowProfile(Some(Box::new(completion)))
    }

    /// Record an analytics event.
    pub fn analytics(event: impl AnalyticsEvent + 'static) -> Self {
        Self::Analytics {
            event: Box::new(event),
        }
    }

    /// Renew the session token without observing the result.
    pub fn renew_token() -> Self {
        Self::RenewToken(None)
    }

    /// Renew the session token and receive the outcome.
    pub fn renew_token_then(
        completion: impl FnOnce(Result<String, InteractionError>) + Send + 'static,
    ) -> Self {
        Self::RenewToken(Some(Box::new(completion)))
    }

    /// Request the identity without observing the result.
    pub fn abo_identity() -> Self {
        Self::AboIdentity(None)
    }

    /// Request the identity and receive the outcome.
    pub fn abo_identity_then(
        completion: impl FnOnce(Result<AmwayAboIdentity, InteractionError>) + Send + 'static,
    ) -> Self {
        Self::AboIdentity(Some(Box::new(completion)))
    }

    /// Which action this is, without its payload.
    pub fn kind(&self) -> ActionKind {
        match self {
            ComponentAction::ShowProfile(_) => ActionKind::ShowProfile,
            ComponentAction::Analytics { .. } => ActionKind::Analytics,
            ComponentAction::RenewToken(_) => ActionKind::RenewToken,
            ComponentAction::AboIdentity(_) => ActionKind::AboIdentity,
        }
    }

    /// Returns true if the caller supplied a completion.
    pub fn has_completion(&self) -> bool {
        match self {
            ComponentAction::ShowProfile(completion) => completion.is_some(),
            ComponentAction::Analytics { .. } => false,
            ComponentAction::RenewToken(completion) => completion.is_some(),
            ComponentAction::AboIdentity(completion) => completion.is_some(),
        }
    }
}

impl From<Box<dyn AnalyticsEvent>> for ComponentAction {
    fn from(event: Box<dyn AnalyticsEvent>) -> Self {
        Self::Analytics { event }
    }
}

impl fmt::Debug for ComponentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ComponentAction::Analytics { event } => {
                return f
                    .debug_struct("Analytics")
                    .field("event", &event.name())
                    .finish();
            }
            ComponentAction::ShowProfile(_) => "ShowProfile",
            ComponentAction::RenewToken(_) => "RenewToken",
            ComponentAction::AboIdentity(_) => "AboIdentity",
        };
        f.debug_struct(name)
            .field("has_completion", &self.has_completion())
            .finish()
    }
}

/// Payload-free discriminant of [`ComponentAction`], used for logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    ShowProfile,
    Analytics,
    RenewToken,
    AboIdentity,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::ShowProfile => "show_profile",
            ActionKind::Analytics => "analytics",
            ActionKind::RenewToken => "renew_token",
            ActionKind::AboIdentity => "abo_identity",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
