//! ComponentContext - what a feature module is handed by the host.
//!
//! The context bundles the injected `CreatorsAction` and
//! `AmwayAuthentication` ports and adapts their completion callbacks to
//! futures. Every awaited request is bounded by the configured completion
//! timeout, so a host that never answers surfaces as `TimedOut` instead of a
//! hung task.
//!
//! The callback-based ports remain available through
//! [`ComponentContext::creators`] and [`ComponentContext::authentication`].

use std::sync::Arc;
use std::time::Duration;

use futures::channel::oneshot;

use crate::config::SessionConfig;
use crate::domain::actions::ComponentAction;
use crate::domain::analytics::AnalyticsEvent;
use crate::domain::foundation::InteractionError;
use crate::domain::identity::AmwayAboIdentity;
use crate::ports::{AmwayAuthentication, CreatorsAction};

/// Host capabilities injected into a feature module.
///
/// # Example
///
/// ```ignore
/// let context = ComponentContext::new(dispatcher, session, &config.session);
///
/// context.track(ProgramStartEvent { /* ... */ });
/// let token = context.token().await?;
/// ```
#[derive(Clone)]
pub struct ComponentContext {
    creators: Arc<dyn CreatorsAction>,
    authentication: Arc<dyn AmwayAuthentication>,
    completion_timeout: Duration,
}

impl ComponentContext {
    pub fn new(
        creators: Arc<dyn CreatorsAction>,
        authentication: Arc<dyn AmwayAuthentication>,
        config: &SessionConfig,
    ) -> Self {
        Self {
            creators,
            authentication,
            completion_timeout: config.completion_timeout(),
        }
    }

    /// Overrides the completion timeout.
    pub fn with_completion_timeout(mut self, timeout: Duration) -> Self {
        self.completion_timeout = timeout;
        self
    }

    pub fn completion_timeout(&self) -> Duration {
        self.completion_timeout
    }

    /// The injected action dispatcher.
    pub fn creators(&self) -> &Arc<dyn CreatorsAction> {
        &self.creators
    }

    /// The injected session authenticator.
    pub fn authentication(&self) -> &Arc<dyn AmwayAuthentication> {
        &self.authentication
    }

    /// Records an analytics event. Fire-and-forget.
    pub fn track(&self, event: impl AnalyticsEvent + 'static) {
        self.creators.action(ComponentAction::analytics(event));
    }

    /// Shows the profile and resolves once it is displayed.
    ///
    /// # Panics
    ///
    /// Panics if awaited outside a Tokio runtime; the completion timeout runs
    /// on Tokio's timer.
    pub async fn show_profile(&self) -> Result<(), InteractionError> {
        let (tx, rx) = oneshot::channel();
        self.creators
            .action(ComponentAction::show_profile_then(move || {
                let _ = tx.send(());
            }));
        self.wait("show_profile", rx).await
    }

    /// Current session token.
    ///
    /// # Panics
    ///
    /// Panics if awaited outside a Tokio runtime; the completion timeout runs
    /// on Tokio's timer.
    pub async fn token(&self) -> Result<String, InteractionError> {
        let (tx, rx) = oneshot::channel();
        self.authentication.token(Box::new(move |result| {
            let _ = tx.send(result);
        }));
        self.wait("token", rx).await?
    }

    /// Forces a token renewal and resolves with the new token.
    ///
    /// # Panics
    ///
    /// Panics if awaited outside a Tokio runtime; the completion timeout runs
    /// on Tokio's timer.
    pub async fn renew_token(&self) -> Result<String, InteractionError> {
        let (tx, rx) = oneshot::channel();
        self.creators
            .action(ComponentAction::renew_token_then(move |result| {
                let _ = tx.send(result);
            }));
        self.wait("renew_token", rx).await?
    }

    /// Identity of the signed-in ABO.
    ///
    /// # Panics
    ///
    /// Panics if awaited outside a Tokio runtime; the completion timeout runs
    /// on Tokio's timer.
    pub async fn abo_identity(&self) -> Result<AmwayAboIdentity, InteractionError> {
        let (tx, rx) = oneshot::channel();
        self.creators
            .action(ComponentAction::abo_identity_then(move |result| {
                let _ = tx.send(result);
            }));
        self.wait("abo_identity", rx).await?
    }

    /// Replaces this module's renewal handler.
    pub fn on_renewal(&self, handler: impl Fn(Result<String, InteractionError>) + Send + Sync + 'static) {
        self.authentication.register_renewal(Some(Arc::new(handler)));
    }

    /// Replaces this module's logout handler.
    ///
    /// Keep it short: the host does not wait for it to finish.
    pub fn on_logout(&self, handler: impl Fn() + Send + Sync + 'static) {
        self.authentication.register_logout(Some(Arc::new(handler)));
    }

    /// Removes both session handlers.
    pub fn clear_session_handlers(&self) {
        self.authentication.register_renewal(None);
        self.authentication.register_logout(None);
    }

    async fn wait<T>(
        &self,
        operation: &'static str,
        rx: oneshot::Receiver<T>,
    ) -> Result<T, InteractionError> {
        match tokio::time::timeout(self.completion_timeout, rx).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(oneshot::Canceled)) => {
                tracing::warn!(operation, "host dropped completion without invoking it");
                Err(InteractionError::CompletionDropped)
            }
            Err(_) => {
                tracing::warn!(operation, timeout = ?self.completion_timeout, "host completion timed out");
                Err(InteractionError::TimedOut(self.completion_timeout))
            }
        }
    }
}
