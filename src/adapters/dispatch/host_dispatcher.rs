//! HostDispatcher - the host app's `CreatorsAction` implementation.
//!
//! Every `ComponentAction` variant is routed to one injected collaborator:
//!
//! | Action        | Collaborator         |
//! |---------------|----------------------|
//! | `ShowProfile` | `ProfileNavigator`   |
//! | `Analytics`   | `AnalyticsSink`      |
//! | `RenewToken`  | `TokenRenewer`       |
//! | `AboIdentity` | `IdentityProvider`   |
//!
//! When a session is attached with [`HostDispatcher::with_session`], a forced
//! renewal's outcome is applied to it before any waiter runs, so `token()`
//! and the renewal handler agree with what `RenewToken` returned.
//!
//! The dispatcher never spawns work. Completions run on whichever thread the
//! collaborator completes on, which is the caller's thread when the
//! collaborator completes synchronously.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::adapters::session::InMemoryAuthentication;
use crate::domain::actions::{ComponentAction, RenewTokenCompletion};
use crate::domain::analytics::{AnalyticsEvent, AnalyticsRecord};
use crate::domain::foundation::InteractionError;
use crate::ports::{AnalyticsSink, CreatorsAction, IdentityProvider, ProfileNavigator, TokenRenewer};

/// Routes delegated actions to host collaborators.
///
/// Forced token renewals are coalesced: while one renewal is in flight,
/// further `RenewToken` requests join it instead of starting another, and
/// every joined completion receives the same outcome exactly once.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use common_interactions::adapters::{
///     HostDispatcher, InMemoryAnalyticsSink, MockIdentityProvider, MockProfileNavigator,
///     MockTokenRenewer,
/// };
/// use common_interactions::domain::actions::ComponentAction;
/// use common_interactions::ports::CreatorsAction;
///
/// let dispatcher = HostDispatcher::new(
///     Arc::new(MockProfileNavigator::new()),
///     Arc::new(InMemoryAnalyticsSink::default()),
///     Arc::new(MockTokenRenewer::returning("tok-2")),
///     Arc::new(MockIdentityProvider::new()),
/// );
///
/// dispatcher.action(ComponentAction::renew_token_then(|result| {
///     assert_eq!(result.unwrap(), "tok-2");
/// }));
/// ```
pub struct HostDispatcher {
    navigator: Arc<dyn ProfileNavigator>,
    analytics: Arc<dyn AnalyticsSink>,
    renewer: Arc<dyn TokenRenewer>,
    identity: Arc<dyn IdentityProvider>,
    session: Option<Arc<InMemoryAuthentication>>,
    renewal: Arc<RenewalCoalescer>,
}

impl HostDispatcher {
    pub fn new(
        navigator: Arc<dyn ProfileNavigator>,
        analytics: Arc<dyn AnalyticsSink>,
        renewer: Arc<dyn TokenRenewer>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            navigator,
            analytics,
            renewer,
            identity,
            session: None,
            renewal: Arc::new(RenewalCoalescer::default()),
        }
    }

    /// Attaches the host session that forced renewals update.
    pub fn with_session(mut self, session: Arc<InMemoryAuthentication>) -> Self {
        self.session = Some(session);
        self
    }

    /// Returns true while a forced renewal is waiting on the renewer.
    pub fn renewal_in_flight(&self) -> bool {
        self.renewal.waiters().is_some()
    }

    fn record(&self, event: &dyn AnalyticsEvent) {
        let record = AnalyticsRecord::from_event(event);
        let name = record.name.clone();

        if let Err(error) = self.analytics.record(record) {
            tracing::warn!(event = %name, %error, "analytics sink rejected record");
        }
    }

    fn renew_token(&self, completion: Option<RenewTokenCompletion>) {
        {
            let mut waiters = self.renewal.waiters();
            if let Some(in_flight) = waiters.as_mut() {
                tracing::debug!(waiting = in_flight.len(), "joining in-flight token renewal");
                in_flight.extend(completion);
                return;
            }
            *waiters = Some(completion.into_iter().collect());
        }

        let pending = PendingRenewal {
            coalescer: Some(Arc::clone(&self.renewal)),
            session: self.session.clone(),
        };
        self.renewer
            .renew(Box::new(move |result| pending.complete(result)));
    }
}

impl CreatorsAction for HostDispatcher {
    fn action(&self, kind: ComponentAction) {
        tracing::debug!(action = %kind.kind(), has_completion = kind.has_completion(), "dispatching action");

        match kind {
            ComponentAction::ShowProfile(completion) => self.navigator.show_profile(completion),
            ComponentAction::Analytics { event } => self.record(event.as_ref()),
            ComponentAction::RenewToken(completion) => self.renew_token(completion),
            ComponentAction::AboIdentity(completion) => {
                let completion = completion.unwrap_or_else(|| Box::new(|_| {}));
                self.identity.identity(completion);
            }
        }
    }
}

/// Waiters for the renewal in flight; `None` when idle.
#[derive(Default)]
struct RenewalCoalescer {
    in_flight: Mutex<Option<Vec<RenewTokenCompletion>>>,
}

impl RenewalCoalescer {
    fn waiters(&self) -> MutexGuard<'_, Option<Vec<RenewTokenCompletion>>> {
        self.in_flight.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn finish(
        &self,
        result: Result<String, InteractionError>,
        session: Option<&InMemoryAuthentication>,
    ) {
        if let Some(session) = session {
            session.apply_renewal(result.clone());
        }

        // Waiters run outside the lock so they may request another renewal.
        let waiters = self.waiters().take().unwrap_or_default();
        tracing::debug!(waiters = waiters.len(), success = result.is_ok(), "token renewal finished");

        for waiter in waiters {
            waiter(result.clone());
        }
    }
}

/// Resolves the in-flight renewal once, even if the renewer drops its
/// completion without calling it.
struct PendingRenewal {
    coalescer: Option<Arc<RenewalCoalescer>>,
    session: Option<Arc<InMemoryAuthentication>>,
}

impl PendingRenewal {
    fn complete(mut self, result: Result<String, InteractionError>) {
        if let Some(coalescer) = self.coalescer.take() {
            coalescer.finish(result, self.session.as_deref());
        }
    }
}

impl Drop for PendingRenewal {
    fn drop(&mut self) {
        if let Some(coalescer) = self.coalescer.take() {
            tracing::warn!("token renewer dropped its completion without invoking it");
            coalescer.finish(Err(InteractionError::CompletionDropped), self.session.as_deref());
        }
    }
}
