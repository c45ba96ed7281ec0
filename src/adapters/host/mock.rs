//! Mock host collaborators for testing.
//!
//! Each mock completes immediately by default. `deferred()` variants hold
//! completions until the test releases them, which is how concurrent and
//! out-of-order completion is exercised.
//!
//! # Example
//!
//! ```
//! use common_interactions::adapters::MockTokenRenewer;
//! use common_interactions::ports::TokenRenewer;
//!
//! let renewer = MockTokenRenewer::deferred();
//! renewer.renew(Box::new(|result| assert_eq!(result.unwrap(), "tok-2")));
//!
//! assert_eq!(renewer.pending_count(), 1);
//! renewer.complete_pending(Ok("tok-2".to_string()));
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError, RwLock};

use crate::domain::actions::{AboIdentityCompletion, ActionCompletion, RenewTokenCompletion};
use crate::domain::foundation::InteractionError;
use crate::domain::identity::AmwayAboIdentity;
use crate::ports::{IdentityProvider, ProfileNavigator, TokenRenewer};

/// Mock navigator that counts profile presentations.
#[derive(Default)]
pub struct MockProfileNavigator {
    shown: AtomicUsize,
    defer: bool,
    pending: Mutex<Vec<ActionCompletion>>,
}

impl MockProfileNavigator {
    /// Creates a navigator that completes immediately.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a navigator that holds completions until `complete_pending`.
    pub fn deferred() -> Self {
        Self {
            defer: true,
            ..Self::default()
        }
    }

    /// Number of times the profile was requested.
    pub fn shown_count(&self) -> usize {
        self.shown.load(Ordering::SeqCst)
    }

    /// Number of held completions.
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Invokes every held completion.
    pub fn complete_pending(&self) {
        let pending: Vec<_> = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for completion in pending {
            completion();
        }
    }
}

impl ProfileNavigator for MockProfileNavigator {
    fn show_profile(&self, completion: Option<ActionCompletion>) {
        self.shown.fetch_add(1, Ordering::SeqCst);

        let Some(completion) = completion else {
            return;
        };
        if self.defer {
            self.pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(completion);
        } else {
            completion();
        }
    }
}

/// Mock renewer returning a configured outcome.
pub struct MockTokenRenewer {
    outcome: RwLock<Result<String, InteractionError>>,
    calls: AtomicUsize,
    defer: bool,
    pending: Mutex<Vec<RenewTokenCompletion>>,
}

impl MockTokenRenewer {
    /// Creates a renewer that immediately succeeds with `token`.
    pub fn returning(token: impl Into<String>) -> Self {
        Self {
            outcome: RwLock::new(Ok(token.into())),
            calls: AtomicUsize::new(0),
            defer: false,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Creates a renewer that immediately fails with `error`.
    pub fn failing(error: InteractionError) -> Self {
        let renewer = Self::returning("");
        renewer.set_outcome(Err(error));
        renewer
    }

    /// Creates a renewer that holds completions until `complete_pending`.
    pub fn deferred() -> Self {
        Self {
            defer: true,
            ..Self::returning("")
        }
    }

    /// Changes the outcome of subsequent immediate renewals.
    pub fn set_outcome(&self, outcome: Result<String, InteractionError>) {
        *self.outcome.write().unwrap_or_else(PoisonError::into_inner) = outcome;
    }

    /// Number of renewals the mock was asked to perform.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of held completions.
    pub fn pending_count(&self) -> usize {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Invokes every held completion with `outcome`.
    pub fn complete_pending(&self, outcome: Result<String, InteractionError>) {
        let pending: Vec<_> = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect();
        for completion in pending {
            completion(outcome.clone());
        }
    }

    /// Drops every held completion without invoking it.
    pub fn abandon_pending(&self) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl TokenRenewer for MockTokenRenewer {
    fn renew(&self, completion: RenewTokenCompletion) {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.defer {
            self.pending
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(completion);
            return;
        }

        let outcome = self
            .outcome
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        completion(outcome);
    }
}

/// Mock identity source.
///
/// Returns `IdentityUnavailable` when no identity is set.
#[derive(Default)]
pub struct MockIdentityProvider {
    identity: RwLock<Option<AmwayAboIdentity>>,
    force_error: RwLock<Option<InteractionError>>,
}

impl MockIdentityProvider {
    /// Creates a provider with nobody signed in.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity the provider returns.
    pub fn with_identity(self, identity: AmwayAboIdentity) -> Self {
        self.set_identity(Some(identity));
        self
    }

    /// Forces all lookups to return the specified error.
    pub fn with_error(self, error: InteractionError) -> Self {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = Some(error);
        self
    }

    /// Replaces the identity at runtime.
    pub fn set_identity(&self, identity: Option<AmwayAboIdentity>) {
        *self.identity.write().unwrap_or_else(PoisonError::into_inner) = identity;
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn identity(&self, completion: AboIdentityCompletion) {
        if let Some(error) = self
            .force_error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
        {
            completion(Err(error));
            return;
        }

        let identity = self
            .identity
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        completion(identity.ok_or_else(|| InteractionError::identity_unavailable("no ABO signed in")));
    }
}
