//! Integration tests for a feature module wired against the host adapters.
//!
//! The module side sees only a `ComponentContext`; the host side is the
//! `HostDispatcher` over mock collaborators plus an `InMemoryAuthentication`.

use serde::Serialize;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use common_interactions::adapters::{
    HostDispatcher, InMemoryAnalyticsSink, InMemoryAuthentication, MockIdentityProvider,
    MockProfileNavigator, MockTokenRenewer,
};
use common_interactions::analytics_event;
use common_interactions::application::ComponentContext;
use common_interactions::config::SessionConfig;
use common_interactions::domain::actions::ComponentAction;
use common_interactions::domain::analytics::AnalyticsEvent;
use common_interactions::domain::foundation::InteractionError;
use common_interactions::domain::identity::{AmwayAboIdentity, NO_DATA};
use common_interactions::ports::CreatorsAction;

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgramStartEvent {
    identifier: String,
    program_type: String,
    is_preview: bool,
}

analytics_event!(ProgramStartEvent, name = "program.start");

struct Host {
    navigator: Arc<MockProfileNavigator>,
    sink: Arc<InMemoryAnalyticsSink>,
    renewer: Arc<MockTokenRenewer>,
    identity: Arc<MockIdentityProvider>,
    session: Arc<InMemoryAuthentication>,
    dispatcher: Arc<HostDispatcher>,
}

impl Host {
    fn new(renewer: MockTokenRenewer) -> Self {
        let navigator = Arc::new(MockProfileNavigator::new());
        let sink = Arc::new(InMemoryAnalyticsSink::with_capacity(100));
        let renewer = Arc::new(renewer);
        let identity = Arc::new(MockIdentityProvider::new());
        let session = Arc::new(InMemoryAuthentication::new());
        let dispatcher = Arc::new(
            HostDispatcher::new(
                navigator.clone(),
                sink.clone(),
                renewer.clone(),
                identity.clone(),
            )
            .with_session(session.clone()),
        );

        Self {
            navigator,
            sink,
            renewer,
            identity,
            session,
            dispatcher,
        }
    }

    fn context(&self) -> ComponentContext {
        ComponentContext::new(
            self.dispatcher.clone(),
            self.session.clone(),
            &SessionConfig::default(),
        )
        .with_completion_timeout(Duration::from_secs(2))
    }
}

fn program_start() -> ProgramStartEvent {
    ProgramStartEvent {
        identifier: "prog-42".to_string(),
        program_type: "5-day-program".to_string(),
        is_preview: false,
    }
}

// =============================================================================
// Analytics
// =============================================================================

#[test]
fn encoding_equivalent_events_is_deterministic() {
    assert_eq!(program_start().encode(), program_start().encode());
}

#[test]
fn tracked_event_reaches_host_sink() {
    let host = Host::new(MockTokenRenewer::returning("tok"));

    host.context().track(program_start());

    let records = host.sink.records_named("program.start");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].payload.get("programType"), Some(&json!("5-day-program")));
    assert_eq!(records[0].payload.get("isPreview"), Some(&json!(false)));
}

// =============================================================================
// Dispatch
// =============================================================================

#[test]
fn every_action_without_completion_dispatches_cleanly() {
    let host = Host::new(MockTokenRenewer::returning("tok"));
    let creators: Arc<dyn CreatorsAction> = host.dispatcher.clone();

    creators.action(ComponentAction::show_profile());
    creators.action(ComponentAction::analytics(program_start()));
    creators.action(ComponentAction::renew_token());
    creators.action(ComponentAction::abo_identity());

    assert_eq!(host.navigator.shown_count(), 1);
    assert_eq!(host.sink.record_count(), 1);
    assert_eq!(host.renewer.call_count(), 1);
}

#[tokio::test]
async fn show_profile_resolves() {
    let host = Host::new(MockTokenRenewer::returning("tok"));

    host.context().show_profile().await.unwrap();

    assert_eq!(host.navigator.shown_count(), 1);
}

#[tokio::test]
async fn abo_identity_round_trips_through_host() {
    let host = Host::new(MockTokenRenewer::returning("tok"));
    let stored = AmwayAboIdentity::from_json_str(
        r#"{"aboId":"A1","partyId":"P1","name":"Jane","registrationDate":"2021-01-01"}"#,
    )
    .unwrap();
    host.identity.set_identity(Some(stored));

    let identity = host.context().abo_identity().await.unwrap();

    assert_eq!(identity.abo_id(), "A1");
    assert_eq!(identity.abo_number(), NO_DATA);
}

#[tokio::test]
async fn abo_identity_failure_is_delivered_as_error() {
    let host = Host::new(MockTokenRenewer::returning("tok"));

    let result = host.context().abo_identity().await;

    assert!(matches!(result, Err(InteractionError::IdentityUnavailable(_))));
}

// =============================================================================
// Session
// =============================================================================

#[tokio::test]
async fn token_without_session_fails() {
    let host = Host::new(MockTokenRenewer::returning("tok"));

    assert_eq!(host.context().token().await, Err(InteractionError::NoToken));
}

#[tokio::test]
async fn token_after_sign_in_succeeds() {
    let host = Host::new(MockTokenRenewer::returning("tok"));
    host.session.set_token("tok-1");

    assert_eq!(host.context().token().await, Ok("tok-1".to_string()));
}

#[tokio::test]
async fn concurrent_renewals_share_one_host_renewal() {
    let host = Host::new(MockTokenRenewer::deferred());
    let ctx = host.context();

    let (first, second, ()) = futures::join!(ctx.renew_token(), ctx.renew_token(), async {
        tokio::task::yield_now().await;
        host.renewer.complete_pending(Ok("tok-2".to_string()));
    });

    assert_eq!(first, Ok("tok-2".to_string()));
    assert_eq!(second, Ok("tok-2".to_string()));
    assert_eq!(host.renewer.call_count(), 1);
}

#[tokio::test]
async fn failed_renewal_is_delivered_to_caller() {
    let host = Host::new(MockTokenRenewer::failing(InteractionError::renewal_failed(
        "refresh token revoked",
    )));

    let result = host.context().renew_token().await;

    assert_eq!(result, Err(InteractionError::renewal_failed("refresh token revoked")));
    assert!(result.unwrap_err().requires_reauthentication());
}

#[tokio::test]
async fn forced_renewal_is_visible_to_token_and_renewal_handler() {
    let host = Host::new(MockTokenRenewer::returning("tok-2"));
    host.session.set_token("tok-1");
    let ctx = host.context();
    let notified = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&notified);
    ctx.on_renewal(move |result| seen.lock().unwrap().push(result));

    assert_eq!(ctx.renew_token().await, Ok("tok-2".to_string()));

    assert_eq!(ctx.token().await, Ok("tok-2".to_string()));
    assert_eq!(*notified.lock().unwrap(), vec![Ok("tok-2".to_string())]);
}

#[tokio::test]
async fn failed_forced_renewal_leaves_token_in_place() {
    let host = Host::new(MockTokenRenewer::failing(InteractionError::renewal_failed(
        "offline",
    )));
    host.session.set_token("tok-1");
    let ctx = host.context();

    assert!(ctx.renew_token().await.is_err());

    assert_eq!(ctx.token().await, Ok("tok-1".to_string()));
}

#[test]
fn only_latest_renewal_registration_is_notified() {
    let host = Host::new(MockTokenRenewer::returning("tok"));
    let ctx = host.context();
    let first = Arc::new(AtomicUsize::new(0));
    let second = Arc::new(Mutex::new(Vec::new()));

    let counter = Arc::clone(&first);
    ctx.on_renewal(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let seen = Arc::clone(&second);
    ctx.on_renewal(move |result| seen.lock().unwrap().push(result));

    host.session.apply_renewal(Ok("tok-9".to_string()));

    assert_eq!(first.load(Ordering::SeqCst), 0);
    assert_eq!(*second.lock().unwrap(), vec![Ok("tok-9".to_string())]);
}

#[tokio::test]
async fn logout_notifies_module_and_ends_session() {
    let host = Host::new(MockTokenRenewer::returning("tok"));
    host.session.set_token("tok-1");
    let ctx = host.context();
    let cleaned = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cleaned);

    ctx.on_logout(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    host.session.end_session();

    assert_eq!(cleaned.load(Ordering::SeqCst), 1);
    assert_eq!(ctx.token().await, Err(InteractionError::NoToken));
}

// =============================================================================
// Identity decoding
// =============================================================================

#[test]
fn identity_decoding_is_lenient_per_field_and_strict_on_shape() {
    let identity = AmwayAboIdentity::from_value(json!({
        "aboId": "A1",
        "partyId": "P1",
        "name": "Jane",
        "registrationDate": "2021-01-01"
    }))
    .unwrap();
    assert_eq!(identity.abo_number(), NO_DATA);
    assert_eq!(identity.registration_date(), "2021-01-01");

    assert!(AmwayAboIdentity::from_value(json!("A1")).is_err());
}
