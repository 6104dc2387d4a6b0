//! Tests for the tours side effect handler.
//!
//! Responsibilities:
//! - Verify `LoadTours` yields exactly one `ToursLoaded` per dispatch.
//! - Verify success, HTTP failure, transport failure and panic outcomes.
//!
//! Does NOT handle:
//! - Rendering (see `app_tours_tests.rs`).

mod common;

use std::sync::atomic::Ordering;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_load_tours_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOURS_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("tours/list_tours.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut harness = SideEffectsTestHarness::for_server(&server);
    let actions = harness.handle_and_collect(Action::LoadTours, 2).await;

    assert_eq!(actions.len(), 1, "expected exactly one result action");
    match &actions[0] {
        Action::ToursLoaded(Ok(tours)) => {
            assert_eq!(tours.len(), 2);
            assert_eq!(tours[0].name, "Best of Paris in 7 Days Tour");
            assert_eq!(tours[0].price, "1,995");
            assert_eq!(tours[1].name, "Best of Rome in 7 Days Tour");
        }
        other => panic!("Expected ToursLoaded(Ok), got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_tours_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOURS_PATH))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(load_fixture("tours/error_500.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let mut harness = SideEffectsTestHarness::for_server(&server);
    let actions = harness.handle_and_collect(Action::LoadTours, 2).await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::ToursLoaded(Err(detail)) => assert!(detail.contains("500")),
        other => panic!("Expected ToursLoaded(Err), got {other:?}"),
    }
}

#[tokio::test]
async fn test_load_tours_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOURS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let mut harness = SideEffectsTestHarness::for_server(&server);
    let actions = harness.handle_and_collect(Action::LoadTours, 2).await;

    assert!(matches!(actions.as_slice(), [Action::ToursLoaded(Err(_))]));
}

#[tokio::test]
async fn test_load_tours_connection_refused() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ToursClient::builder()
        .tours_url(format!("http://{addr}{TOURS_PATH}"))
        .build()
        .unwrap();
    let mut harness = SideEffectsTestHarness::with_source(client);
    let actions = harness.handle_and_collect(Action::LoadTours, 5).await;

    assert!(matches!(actions.as_slice(), [Action::ToursLoaded(Err(_))]));
}

#[tokio::test]
async fn test_load_tours_panic_is_reported_as_failure() {
    let mut harness = SideEffectsTestHarness::with_source(FakeSource::new(FakeBehavior::Panic));
    let actions = harness.handle_and_collect(Action::LoadTours, 2).await;

    assert_eq!(actions.len(), 1);
    match &actions[0] {
        Action::ToursLoaded(Err(detail)) => assert!(detail.contains("aborted")),
        other => panic!("Expected ToursLoaded(Err), got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_load_actions_have_no_side_effects() {
    let source = FakeSource::new(FakeBehavior::Tours(fixture_tours()));
    let calls = source.calls();
    let mut harness = SideEffectsTestHarness::with_source(source);

    for action in [
        Action::Tick,
        Action::ScrollDown,
        Action::ScrollUp,
        Action::Resize(80, 24),
        Action::ToursLoaded(Ok(Vec::new())),
    ] {
        let actions = harness.handle_and_collect(action, 1).await;
        assert!(actions.is_empty());
    }
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_result_after_receiver_dropped_is_discarded() {
    let gate = std::sync::Arc::new(tokio::sync::Notify::new());
    let source = FakeSource::new(FakeBehavior::Gated(gate.clone(), fixture_tours()));
    let harness = SideEffectsTestHarness::with_source(source);

    harness.dispatch(Action::LoadTours).await;
    let SideEffectsTestHarness {
        action_rx,
        action_tx,
        task_tracker,
        ..
    } = harness;
    drop(action_rx);
    drop(action_tx);

    gate.notify_one();
    let _ = task_tracker.close();
    tokio::time::timeout(std::time::Duration::from_secs(2), task_tracker.wait())
        .await
        .expect("retrieval task should finish after the receiver is gone");
}
