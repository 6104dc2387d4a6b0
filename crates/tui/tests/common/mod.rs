//! Common test utilities for TUI side effects tests.
//!
//! This module provides a harness for driving the tours side effect handler
//! against either a wiremock-backed `ToursClient` or an in-memory
//! `FakeSource`, plus helpers for rendering the app into a `TestBackend`.
//!
//! # Invariants
//! - Fixtures are loaded from the client's fixtures directory
//! - All mock servers use random available ports to avoid conflicts
//! - Each test gets its own isolated source and action channel
//!
//! # What this does NOT handle
//! - Actual HTTP requests to real endpoints
//! - Terminal management

// Allow dead code since not all tests use all utilities
#![allow(dead_code)]

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::{Terminal, backend::TestBackend};
use tokio::sync::{Notify, mpsc};

pub use tokio::sync::mpsc::{Receiver, Sender};
pub use tours_client::testing::load_fixture;
pub use tours_client::{ClientError, Tour, TourSource, ToursClient};
pub use tours_config::Theme;
pub use tours_tui::action::Action;
pub use tours_tui::app::App;
pub use tours_tui::runtime::side_effects::{SharedSource, TaskTracker, handle_side_effects};
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Path the mocked tours endpoint is served under.
pub const TOURS_PATH: &str = "/react-tours-project";

/// Test harness for side effects testing.
///
/// Provides an action channel, a task tracker and a shared source for
/// testing the side effect handler in isolation.
pub struct SideEffectsTestHarness<S> {
    /// Receiver for actions sent by the side effect handlers
    pub action_rx: Receiver<Action>,
    /// Sender for actions (clone this to pass to handlers)
    pub action_tx: Sender<Action>,
    /// Source the handler retrieves from
    pub source: SharedSource<S>,
    /// Tracker owning spawned tasks
    pub task_tracker: TaskTracker,
}

impl<S: TourSource + 'static> SideEffectsTestHarness<S> {
    /// Create a harness around an existing source.
    pub fn with_source(source: S) -> Self {
        let (action_tx, action_rx) = mpsc::channel::<Action>(100);
        Self {
            action_rx,
            action_tx,
            source: Arc::new(source),
            task_tracker: TaskTracker::new(),
        }
    }

    /// Dispatch an action without waiting for its results.
    ///
    /// Panics if `handle_side_effects` does not return promptly, which would
    /// mean it is blocking on network I/O instead of spawning tasks.
    pub async fn dispatch(&self, action: Action) {
        let handle_future = handle_side_effects(
            action,
            self.source.clone(),
            self.action_tx.clone(),
            self.task_tracker.clone(),
        );
        if tokio::time::timeout(tokio::time::Duration::from_millis(100), handle_future)
            .await
            .is_err()
        {
            panic!(
                "handle_side_effects timed out - it may be blocking on network I/O instead of spawning tasks"
            );
        }
    }

    /// Handle an action and collect all resulting actions.
    ///
    /// # Arguments
    /// * `action` - The action to handle
    /// * `timeout_secs` - Maximum time to wait for actions (in seconds)
    ///
    /// # Returns
    /// A vector of all actions sent by the handler (in order received)
    pub async fn handle_and_collect(&mut self, action: Action, timeout_secs: u64) -> Vec<Action> {
        self.dispatch(action).await;

        // Give spawned tasks a chance to start without real-time delay
        tokio::task::yield_now().await;

        let mut actions = Vec::new();
        let deadline = tokio::time::Instant::now() + tokio::time::Duration::from_secs(timeout_secs);

        while tokio::time::Instant::now() < deadline {
            match tokio::time::timeout(
                tokio::time::Duration::from_millis(100),
                self.action_rx.recv(),
            )
            .await
            {
                Ok(Some(action)) => actions.push(action),
                Ok(None) => break,
                Err(_) => {
                    let _ = self.task_tracker.close();
                    if self.task_tracker.is_empty() {
                        break;
                    }
                    tokio::task::yield_now().await;
                }
            }
        }

        actions
    }

    /// Expect a specific action within a timeout.
    pub async fn expect_action(&mut self, timeout_ms: u64) -> Action {
        tokio::time::timeout(
            tokio::time::Duration::from_millis(timeout_ms),
            self.action_rx.recv(),
        )
        .await
        .expect("Timeout waiting for action")
        .expect("Channel closed while waiting for action")
    }
}

impl SideEffectsTestHarness<ToursClient> {
    /// Create a harness whose client points at `server`.
    pub fn for_server(server: &MockServer) -> Self {
        Self::with_source(create_test_client(server))
    }
}

/// Full endpoint URL on the given mock server.
pub fn tours_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), TOURS_PATH)
}

/// Create a test tours client pointing to the mock server.
pub fn create_test_client(server: &MockServer) -> ToursClient {
    ToursClient::builder()
        .tours_url(tours_url(server))
        .timeout(Some(std::time::Duration::from_secs(5)))
        .build()
        .expect("Failed to build test client")
}

/// The two tours in `tours/list_tours.json`.
pub fn fixture_tours() -> Vec<Tour> {
    serde_json::from_value(load_fixture("tours/list_tours.json")).expect("Invalid tours fixture")
}

/// Scripted outcome of a [`FakeSource`] retrieval.
#[derive(Clone)]
pub enum FakeBehavior {
    /// Return these tours.
    Tours(Vec<Tour>),
    /// Fail with an API error carrying this status.
    Fail(u16),
    /// Panic inside the retrieval.
    Panic,
    /// Wait for the gate to open, then return these tours.
    Gated(Arc<Notify>, Vec<Tour>),
}

/// In-memory tour source that counts retrievals.
pub struct FakeSource {
    behavior: FakeBehavior,
    calls: Arc<AtomicUsize>,
}

impl FakeSource {
    pub fn new(behavior: FakeBehavior) -> Self {
        Self {
            behavior,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Shared retrieval counter, readable after the source is moved.
    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

impl TourSource for FakeSource {
    fn list_tours(&self) -> impl Future<Output = tours_client::Result<Vec<Tour>>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let behavior = self.behavior.clone();
        async move {
            match behavior {
                FakeBehavior::Tours(tours) => Ok(tours),
                FakeBehavior::Fail(status) => Err(ClientError::ApiError {
                    status,
                    url: "fake://tours".to_string(),
                    message: "scripted failure".to_string(),
                }),
                FakeBehavior::Panic => panic!("scripted retrieval panic"),
                FakeBehavior::Gated(gate, tours) => {
                    gate.notified().await;
                    Ok(tours)
                }
            }
        }
    }
}

/// App rendered into an in-memory terminal.
pub struct TuiHarness {
    pub app: App,
    pub terminal: Terminal<TestBackend>,
}

impl TuiHarness {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            app: App::new(Theme::default(), "http://127.0.0.1/react-tours-project"),
            terminal: Terminal::new(TestBackend::new(width, height))
                .expect("Failed to create test terminal"),
        }
    }

    /// Render one frame and return the screen as newline-separated rows.
    pub fn render(&mut self) -> String {
        let app = &mut self.app;
        self.terminal
            .draw(|f| app.render(f))
            .expect("Failed to draw frame");
        let buffer = self.terminal.backend().buffer();
        let area = buffer.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Count non-overlapping occurrences of `needle` in `haystack`.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

/// Screen text with box borders and padding stripped from each row, rows
/// joined by single spaces. Text wrapped across rows of one card reads back
/// as a single run.
pub fn unframed_text(screen: &str) -> String {
    screen
        .lines()
        .map(|row| row.trim_matches(|c: char| c == '│' || c.is_whitespace()))
        .filter(|row| !row.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
