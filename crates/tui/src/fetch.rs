//! Remote-data fetch state for a single screen.
//!
//! Responsibilities:
//! - Track the `loading` / `data` / `error` triple for one remote collection.
//! - Guarantee that a screen triggers its retrieval at most once per activation.
//! - Reduce the triple to exactly one renderable [`FetchView`].
//!
//! Does NOT handle:
//! - Performing the retrieval (see `runtime::side_effects`).
//! - Rendering (see `ui::screens`).
//!
//! Invariants:
//! - `loading` is true from `begin()` until the matching `resolve()`.
//! - `resolve()` always clears `loading`, whatever the outcome.
//! - A failed retrieval keeps the previously held data and stores a fixed,
//!   human-readable message; transport detail only goes to the log.
//! - The view precedence is Loading, then Failed, then Ready.

use std::fmt::Display;

/// What a screen should show for its remote collection right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchView<'a, T> {
    /// A retrieval is in flight.
    Loading,
    /// The last retrieval failed; carries the message to display.
    Failed(&'a str),
    /// The collection is available (possibly empty).
    Ready(&'a [T]),
}

/// Controller state for one remote collection.
#[derive(Debug, Clone)]
pub struct FetchState<T> {
    loading: bool,
    data: Vec<T>,
    error: Option<String>,
    activated: bool,
    failure_message: &'static str,
}

impl<T> FetchState<T> {
    /// Create an idle controller. `failure_message` is what the screen shows
    /// when a retrieval fails.
    pub fn new(failure_message: &'static str) -> Self {
        Self {
            loading: false,
            data: Vec::new(),
            error: None,
            activated: false,
            failure_message,
        }
    }

    /// Mark the owning screen as activated.
    ///
    /// Returns `true` only on the first call, in which case the controller
    /// has already entered the loading state and the caller must issue the
    /// retrieval. Later calls are no-ops returning `false`.
    pub fn activate(&mut self) -> bool {
        if self.activated {
            return false;
        }
        self.activated = true;
        self.begin();
        true
    }

    /// Enter the loading state ahead of a retrieval.
    ///
    /// A stale error from an earlier attempt is cleared so it cannot outrank
    /// the result of the new one.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply the outcome of a retrieval.
    ///
    /// Success replaces the held data wholesale. Failure keeps the held data
    /// and records the fixed failure message.
    pub fn resolve<E: Display>(&mut self, result: Result<Vec<T>, E>) {
        match result {
            Ok(items) => {
                tracing::debug!(count = items.len(), "Fetch resolved");
                self.data = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Fetch failed");
                self.error = Some(self.failure_message.to_string());
            }
        }
        self.loading = false;
    }

    /// Reduce the current state to what should be rendered.
    pub fn view(&self) -> FetchView<'_, T> {
        if self.loading {
            FetchView::Loading
        } else if let Some(message) = self.error.as_deref() {
            FetchView::Failed(message)
        } else {
            FetchView::Ready(&self.data)
        }
    }

    /// Whether a request is in flight.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Data from the last successful retrieval; kept across failures.
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// The display message of the last failure, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether `activate` has already requested data.
    pub fn is_activated(&self) -> bool {
        self.activated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAILED: &str = "error fetching items";

    #[test]
    fn test_new_state_is_idle_and_ready_empty() {
        let state: FetchState<u32> = FetchState::new(FAILED);
        assert!(!state.loading());
        assert!(state.data().is_empty());
        assert_eq!(state.error(), None);
        assert!(!state.is_activated());
        assert_eq!(state.view(), FetchView::Ready(&[]));
    }

    #[test]
    fn test_activate_only_first_call_requests_retrieval() {
        let mut state: FetchState<u32> = FetchState::new(FAILED);
        assert!(state.activate());
        assert!(state.loading());
        assert!(!state.activate());
        assert!(!state.activate());
        assert!(state.is_activated());
    }

    #[test]
    fn test_resolve_success_replaces_data_and_clears_loading() {
        let mut state = FetchState::new(FAILED);
        state.activate();
        state.resolve::<String>(Ok(vec![1, 2]));
        assert!(!state.loading());
        assert_eq!(state.data(), &[1, 2]);
        assert_eq!(state.view(), FetchView::Ready(&[1, 2]));

        state.begin();
        state.resolve::<String>(Ok(vec![3]));
        assert_eq!(state.data(), &[3]);
    }

    #[test]
    fn test_resolve_failure_sets_fixed_message_and_keeps_data() {
        let mut state = FetchState::new(FAILED);
        state.activate();
        state.resolve::<String>(Ok(vec![7]));

        state.begin();
        state.resolve(Err("connection refused (os error 111)"));
        assert!(!state.loading());
        assert_eq!(state.error(), Some(FAILED));
        assert_eq!(state.data(), &[7]);
        assert_eq!(state.view(), FetchView::Failed(FAILED));
    }

    #[test]
    fn test_loading_outranks_error() {
        let mut state: FetchState<u32> = FetchState::new(FAILED);
        state.activate();
        state.resolve(Err("boom"));
        state.begin();
        assert_eq!(state.view(), FetchView::Loading);
    }

    #[test]
    fn test_begin_clears_stale_error() {
        let mut state: FetchState<u32> = FetchState::new(FAILED);
        state.activate();
        state.resolve(Err("boom"));
        state.begin();
        assert_eq!(state.error(), None);
        state.resolve::<String>(Ok(vec![]));
        assert_eq!(state.view(), FetchView::Ready(&[]));
    }

    #[test]
    fn test_empty_success_is_ready_not_failed() {
        let mut state: FetchState<u32> = FetchState::new(FAILED);
        state.activate();
        state.resolve::<String>(Ok(Vec::new()));
        assert_eq!(state.view(), FetchView::Ready(&[]));
    }
}
