//! Terminal input task.
//!
//! Responsibilities:
//! - Translate terminal events into actions for the UI loop.
//! - Stop as soon as shutdown is requested, without waiting for another event.
//!
//! Does NOT handle:
//! - Key bindings (see `App::handle_input` and `App::handle_mouse`).
//!
//! Invariants:
//! - Mouse events are dropped when the action channel is full.
//! - Key releases and repeats never reach the UI loop.

use std::io;

use crossterm::event::{Event, KeyEventKind};
use futures_util::{Stream, StreamExt};
use tokio::sync::mpsc::{Sender, error::TrySendError};
use tokio_util::sync::CancellationToken;

use super::side_effects::TaskTracker;
use crate::action::Action;

fn event_to_action(event: Event) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(Action::Input(key)),
        Event::Mouse(mouse) => Some(Action::Mouse(mouse)),
        Event::Resize(width, height) => Some(Action::Resize(width, height)),
        _ => None,
    }
}

/// Spawn the task forwarding `events` to `tx` until the stream ends, the
/// channel closes or `shutdown` is cancelled.
pub fn spawn_input_task<St>(
    events: St,
    tx: Sender<Action>,
    task_tracker: &TaskTracker,
    shutdown: CancellationToken,
) where
    St: Stream<Item = io::Result<Event>> + Send + 'static,
{
    task_tracker.spawn(async move {
        let mut events = std::pin::pin!(events);
        loop {
            let next = tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                next = events.next() => next,
            };
            let event = match next {
                Some(Ok(event)) => event,
                Some(Err(e)) => {
                    tracing::error!(error = %e, "Failed to read terminal event");
                    break;
                }
                None => break,
            };
            let Some(action) = event_to_action(event) else {
                continue;
            };

            if let Action::Mouse(_) = action {
                match tx.try_send(action) {
                    Ok(()) | Err(TrySendError::Full(_)) => continue,
                    Err(TrySendError::Closed(_)) => break,
                }
            }

            tokio::select! {
                biased;
                () = shutdown.cancelled() => break,
                sent = tx.send(action) => {
                    if sent.is_err() {
                        break;
                    }
                }
            }
        }
        tracing::debug!("Input task stopped");
    });
}
