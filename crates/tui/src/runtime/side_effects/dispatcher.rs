//! Side effect dispatcher.
//!
//! Routes actions to their handler functions. Actions without side effects
//! return immediately.

use std::time::Instant;

use tokio::sync::mpsc::Sender;
use tours_client::TourSource;
use tracing::{Instrument, info_span};

use crate::action::Action;
use crate::runtime::side_effects::{SharedSource, TaskTracker, tours};

/// Handle side effects (async API calls) for actions.
///
/// Returns as soon as any background work has been spawned; results are
/// delivered later through `tx`.
///
/// # Arguments
///
/// * `action` - The action to handle
/// * `source` - The shared tour source
/// * `tx` - The action channel sender for sending results
/// * `task_tracker` - Tracker owning the spawned tasks
pub async fn handle_side_effects<S>(
    action: Action,
    source: SharedSource<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) where
    S: TourSource + 'static,
{
    let start = Instant::now();
    let span = info_span!(
        "tui.handle_action",
        action_type = action.type_name(),
        duration_ms = tracing::field::Empty,
    );

    async move {
        if let Action::LoadTours = action {
            tours::handle_load_tours(source, tx, task_tracker).await;
        }

        let duration = start.elapsed().as_millis() as i64;
        tracing::Span::current().record("duration_ms", duration);
    }
    .instrument(span)
    .await;
}
