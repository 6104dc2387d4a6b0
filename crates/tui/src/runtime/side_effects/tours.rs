//! Tours side effect handler.
//!
//! Does NOT handle:
//! - Loading state (the fetch state enters loading before the action is
//!   dispatched and leaves it when the result action is applied).

use tokio::sync::mpsc::Sender;
use tours_client::TourSource;

use super::{SharedSource, TaskTracker};
use crate::action::Action;

/// Retrieve the tour list once and report the outcome as `ToursLoaded`.
///
/// The retrieval runs in its own task so that a panic inside it surfaces
/// as a `JoinError` here and is reported as a failure.
pub async fn handle_load_tours<S>(
    source: SharedSource<S>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) where
    S: TourSource + 'static,
{
    task_tracker.spawn(async move {
        let fetch = tokio::spawn(async move { source.list_tours().await });

        let result = match fetch.await {
            Ok(Ok(tours)) => {
                tracing::info!(count = tours.len(), "Tours retrieved");
                Ok(tours)
            }
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Tours retrieval failed");
                Err(e.to_string())
            }
            Err(join_err) => {
                tracing::error!(error = %join_err, "Tours retrieval task aborted");
                Err(format!("tours retrieval task aborted: {join_err}"))
            }
        };

        if tx.send(Action::ToursLoaded(result)).await.is_err() {
            tracing::debug!("Action channel closed; dropping tours result");
        }
    });
}
