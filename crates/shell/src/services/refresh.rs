//! Background refresh of workflow notification summaries.
//!
//! Viewed instances are re-aggregated on a fixed interval (default five
//! minutes) so the cache and event bus stay warm between manual refreshes.
//! The task is tied to a guard: dropping the guard aborts the task, so the
//! refresher can never outlive the state that owns it.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::instrument;

use meridian_core::WorkflowInstanceId;
use meridian_core::notifications::{DEFAULT_RECENT_LIMIT, NotificationSummary, summarize};

use crate::error::AppError;
use crate::state::AppState;
use crate::store::ShellEvent;

/// Fetch, aggregate, cache, and announce one instance's summary.
///
/// Shared by the HTTP handlers (manual refresh) and the background task.
///
/// # Errors
///
/// Propagates the upstream error taxonomy; nothing is cached on failure,
/// so the next attempt retries.
pub async fn refresh_summary(
    state: &AppState,
    token: &str,
    id: WorkflowInstanceId,
) -> Result<NotificationSummary, AppError> {
    let records = state.erp().notification_records(token, id).await?;
    let summary = summarize(&records, DEFAULT_RECENT_LIMIT);

    state.summaries().insert(id, summary.clone()).await;
    state
        .events()
        .publish(ShellEvent::NotificationStatusRefreshed {
            instance: id,
            summary: summary.clone(),
        });

    Ok(summary)
}

/// Guard for the background refresh task.
///
/// Dropping the guard aborts the task.
#[derive(Debug)]
pub struct RefreshGuard {
    handle: JoinHandle<()>,
}

impl RefreshGuard {
    /// Stop the task explicitly (equivalent to dropping the guard).
    pub fn shutdown(self) {
        self.handle.abort();
    }
}

impl Drop for RefreshGuard {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Spawn the periodic refresh task.
#[must_use]
pub fn spawn_refresh(state: AppState, interval: Duration) -> RefreshGuard {
    let handle = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // The first tick fires immediately; skip it so a freshly started
        // shell does not hammer the upstream before anyone logged in.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            refresh_watched(&state).await;
        }
    });

    RefreshGuard { handle }
}

/// Refresh every watched instance once.
#[instrument(skip(state))]
async fn refresh_watched(state: &AppState) {
    let watched = state.watched_instances();
    if watched.is_empty() {
        return;
    }
    tracing::debug!(count = watched.len(), "refreshing watched workflows");

    for (id, token) in watched {
        match refresh_summary(state, &token, id).await {
            Ok(_) => {}
            Err(AppError::Upstream(err)) if err.is_auth_failure() => {
                // The viewer's token expired; stop refreshing on their behalf.
                tracing::debug!(instance = %id, "dropping watch after auth failure");
                state.unwatch_instance(id);
            }
            Err(err) => {
                // Transient upstream trouble; keep the watch and retry on
                // the next tick.
                tracing::warn!(instance = %id, error = %err, "background refresh failed");
            }
        }
    }
}
