//! Workflow status handlers: instance passthrough and notification
//! aggregation with manual refresh.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use meridian_core::notifications::{DEFAULT_RECENT_LIMIT, NotificationSummary, summarize};
use meridian_core::{WorkflowInstance, WorkflowInstanceId};

use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::services::refresh::refresh_summary;
use crate::state::AppState;

/// Query parameters for the notification-status endpoint.
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    /// When set, bypass the cache and re-fetch from the upstream (the
    /// manual "Refresh" control).
    #[serde(default)]
    pub refresh: bool,
}

/// Combined instance + notification view.
#[derive(Debug, Serialize)]
pub struct WorkflowOverview {
    pub instance: WorkflowInstance,
    pub notifications: NotificationSummary,
}

/// Fetch one workflow instance.
#[instrument(skip(state, user))]
pub async fn instance(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i32>,
) -> Result<Json<WorkflowInstance>, AppError> {
    let instance = state
        .erp()
        .workflow_instance(&user.token, WorkflowInstanceId::new(id))
        .await?;
    Ok(Json(instance))
}

/// Serve the aggregated notification summary for a workflow instance.
///
/// Summaries are cached briefly; `?refresh=true` always goes upstream.
/// Failed fetches are never cached - the next request retries.
#[instrument(skip(state, user, query))]
pub async fn notification_status(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i32>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<NotificationSummary>, AppError> {
    let id = WorkflowInstanceId::new(id);
    state.watch_instance(id, &user.token);

    if !query.refresh {
        if let Some(cached) = state.summaries().get(&id).await {
            return Ok(Json(cached));
        }
    }

    let summary = refresh_summary(&state, &user.token, id).await?;
    Ok(Json(summary))
}

/// Fetch instance and notification records concurrently and serve the
/// combined view.
#[instrument(skip(state, user))]
pub async fn overview(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(id): Path<i32>,
) -> Result<Json<WorkflowOverview>, AppError> {
    let id = WorkflowInstanceId::new(id);
    state.watch_instance(id, &user.token);

    // Independent fetches, issued together and merged once both are in.
    let (instance, records) = tokio::join!(
        state.erp().workflow_instance(&user.token, id),
        state.erp().notification_records(&user.token, id),
    );

    let instance = instance?;
    let summary = summarize(&records?, DEFAULT_RECENT_LIMIT);
    state.summaries().insert(id, summary.clone()).await;

    Ok(Json(WorkflowOverview {
        instance,
        notifications: summary,
    }))
}
