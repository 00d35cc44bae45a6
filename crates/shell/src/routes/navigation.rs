//! Navigation handler: build and prune the sidebar tree for the session user.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::NavItem;
use meridian_core::access::{self, UserClass};
use meridian_core::navigation;

use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::middleware::auth::set_current_user;
use crate::models::CurrentUser;
use crate::state::AppState;

/// Query parameters for the navigation endpoint.
#[derive(Debug, Deserialize)]
pub struct NavigationQuery {
    /// When set, re-fetch the profile from the upstream before building the
    /// tree (the manual "Refresh" control).
    #[serde(default)]
    pub refresh: bool,
}

/// Navigation response: the pruned tree plus the classification it was
/// derived from.
#[derive(Debug, Serialize)]
pub struct NavigationResponse {
    pub class: UserClass,
    pub items: Vec<NavItem>,
}

/// Serve the pruned navigation tree for the session user.
///
/// The tree is rebuilt on every request from the session profile; with
/// `?refresh=true` the profile itself is re-fetched upstream first and the
/// session updated, so revoked grants take effect without re-login.
#[instrument(skip(state, session, user, query))]
pub async fn navigation(
    State(state): State<AppState>,
    session: Session,
    RequireUser(user): RequireUser,
    Query(query): Query<NavigationQuery>,
) -> Result<Json<NavigationResponse>, AppError> {
    let profile = if query.refresh {
        let fresh = state.erp().current_user(&user.token).await?;
        let updated = CurrentUser {
            profile: fresh.clone(),
            token: user.token,
        };
        set_current_user(&session, &updated)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;
        fresh
    } else {
        user.profile
    };

    let items = navigation::navigation_for(Some(&profile));
    Ok(Json(NavigationResponse {
        class: access::classify(&profile),
        items,
    }))
}
