//! Authentication handlers: upstream credential exchange and session setup.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;
use tracing::instrument;

use meridian_core::UserProfile;
use meridian_core::access::{self, UserClass};

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::auth::{clear_current_user, set_current_user};
use crate::middleware::{OptionalUser, RequireUser};
use crate::models::CurrentUser;
use crate::state::AppState;
use crate::store::ShellEvent;

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The session user as served to clients.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// The classification every access decision is derived from.
    pub class: UserClass,
}

impl From<&UserProfile> for MeResponse {
    fn from(profile: &UserProfile) -> Self {
        Self {
            profile: profile.clone(),
            class: access::classify(profile),
        }
    }
}

/// Log in by proxying the credential exchange upstream.
///
/// On success the profile and the upstream token are stored in the
/// session; the token never reaches the client.
#[instrument(skip(state, session, request))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<Json<MeResponse>, AppError> {
    let token = state
        .erp()
        .login(&request.username, &request.password)
        .await?;
    let profile = state.erp().current_user(&token).await?;

    set_sentry_user(profile.id.as_i32(), Some(&profile.username));

    let user = CurrentUser {
        profile,
        token,
    };
    set_current_user(&session, &user)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;

    state
        .events()
        .publish(ShellEvent::UserLoggedIn(user.profile.id));
    tracing::info!(user = %user.profile.username, "user logged in");

    Ok(Json(MeResponse::from(&user.profile)))
}

/// Log out, clearing the session.
#[instrument(skip(state, session, user))]
pub async fn logout(
    State(state): State<AppState>,
    session: Session,
    OptionalUser(user): OptionalUser,
) -> Result<Json<serde_json::Value>, AppError> {
    if let Some(user) = user {
        state
            .events()
            .publish(ShellEvent::UserLoggedOut(user.profile.id));
    }
    clear_current_user(&session)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?;
    clear_sentry_user();

    Ok(Json(serde_json::json!({ "status": "logged_out" })))
}

/// The current session user.
pub async fn me(RequireUser(user): RequireUser) -> Json<MeResponse> {
    Json(MeResponse::from(&user.profile))
}
