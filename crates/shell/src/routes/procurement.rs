//! Procurement list proxy, gated on the procurement module.

use axum::{Json, extract::State};
use tracing::instrument;

use meridian_core::Module;

use super::require_module;
use crate::erp::ProcurementRequest;
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

/// List open procurement requests.
#[instrument(skip(state, user))]
pub async fn requests(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<ProcurementRequest>>, AppError> {
    require_module(&user.profile, Module::Procurement)?;
    Ok(Json(state.erp().procurement_requests(&user.token).await?))
}
