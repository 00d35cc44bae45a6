//! HR list proxies, gated on the HR module.

use axum::{Json, extract::State};
use tracing::instrument;

use meridian_core::{Department, Module};

use super::require_module;
use crate::erp::{Employee, LeaveRequest};
use crate::error::AppError;
use crate::middleware::RequireUser;
use crate::state::AppState;

/// List departments.
#[instrument(skip(state, user))]
pub async fn departments(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Department>>, AppError> {
    require_module(&user.profile, Module::Hr)?;
    let departments = state.erp().departments(&user.token).await?;
    Ok(Json(departments.as_ref().clone()))
}

/// List employees.
#[instrument(skip(state, user))]
pub async fn employees(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<Employee>>, AppError> {
    require_module(&user.profile, Module::Hr)?;
    Ok(Json(state.erp().employees(&user.token).await?))
}

/// List leave requests.
#[instrument(skip(state, user))]
pub async fn leave_requests(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Vec<LeaveRequest>>, AppError> {
    require_module(&user.profile, Module::Hr)?;
    Ok(Json(state.erp().leave_requests(&user.token).await?))
}
