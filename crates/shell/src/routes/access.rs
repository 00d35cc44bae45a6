//! Module access decision handler.
//!
//! The single authorization surface: clients ask "may I open module X" here
//! instead of re-deriving the policy locally.

use axum::{Json, extract::Path};
use serde::Serialize;
use tracing::instrument;

use meridian_core::Module;
use meridian_core::access;

use crate::error::AppError;
use crate::middleware::RequireUser;

/// One access decision.
#[derive(Debug, Serialize)]
pub struct AccessDecision {
    pub module: Module,
    pub allowed: bool,
}

/// Decide whether the session user may see the named module.
///
/// Unknown module names are a client error, not a denial - the module
/// enumeration is closed.
#[instrument(skip(user))]
pub async fn check(
    RequireUser(user): RequireUser,
    Path(module): Path<String>,
) -> Result<Json<AccessDecision>, AppError> {
    let module: Module = module
        .parse()
        .map_err(|_| AppError::BadRequest(format!("unknown module: {module}")))?;

    Ok(Json(AccessDecision {
        module,
        allowed: access::resolve(Some(&user.profile), module),
    }))
}
