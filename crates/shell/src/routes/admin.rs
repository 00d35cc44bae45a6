//! Administrative handlers (unrestricted users only).

use axum::Json;
use serde::Serialize;
use tracing::instrument;

use meridian_core::Module;
use meridian_core::access::{EMPLOYEE_MODULES, SALES_MODULES};

use crate::middleware::RequireSuperuser;

/// The effective allow-lists, as served to administrators.
///
/// Useful when auditing why a user can or cannot see a module; the values
/// come straight from the policy tables, so this view cannot drift from
/// enforcement.
#[derive(Debug, Serialize)]
pub struct AccessMatrix {
    pub all_modules: Vec<Module>,
    pub sales_modules: Vec<Module>,
    pub employee_modules: Vec<Module>,
}

/// Serve the access matrix.
#[instrument(skip(_admin))]
pub async fn access_matrix(RequireSuperuser(_admin): RequireSuperuser) -> Json<AccessMatrix> {
    Json(AccessMatrix {
        all_modules: Module::ALL.to_vec(),
        sales_modules: SALES_MODULES.to_vec(),
        employee_modules: EMPLOYEE_MODULES.to_vec(),
    })
}
