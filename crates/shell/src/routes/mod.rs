//! HTTP route handlers for the shell.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness probe
//! GET  /health/ready            - Readiness probe
//!
//! # Auth (proxied to the upstream ERP)
//! POST /auth/login              - Exchange credentials, establish session
//! POST /auth/logout             - Clear session
//!
//! # Session
//! GET  /api/me                  - Current user's profile and classification
//!
//! # Navigation & access
//! GET  /api/navigation          - Pruned sidebar tree (?refresh=true re-fetches the profile)
//! GET  /api/access/{module}     - Access decision for one module
//!
//! # HR (requires the hr module)
//! GET  /api/hr/departments      - Department list
//! GET  /api/hr/employees        - Employee list
//! GET  /api/hr/leave-requests   - Leave request list
//!
//! # Procurement (requires the procurement module)
//! GET  /api/procurement/requests - Open procurement requests
//!
//! # Workflows
//! GET  /api/workflows/{id}                      - Instance detail
//! GET  /api/workflows/{id}/notification-status  - Aggregated delivery summary (?refresh=true bypasses cache)
//! GET  /api/workflows/{id}/overview             - Instance + summary, fetched concurrently
//!
//! # Admin (unrestricted users only)
//! GET  /api/admin/access-matrix - The effective allow-lists
//! ```

use axum::{Router, routing::get, routing::post};

use meridian_core::access::resolve;
use meridian_core::{Module, UserProfile};

use crate::error::AppError;
use crate::state::AppState;

pub mod access;
pub mod admin;
pub mod auth;
pub mod health;
pub mod hr;
pub mod navigation;
pub mod procurement;
pub mod workflows;

/// Guard a handler on a module, through the same resolver the navigation
/// and access endpoints use.
pub(crate) fn require_module(profile: &UserProfile, module: Module) -> Result<(), AppError> {
    if resolve(Some(profile), module) {
        Ok(())
    } else {
        Err(AppError::Forbidden(format!(
            "module {module} is not available to this user"
        )))
    }
}

/// Assemble the shell router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        // Auth
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        // Session
        .route("/api/me", get(auth::me))
        // Navigation & access
        .route("/api/navigation", get(navigation::navigation))
        .route("/api/access/{module}", get(access::check))
        // HR
        .route("/api/hr/departments", get(hr::departments))
        .route("/api/hr/employees", get(hr::employees))
        .route("/api/hr/leave-requests", get(hr::leave_requests))
        // Procurement
        .route("/api/procurement/requests", get(procurement::requests))
        // Workflows
        .route("/api/workflows/{id}", get(workflows::instance))
        .route(
            "/api/workflows/{id}/notification-status",
            get(workflows::notification_status),
        )
        .route("/api/workflows/{id}/overview", get(workflows::overview))
        // Admin
        .route("/api/admin/access-matrix", get(admin::access_matrix))
}
