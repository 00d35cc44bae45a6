//! Upstream ERP REST API client.
//!
//! The shell consumes a separately-owned ERP backend over plain REST. This
//! module provides a typed client with a uniform error taxonomy
//! (connectivity / authorization / validation / not-found), wire-DTO
//! conversion at the boundary, and a short-lived cache for the
//! slow-changing department list.
//!
//! Endpoints are grouped the way the upstream groups them:
//!
//! - [`users`] - credential exchange and the current-user profile
//! - [`hr`] - departments, employees, leave requests
//! - [`procurement`] - procurement requests
//! - [`workflows`] - workflow instances and notification delivery records

mod client;
mod error;
mod hr;
mod procurement;
mod types;
mod users;
mod workflows;

pub use client::ErpClient;
pub use error::{ErpError, FieldErrors};
pub use types::{Employee, LeaveRequest, ProcurementRequest};
