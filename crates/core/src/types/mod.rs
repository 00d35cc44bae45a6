//! Core types for Meridian.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod module;
pub mod nav;
pub mod role;
pub mod status;
pub mod user;
pub mod workflow;

pub use id::*;
pub use module::Module;
pub use nav::NavItem;
pub use role::Role;
pub use status::{Channel, DeliveryStatus, WorkflowStatus};
pub use user::{Department, UserProfile};
pub use workflow::{ApprovalRecord, WorkflowInstance};
