//! Integration tests for Meridian.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the shell against a test ERP backend
//! cargo run -p meridian-shell
//!
//! # Run integration tests
//! cargo test -p meridian-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `shell_navigation` - Session, access, and navigation endpoints
//! - `shell_workflows` - Workflow status aggregation endpoints
//!
//! Tests are `#[ignore]`d by default: they need a running shell with a
//! reachable upstream and valid test credentials in the environment.
