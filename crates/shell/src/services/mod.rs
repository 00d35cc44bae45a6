//! Background services for the shell.

pub mod refresh;

pub use refresh::{RefreshGuard, spawn_refresh};
