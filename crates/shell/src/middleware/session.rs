//! Session middleware configuration for the shell.
//!
//! Sets up in-memory sessions using tower-sessions with strict security
//! settings (SameSite=Strict, 24hr expiry). The shell holds no persistent
//! state; a session lives exactly as long as the server process, matching
//! the per-tab session model of the surface it replaces.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::ShellConfig;

/// Session cookie name for the shell.
pub const SESSION_COOKIE_NAME: &str = "meridian_session";

/// Session expiry time in seconds (24 hours).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &ShellConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're serving HTTPS
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
