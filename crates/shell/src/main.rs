//! Meridian Shell - ERP shell service.
//!
//! This binary serves the shell API on port 4000.
//!
//! # Architecture
//!
//! - Axum web framework
//! - In-memory sessions (tower-sessions) holding the upstream bearer token
//! - Upstream ERP REST API for users, HR, procurement, and workflows
//! - Pure access/navigation/aggregation logic from `meridian-core`

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::Router;
use secrecy::ExposeSecret;
use tower_http::trace::TraceLayer;

use meridian_shell::config::ShellConfig;
use meridian_shell::middleware::create_session_layer;
use meridian_shell::state::AppState;
use meridian_shell::{routes, services};

use sentry::integrations::tracing as sentry_tracing;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize Sentry error tracking and return guard that must be kept alive.
fn init_sentry(config: &ShellConfig) -> Option<sentry::ClientInitGuard> {
    let dsn = config.sentry_dsn.as_ref()?;

    let guard = sentry::init((
        dsn.as_str(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            environment: config
                .sentry_environment
                .clone()
                .map(std::borrow::Cow::Owned),
            sample_rate: config.sentry_sample_rate,
            traces_sample_rate: config.sentry_traces_sample_rate,
            attach_stacktrace: true,
            ..Default::default()
        },
    ));

    tracing::info!("Sentry initialized");
    Some(guard)
}

/// Filter tracing events to Sentry event types.
fn sentry_event_filter(metadata: &tracing::Metadata<'_>) -> sentry_tracing::EventFilter {
    match *metadata.level() {
        tracing::Level::ERROR | tracing::Level::WARN => sentry_tracing::EventFilter::Event,
        tracing::Level::INFO | tracing::Level::DEBUG => sentry_tracing::EventFilter::Breadcrumb,
        _ => sentry_tracing::EventFilter::Ignore,
    }
}

#[tokio::main]
async fn main() {
    // Install rustls crypto provider (must be done before any TLS operations)
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    // Load configuration from environment (needed for Sentry init)
    let config = ShellConfig::from_env().expect("Failed to load configuration");

    // Initialize Sentry (must be done before tracing subscriber)
    let _sentry_guard = init_sentry(&config);

    // Initialize tracing with EnvFilter and Sentry integration
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "meridian_shell=info,tower_http=debug".into());

    // Use JSON format in containers for structured log parsing, text locally
    let is_container = std::env::var("CONTAINER_APP_NAME").is_ok();
    let json_layer =
        is_container.then(|| tracing_subscriber::fmt::layer().json().flatten_event(true));
    let text_layer = (!is_container).then(tracing_subscriber::fmt::layer);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .with(sentry_tracing::layer().event_filter(sentry_event_filter))
        .init();

    // Create session layer (in-memory with SameSite=Strict)
    let session_layer = create_session_layer(&config);

    // Build application state (upstream client, caches, event bus)
    let state = AppState::new(config.clone()).expect("Failed to create application state");

    // Start the background notification refresher; the guard aborts the
    // task when main unwinds.
    let _refresh_guard = services::spawn_refresh(state.clone(), config.refresh_interval);

    // Build router
    let app = Router::new()
        .merge(routes::routes())
        .layer(session_layer)
        .layer(
            sentry_tower::NewSentryLayer::<axum::http::Request<axum::body::Body>>::new_from_top(),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = config.socket_addr();

    match &config.tls {
        Some(tls) => {
            tracing::info!(%addr, "Shell listening (HTTPS)");
            let rustls_config = axum_server::tls_rustls::RustlsConfig::from_pem(
                tls.cert_pem.clone().into_bytes(),
                tls.key_pem.expose_secret().as_bytes().to_vec(),
            )
            .await
            .expect("Failed to load TLS configuration");

            axum_server::bind_rustls(addr, rustls_config)
                .serve(app.into_make_service())
                .await
                .expect("Server failed");
        }
        None => {
            tracing::info!(%addr, "Shell listening (HTTP)");
            axum_server::bind(addr)
                .serve(app.into_make_service())
                .await
                .expect("Server failed");
        }
    }
}
