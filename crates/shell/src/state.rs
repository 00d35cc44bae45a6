//! Application state shared across handlers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use moka::future::Cache;

use meridian_core::WorkflowInstanceId;
use meridian_core::notifications::NotificationSummary;

use crate::config::ShellConfig;
use crate::erp::ErpClient;
use crate::store::EventBus;

/// Time-to-live for cached workflow notification summaries. Short: a
/// summary is display data, and manual refresh must always win quickly.
const SUMMARY_CACHE_TTL: Duration = Duration::from_secs(30);

/// Bound on distinct workflow instances cached at once.
const SUMMARY_CACHE_CAPACITY: u64 = 1024;

/// Bound on instances the background refresher keeps warm.
const WATCH_CAPACITY: usize = 256;

/// Application state shared across all handlers.
///
/// Cheap to clone; all fields live behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShellConfig,
    erp: ErpClient,
    events: EventBus,
    summaries: Cache<WorkflowInstanceId, NotificationSummary>,
    /// Instances the background refresher keeps warm, with the last token
    /// that viewed each. Never awaited while locked.
    watches: Mutex<HashMap<WorkflowInstanceId, String>>,
}

impl AppState {
    /// Build the application state.
    ///
    /// # Errors
    ///
    /// Returns the underlying error if the upstream HTTP client cannot be
    /// constructed.
    pub fn new(config: ShellConfig) -> Result<Self, reqwest::Error> {
        let erp = ErpClient::new(&config.erp)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                erp,
                events: EventBus::new(),
                summaries: Cache::builder()
                    .time_to_live(SUMMARY_CACHE_TTL)
                    .max_capacity(SUMMARY_CACHE_CAPACITY)
                    .build(),
                watches: Mutex::new(HashMap::new()),
            }),
        })
    }

    /// Shell configuration.
    #[must_use]
    pub fn config(&self) -> &ShellConfig {
        &self.inner.config
    }

    /// Upstream ERP API client.
    #[must_use]
    pub fn erp(&self) -> &ErpClient {
        &self.inner.erp
    }

    /// Application event bus.
    #[must_use]
    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    /// Cached workflow notification summaries.
    #[must_use]
    pub fn summaries(&self) -> &Cache<WorkflowInstanceId, NotificationSummary> {
        &self.inner.summaries
    }

    /// Mark an instance for background refresh, remembering the token that
    /// last viewed it. A full watch list rejects new entries rather than
    /// evicting warm ones.
    pub fn watch_instance(&self, id: WorkflowInstanceId, token: &str) {
        let mut watches = self.inner.watches.lock().expect("watch lock poisoned");
        if watches.len() < WATCH_CAPACITY || watches.contains_key(&id) {
            watches.insert(id, token.to_owned());
        }
    }

    /// Stop refreshing an instance (e.g., its token expired).
    pub fn unwatch_instance(&self, id: WorkflowInstanceId) {
        self.inner
            .watches
            .lock()
            .expect("watch lock poisoned")
            .remove(&id);
    }

    /// Snapshot the watched instances.
    #[must_use]
    pub fn watched_instances(&self) -> Vec<(WorkflowInstanceId, String)> {
        self.inner
            .watches
            .lock()
            .expect("watch lock poisoned")
            .iter()
            .map(|(id, token)| (*id, token.clone()))
            .collect()
    }
}
