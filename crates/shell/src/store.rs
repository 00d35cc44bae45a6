//! Typed application event bus.
//!
//! Cross-component synchronization goes through one explicit channel with
//! typed events, replacing the implicit cross-tab signaling (storage
//! polling, custom DOM events) of the surface this service supersedes.
//! Subscribers that fall behind lose the oldest events, never the newest.

use tokio::sync::broadcast;

use meridian_core::notifications::NotificationSummary;
use meridian_core::{UserId, WorkflowInstanceId};

/// Buffered events per subscriber before lag drops the oldest.
const EVENT_BUFFER: usize = 64;

/// An application-level state change other components may react to.
#[derive(Debug, Clone)]
pub enum ShellEvent {
    /// A user logged in.
    UserLoggedIn(UserId),
    /// A user logged out.
    UserLoggedOut(UserId),
    /// A workflow's notification summary was refreshed (manually or by the
    /// background refresher).
    NotificationStatusRefreshed {
        instance: WorkflowInstanceId,
        summary: NotificationSummary,
    },
}

/// Shared event bus. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ShellEvent>,
}

impl EventBus {
    /// Create a new bus.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(EVENT_BUFFER);
        Self { sender }
    }

    /// Publish an event. Events with no subscribers are dropped silently.
    pub fn publish(&self, event: ShellEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribe to future events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<ShellEvent> {
        self.sender.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
