//! Status enums for workflow instances and notification delivery.

use serde::{Deserialize, Serialize};

/// Lifecycle status of an approval workflow instance.
///
/// Owned by the upstream workflow engine; the shell only displays it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    #[default]
    Pending,
    InProgress,
    Approved,
    Rejected,
    Cancelled,
    Escalated,
}

impl WorkflowStatus {
    /// Whether the instance has reached a terminal state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected | Self::Cancelled)
    }
}

/// Notification delivery channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
    InApp,
    Push,
}

impl Channel {
    /// Every channel, in display order.
    pub const ALL: [Self; 4] = [Self::Email, Self::Sms, Self::InApp, Self::Push];
}

/// Delivery status of a single notification record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryStatus {
    /// Handed to the channel, outcome not yet known.
    Sent,
    /// Confirmed delivered.
    Delivered,
    /// Delivery failed.
    Failed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workflow_status_terminal() {
        assert!(WorkflowStatus::Approved.is_terminal());
        assert!(WorkflowStatus::Cancelled.is_terminal());
        assert!(!WorkflowStatus::Pending.is_terminal());
        assert!(!WorkflowStatus::Escalated.is_terminal());
    }

    #[test]
    fn test_channel_serde_names() {
        assert_eq!(
            serde_json::to_string(&Channel::InApp).expect("serialize"),
            "\"in_app\""
        );
        let back: DeliveryStatus = serde_json::from_str("\"delivered\"").expect("deserialize");
        assert_eq!(back, DeliveryStatus::Delivered);
    }
}
