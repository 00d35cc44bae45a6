//! Workflow instance types.
//!
//! Instances are owned by the upstream workflow engine; the shell displays
//! them and never mutates state locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::id::{WorkflowInstanceId, WorkflowTemplateId};
use super::status::WorkflowStatus;

/// A single approval decision on a workflow step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalRecord {
    /// Step the decision applies to.
    pub step: String,
    /// Approver's display name.
    pub approver: String,
    /// Whether the step was approved.
    pub approved: bool,
    /// When the decision was recorded.
    pub decided_at: DateTime<Utc>,
}

/// An in-flight (or finished) approval workflow instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowInstance {
    /// Upstream instance ID.
    pub id: WorkflowInstanceId,
    /// Template the instance was started from.
    pub template: WorkflowTemplateId,
    /// Current lifecycle status.
    pub status: WorkflowStatus,
    /// Step awaiting action, absent once the instance is terminal.
    pub current_step: Option<String>,
    /// Decisions recorded so far, oldest first.
    #[serde(default)]
    pub approvals: Vec<ApprovalRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_without_approvals() {
        let json = r#"{
            "id": 12,
            "template": 3,
            "status": "in_progress",
            "current_step": "manager_review"
        }"#;
        let instance: WorkflowInstance = serde_json::from_str(json).expect("deserialize");
        assert_eq!(instance.status, WorkflowStatus::InProgress);
        assert!(instance.approvals.is_empty());
        assert_eq!(instance.current_step.as_deref(), Some("manager_review"));
    }
}
