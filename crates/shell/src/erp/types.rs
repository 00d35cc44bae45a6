//! Wire types for the upstream ERP REST API.
//!
//! DTOs mirror the upstream JSON shapes, quirks included - most notably the
//! user resource reporting its department under two differently-named
//! fields. Conversion into domain types happens here, once, so nothing past
//! this module sees the wire shapes.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use meridian_core::notifications::DeliveryRecord;
use meridian_core::{
    ApprovalRecord, Channel, DeliveryStatus, Department, DepartmentId, EmployeeId, Module, Role,
    UserId, UserProfile, WorkflowInstance, WorkflowInstanceId, WorkflowStatus, WorkflowTemplateId,
};

// =============================================================================
// Auth
// =============================================================================

/// Response from `POST /auth/token/`.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    /// Opaque bearer token for subsequent requests.
    pub token: String,
}

// =============================================================================
// Users
// =============================================================================

/// Wire shape of `GET /users/me/`.
///
/// `department` and `department_name` are synonyms upstream; whichever is
/// populated wins, `department_name` first.
#[derive(Debug, Deserialize)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub department_name: Option<String>,
    #[serde(default)]
    pub is_superuser: bool,
    #[serde(default)]
    pub is_module_restricted: Option<bool>,
    #[serde(default)]
    pub accessible_modules: Vec<String>,
}

impl From<UserDto> for UserProfile {
    fn from(dto: UserDto) -> Self {
        let department = [dto.department_name, dto.department]
            .into_iter()
            .flatten()
            .map(|d| d.trim().to_owned())
            .find(|d| !d.is_empty());

        let accessible_modules: HashSet<Module> = dto
            .accessible_modules
            .iter()
            .filter_map(|raw| match raw.parse() {
                Ok(module) => Some(module),
                Err(_) => {
                    tracing::warn!(module = %raw, "ignoring unknown module grant");
                    None
                }
            })
            .collect();

        Self {
            id: UserId::new(dto.id),
            username: dto.username,
            role: dto.role,
            department,
            is_superuser: dto.is_superuser,
            is_module_restricted: dto.is_module_restricted,
            accessible_modules,
        }
    }
}

// =============================================================================
// HR
// =============================================================================

/// Wire shape of one entry in `GET /hr/departments/`.
#[derive(Debug, Deserialize)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub supervisor: Option<String>,
}

impl From<DepartmentDto> for Department {
    fn from(dto: DepartmentDto) -> Self {
        Self {
            id: DepartmentId::new(dto.id),
            name: dto.name,
            supervisor: dto.supervisor,
        }
    }
}

/// One entry in `GET /hr/employees/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    #[serde(default)]
    pub department: Option<String>,
}

/// One entry in `GET /hr/leave-requests/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub id: i32,
    pub employee: String,
    pub status: String,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
}

// =============================================================================
// Procurement
// =============================================================================

/// One entry in `GET /procurement/requests/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcurementRequest {
    pub id: i32,
    pub requester: String,
    pub status: String,
    #[serde(default)]
    pub item_count: u32,
}

// =============================================================================
// Workflows
// =============================================================================

/// Wire shape of `GET /workflows/instances/{id}/`.
#[derive(Debug, Deserialize)]
pub struct WorkflowInstanceDto {
    pub id: i32,
    pub template: i32,
    pub status: WorkflowStatus,
    #[serde(default)]
    pub current_step: Option<String>,
    #[serde(default)]
    pub approvals: Vec<ApprovalDto>,
}

/// One approval record inside a workflow instance payload.
#[derive(Debug, Deserialize)]
pub struct ApprovalDto {
    pub step: String,
    pub approver: String,
    pub approved: bool,
    pub decided_at: DateTime<Utc>,
}

impl From<WorkflowInstanceDto> for WorkflowInstance {
    fn from(dto: WorkflowInstanceDto) -> Self {
        Self {
            id: WorkflowInstanceId::new(dto.id),
            template: WorkflowTemplateId::new(dto.template),
            status: dto.status,
            current_step: dto.current_step,
            approvals: dto
                .approvals
                .into_iter()
                .map(|a| ApprovalRecord {
                    step: a.step,
                    approver: a.approver,
                    approved: a.approved,
                    decided_at: a.decided_at,
                })
                .collect(),
        }
    }
}

/// One entry in `GET /workflows/instances/{id}/notification-status/`.
#[derive(Debug, Deserialize)]
pub struct DeliveryRecordDto {
    pub channel: Channel,
    pub stage: String,
    pub status: DeliveryStatus,
    pub sent_at: DateTime<Utc>,
}

impl From<DeliveryRecordDto> for DeliveryRecord {
    fn from(dto: DeliveryRecordDto) -> Self {
        Self {
            channel: dto.channel,
            stage: dto.stage,
            status: dto.status,
            sent_at: dto.sent_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_json(extra: &str) -> String {
        format!(
            r#"{{
                "id": 7,
                "username": "jdoe"
                {extra}
            }}"#
        )
    }

    #[test]
    fn test_user_minimal_payload() {
        let dto: UserDto = serde_json::from_str(&user_json("")).expect("deserialize");
        let user = UserProfile::from(dto);
        assert_eq!(user.id, UserId::new(7));
        assert!(user.role.is_none());
        assert!(user.department.is_none());
        assert!(!user.is_superuser);
        assert!(user.accessible_modules.is_empty());
    }

    #[test]
    fn test_department_name_wins_over_department() {
        let dto: UserDto = serde_json::from_str(&user_json(
            r#", "department": "Ops", "department_name": "Sales""#,
        ))
        .expect("deserialize");
        let user = UserProfile::from(dto);
        assert_eq!(user.department.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_blank_department_name_falls_back() {
        let dto: UserDto = serde_json::from_str(&user_json(
            r#", "department": "Finance", "department_name": "  ""#,
        ))
        .expect("deserialize");
        let user = UserProfile::from(dto);
        assert_eq!(user.department.as_deref(), Some("Finance"));
    }

    #[test]
    fn test_department_is_trimmed_at_the_boundary() {
        let dto: UserDto =
            serde_json::from_str(&user_json(r#", "department_name": "  Sales ""#))
                .expect("deserialize");
        let user = UserProfile::from(dto);
        assert_eq!(user.department.as_deref(), Some("Sales"));
    }

    #[test]
    fn test_unknown_module_grants_are_dropped() {
        let dto: UserDto = serde_json::from_str(&user_json(
            r#", "accessible_modules": ["warehouse", "telepathy", "reporting"]"#,
        ))
        .expect("deserialize");
        let user = UserProfile::from(dto);
        assert_eq!(user.accessible_modules.len(), 2);
        assert!(user.accessible_modules.contains(&Module::Warehouse));
        assert!(user.accessible_modules.contains(&Module::Reporting));
    }

    #[test]
    fn test_unknown_role_string_becomes_other() {
        let dto: UserDto = serde_json::from_str(&user_json(r#", "role": "wizard""#))
            .expect("deserialize");
        assert_eq!(dto.role, Some(Role::Other));
    }

    #[test]
    fn test_workflow_instance_conversion() {
        let json = r#"{
            "id": 4,
            "template": 2,
            "status": "escalated",
            "current_step": "finance_review",
            "approvals": [
                {"step": "manager_review", "approver": "A. Chan", "approved": true,
                 "decided_at": "2026-03-10T08:30:00Z"}
            ]
        }"#;
        let dto: WorkflowInstanceDto = serde_json::from_str(json).expect("deserialize");
        let instance = WorkflowInstance::from(dto);
        assert_eq!(instance.status, WorkflowStatus::Escalated);
        assert_eq!(instance.approvals.len(), 1);
        assert!(instance.approvals[0].approved);
    }
}
