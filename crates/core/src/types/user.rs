//! User profile and department domain types.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::id::{DepartmentId, UserId};
use super::module::Module;
use super::role::Role;

/// A user's identity and authorization attributes.
///
/// The upstream API reports the department under two differently-named
/// fields (`department` and `department_name`); they are coalesced into the
/// single `department` field here, at the boundary, so the access policy
/// never has to know about the duplication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Upstream user ID.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Role, if the upstream reported one.
    pub role: Option<Role>,
    /// Department name, trimmed. `None` when the user has no department.
    pub department: Option<String>,
    /// Unconditional full-access flag.
    pub is_superuser: bool,
    /// Module restriction flag. `Some(false)` is an explicit allow-all
    /// bypass; `Some(true)` and `None` both mean "no bypass".
    pub is_module_restricted: Option<bool>,
    /// Modules granted explicitly to this user.
    #[serde(default)]
    pub accessible_modules: HashSet<Module>,
}

impl UserProfile {
    /// Whether the user's department is the sales department.
    ///
    /// Comparison trims surrounding whitespace and ignores case, so
    /// `"SALES"` and `"  Sales "` both match.
    #[must_use]
    pub fn in_sales_department(&self) -> bool {
        self.department
            .as_deref()
            .is_some_and(|d| d.trim().eq_ignore_ascii_case("sales"))
    }
}

/// A department record (consumed from the upstream, never owned here).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Upstream department ID.
    pub id: DepartmentId,
    /// Department name.
    pub name: String,
    /// Supervisor's display name, if assigned.
    pub supervisor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(department: Option<&str>) -> UserProfile {
        UserProfile {
            id: UserId::new(1),
            username: "jdoe".to_owned(),
            role: Some(Role::Employee),
            department: department.map(str::to_owned),
            is_superuser: false,
            is_module_restricted: None,
            accessible_modules: HashSet::new(),
        }
    }

    #[test]
    fn test_sales_department_case_insensitive() {
        assert!(profile(Some("Sales")).in_sales_department());
        assert!(profile(Some("SALES")).in_sales_department());
        assert!(profile(Some("  Sales ")).in_sales_department());
    }

    #[test]
    fn test_other_departments_do_not_match() {
        assert!(!profile(Some("Salesforce Ops")).in_sales_department());
        assert!(!profile(Some("Finance")).in_sales_department());
        assert!(!profile(None).in_sales_department());
    }

    #[test]
    fn test_accessible_modules_default_empty() {
        let json = r#"{
            "id": 9,
            "username": "mgr",
            "role": "manager",
            "department": null,
            "is_superuser": false,
            "is_module_restricted": true
        }"#;
        let user: UserProfile = serde_json::from_str(json).expect("deserialize");
        assert!(user.accessible_modules.is_empty());
        assert_eq!(user.role, Some(Role::Manager));
    }
}
