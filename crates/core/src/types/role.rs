//! User role enumeration.

use serde::{Deserialize, Serialize};

/// A user's role as reported by the upstream ERP.
///
/// The upstream stores roles as free-form strings; they are resolved into
/// this closed enum once at the API boundary. Unrecognized strings collapse
/// into [`Role::Other`], which the access policy treats as deny-by-default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Full platform access, including system settings.
    Superadmin,
    /// Full platform access.
    Admin,
    /// Manages a sales team.
    SalesManager,
    /// Field sales representative.
    SalesRep,
    /// Department manager.
    Manager,
    /// Team supervisor.
    Supervisor,
    /// Regular employee.
    Employee,
    /// Any role string the shell does not recognize.
    #[serde(other)]
    Other,
}

impl Role {
    /// Whether this role grants unconditional access to every module.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self, Self::Superadmin | Self::Admin)
    }

    /// Whether this role marks the user as part of the sales organization.
    #[must_use]
    pub const fn is_sales(&self) -> bool {
        matches!(self, Self::SalesManager | Self::SalesRep)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Superadmin => "superadmin",
            Self::Admin => "admin",
            Self::SalesManager => "sales_manager",
            Self::SalesRep => "sales_rep",
            Self::Manager => "manager",
            Self::Supervisor => "supervisor",
            Self::Employee => "employee",
            Self::Other => "other",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_roles_deserialize() {
        let role: Role = serde_json::from_str("\"sales_manager\"").expect("deserialize");
        assert_eq!(role, Role::SalesManager);
        assert!(role.is_sales());
        assert!(!role.is_admin());
    }

    #[test]
    fn test_unknown_role_collapses_to_other() {
        let role: Role = serde_json::from_str("\"night_auditor\"").expect("deserialize");
        assert_eq!(role, Role::Other);
    }

    #[test]
    fn test_admin_predicate() {
        assert!(Role::Superadmin.is_admin());
        assert!(Role::Admin.is_admin());
        assert!(!Role::Manager.is_admin());
    }
}
