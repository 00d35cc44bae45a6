//! User classification and module access resolution.
//!
//! Every authorization decision in the shell flows through [`resolve`]:
//! classify the user once with [`classify`], then look the module up in the
//! allow-list for that classification. There is deliberately no second code
//! path - route guards, navigation pruning, and the access API all call the
//! same function.

use serde::{Deserialize, Serialize};

use crate::types::module::Module;
use crate::types::role::Role;
use crate::types::user::UserProfile;

/// A user's access classification.
///
/// Computed once per decision from the profile's role, department, and
/// flags. First match wins, in the order the variants are documented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserClass {
    /// Superusers and admin/superadmin roles. Every module is allowed.
    Unrestricted,
    /// The sales organization: sales roles, or any user whose department is
    /// "sales" (case-insensitive, whitespace-trimmed).
    Sales,
    /// Regular employees: the `employee` role, users with no role at all,
    /// and non-managerial users who merely belong to some department.
    Employee,
    /// Managers, supervisors, and unrecognized roles. Denied by default;
    /// access comes only from the explicit-grant set or the
    /// `is_module_restricted == false` bypass.
    Elevated,
}

/// Modules visible to the sales classification.
pub const SALES_MODULES: [Module; 10] = [
    Module::EmployeeDashboard,
    Module::Payslips,
    Module::HrCalendarView,
    Module::TasksAssigned,
    Module::Notifications,
    Module::CustomersView,
    Module::InventoryView,
    Module::Warehouse,
    Module::SurveysConsumer,
    Module::RoutePlanningView,
];

/// Modules visible to the employee classification.
pub const EMPLOYEE_MODULES: [Module; 6] = [
    Module::EmployeeDashboard,
    Module::Payslips,
    Module::HrCalendarView,
    Module::TrainingConsumer,
    Module::TasksAssigned,
    Module::Notifications,
];

/// Classify a user's profile. Total: every profile lands in exactly one
/// class, with the priority order fixed by the policy.
#[must_use]
pub fn classify(user: &UserProfile) -> UserClass {
    if user.is_superuser || user.role.is_some_and(|r| r.is_admin()) {
        return UserClass::Unrestricted;
    }

    if user.role.is_some_and(|r| r.is_sales()) || user.in_sales_department() {
        return UserClass::Sales;
    }

    // A bare profile (no role, no superuser flag) is a regular employee, as
    // is anyone with a department who is not a manager or supervisor.
    let managerial = matches!(user.role, Some(Role::Manager | Role::Supervisor));
    if user.role.is_none()
        || user.role == Some(Role::Employee)
        || (user.department.is_some() && !managerial)
    {
        return UserClass::Employee;
    }

    UserClass::Elevated
}

/// Decide whether `user` may see `module`.
///
/// A missing user is always denied; the HTTP layer rejects unauthenticated
/// requests before this point, but the function stays total for callers
/// that hold an `Option`.
#[must_use]
pub fn resolve(user: Option<&UserProfile>, module: Module) -> bool {
    let Some(user) = user else {
        return false;
    };

    match classify(user) {
        UserClass::Unrestricted => true,
        UserClass::Sales => SALES_MODULES.contains(&module),
        UserClass::Employee => EMPLOYEE_MODULES.contains(&module),
        UserClass::Elevated => {
            user.is_module_restricted == Some(false) || user.accessible_modules.contains(&module)
        }
    }
}
