//! The closed enumeration of ERP modules.
//!
//! A module is a named functional area of the ERP (inventory, HR, finance,
//! ...) gating one or more routes. Access decisions and navigation pruning
//! are keyed by this enum; the upstream API's string identifiers are
//! resolved into it once at the boundary.

use serde::{Deserialize, Serialize};

/// A named functional area of the ERP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Module {
    /// Personal landing dashboard for every signed-in user.
    EmployeeDashboard,
    /// Own payslip history.
    Payslips,
    /// Company HR calendar (leave, holidays).
    HrCalendarView,
    /// Assigned training content.
    TrainingConsumer,
    /// Tasks assigned to the current user.
    TasksAssigned,
    /// In-app notification feed.
    Notifications,
    /// Read-only stock levels.
    InventoryView,
    /// Read-only customer directory.
    CustomersView,
    /// Surveys assigned for completion.
    SurveysConsumer,
    /// Read-only route plans.
    RoutePlanningView,
    /// Warehouse operations.
    Warehouse,
    /// Cross-module reporting.
    Reporting,
    /// Survey authoring and administration.
    Surveys,
    /// Route planning administration.
    RoutePlanning,
    /// HR administration.
    Hr,
    /// Sales administration.
    Sales,
    /// Finance administration.
    Finance,
    /// Manufacturing administration.
    Manufacturing,
    /// Procurement administration.
    Procurement,
    /// User management.
    Users,
    /// System-wide settings.
    SystemSettings,
}

impl Module {
    /// Every module, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::EmployeeDashboard,
        Self::Payslips,
        Self::HrCalendarView,
        Self::TrainingConsumer,
        Self::TasksAssigned,
        Self::Notifications,
        Self::InventoryView,
        Self::CustomersView,
        Self::SurveysConsumer,
        Self::RoutePlanningView,
        Self::Warehouse,
        Self::Reporting,
        Self::Surveys,
        Self::RoutePlanning,
        Self::Hr,
        Self::Sales,
        Self::Finance,
        Self::Manufacturing,
        Self::Procurement,
        Self::Users,
        Self::SystemSettings,
    ];

    /// The module's wire identifier (snake_case, matching the upstream API).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EmployeeDashboard => "employee_dashboard",
            Self::Payslips => "payslips",
            Self::HrCalendarView => "hr_calendar_view",
            Self::TrainingConsumer => "training_consumer",
            Self::TasksAssigned => "tasks_assigned",
            Self::Notifications => "notifications",
            Self::InventoryView => "inventory_view",
            Self::CustomersView => "customers_view",
            Self::SurveysConsumer => "surveys_consumer",
            Self::RoutePlanningView => "route_planning_view",
            Self::Warehouse => "warehouse",
            Self::Reporting => "reporting",
            Self::Surveys => "surveys",
            Self::RoutePlanning => "route_planning",
            Self::Hr => "hr",
            Self::Sales => "sales",
            Self::Finance => "finance",
            Self::Manufacturing => "manufacturing",
            Self::Procurement => "procurement",
            Self::Users => "users",
            Self::SystemSettings => "system_settings",
        }
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|m| m.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown module: {s}"))
    }
}
