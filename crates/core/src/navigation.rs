//! Navigation tree building and pruning.
//!
//! The sidebar is built in two steps: pick the static tree shape for the
//! user's classification, then prune it against the access resolver. Leaf
//! labels map to module ids through a fixed table; labels without a mapping
//! are kept as-is (fail-open), so purely informational entries survive
//! pruning. A group survives when at least one child does, or when the
//! group's own module is independently allowed.

use crate::access::{self, UserClass};
use crate::types::module::Module;
use crate::types::nav::NavItem;
use crate::types::user::UserProfile;

/// Map a display label to the module gating it.
///
/// Returns `None` for labels that are not access-controlled.
#[must_use]
pub fn module_for_label(label: &str) -> Option<Module> {
    let module = match label {
        "Dashboard" => Module::EmployeeDashboard,
        "Payslips" => Module::Payslips,
        "Calendar" => Module::HrCalendarView,
        "Training" => Module::TrainingConsumer,
        "My Tasks" => Module::TasksAssigned,
        "Notifications" => Module::Notifications,
        "Stock Levels" => Module::InventoryView,
        "Customers" => Module::CustomersView,
        "My Surveys" => Module::SurveysConsumer,
        "Routes" => Module::RoutePlanningView,
        "Warehouse" => Module::Warehouse,
        "Reporting" => Module::Reporting,
        "Surveys" => Module::Surveys,
        "Route Planning" => Module::RoutePlanning,
        "HR" => Module::Hr,
        "Sales" => Module::Sales,
        "Finance" => Module::Finance,
        "Manufacturing" => Module::Manufacturing,
        "Procurement" => Module::Procurement,
        "Users" => Module::Users,
        "Settings" => Module::SystemSettings,
        _ => return None,
    };
    Some(module)
}

/// Build the static (unpruned) navigation tree for a classification.
///
/// Three shapes exist: the full admin tree, the sales tree, and the default
/// tree shared by employees and elevated users. Elevated users rely on
/// pruning against their explicit grants.
#[must_use]
pub fn build(class: UserClass) -> Vec<NavItem> {
    match class {
        UserClass::Unrestricted => admin_tree(),
        UserClass::Sales => sales_tree(),
        UserClass::Employee | UserClass::Elevated => default_tree(),
    }
}

/// Build and prune the navigation tree for a user.
///
/// A missing user yields an empty tree; the HTTP layer redirects to login
/// before rendering in that case.
#[must_use]
pub fn navigation_for(user: Option<&UserProfile>) -> Vec<NavItem> {
    user.map(|u| prune(build(access::classify(u)), u))
        .unwrap_or_default()
}

/// Prune a navigation tree against the access resolver.
///
/// Children are filtered first; a group is then kept when any child
/// survived or its own mapped module is allowed. Leaves are kept when
/// unmapped (fail-open) or allowed. Sibling order is preserved.
#[must_use]
pub fn prune(items: Vec<NavItem>, user: &UserProfile) -> Vec<NavItem> {
    items
        .into_iter()
        .filter_map(|item| prune_item(item, user))
        .collect()
}

fn prune_item(mut item: NavItem, user: &UserProfile) -> Option<NavItem> {
    let own_access =
        module_for_label(&item.label).map(|module| access::resolve(Some(user), module));

    if item.is_leaf() {
        // Fail-open: an unmapped leaf is informational, not gated.
        return match own_access {
            Some(false) => None,
            _ => Some(item),
        };
    }

    item.children = prune(std::mem::take(&mut item.children), user);
    if item.children.is_empty() && own_access != Some(true) {
        return None;
    }
    Some(item)
}

/// Set the badge on the first entry with a matching label.
///
/// Returns `false` when no entry matches.
pub fn set_badge(items: &mut [NavItem], label: &str, count: u32) -> bool {
    for item in items.iter_mut() {
        if item.label == label {
            item.badge = Some(count);
            return true;
        }
        if set_badge(&mut item.children, label, count) {
            return true;
        }
    }
    false
}

// =============================================================================
// Static tree shapes
// =============================================================================

fn admin_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Dashboard", "home", "/"),
        NavItem::group(
            "HR",
            "people",
            "/hr",
            vec![
                NavItem::leaf("Calendar", "calendar", "/hr/calendar"),
                NavItem::leaf("Payslips", "receipt", "/hr/payslips"),
                NavItem::leaf("Training", "school", "/hr/training"),
            ],
        ),
        NavItem::group(
            "Sales",
            "storefront",
            "/sales",
            vec![
                NavItem::leaf("Customers", "contacts", "/sales/customers"),
                NavItem::leaf("Surveys", "poll", "/sales/surveys"),
                NavItem::leaf("Route Planning", "map", "/sales/routes"),
            ],
        ),
        NavItem::group(
            "Operations",
            "factory",
            "/operations",
            vec![
                NavItem::leaf("Warehouse", "warehouse", "/operations/warehouse"),
                NavItem::leaf("Stock Levels", "inventory", "/operations/stock"),
                NavItem::leaf("Manufacturing", "precision", "/operations/manufacturing"),
                NavItem::leaf("Procurement", "shopping-cart", "/operations/procurement"),
            ],
        ),
        NavItem::leaf("Finance", "payments", "/finance"),
        NavItem::leaf("Reporting", "bar-chart", "/reporting"),
        NavItem::leaf("Notifications", "bell", "/notifications"),
        NavItem::leaf("Users", "manage-accounts", "/users"),
        NavItem::leaf("Settings", "settings", "/settings"),
        NavItem::leaf("Help", "help", "/help"),
    ]
}

fn sales_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Dashboard", "home", "/"),
        NavItem::leaf("My Tasks", "checklist", "/tasks"),
        NavItem::leaf("Notifications", "bell", "/notifications"),
        NavItem::leaf("Customers", "contacts", "/sales/customers"),
        NavItem::group(
            "Inventory",
            "inventory",
            "/inventory",
            vec![
                NavItem::leaf("Stock Levels", "inventory", "/inventory/stock"),
                NavItem::leaf("Warehouse", "warehouse", "/inventory/warehouse"),
            ],
        ),
        NavItem::group(
            "HR",
            "people",
            "/hr",
            vec![
                NavItem::leaf("Payslips", "receipt", "/hr/payslips"),
                NavItem::leaf("Calendar", "calendar", "/hr/calendar"),
            ],
        ),
        NavItem::leaf("My Surveys", "poll", "/surveys"),
        NavItem::leaf("Routes", "map", "/routes"),
        NavItem::leaf("Help", "help", "/help"),
    ]
}

fn default_tree() -> Vec<NavItem> {
    vec![
        NavItem::leaf("Dashboard", "home", "/"),
        NavItem::leaf("My Tasks", "checklist", "/tasks"),
        NavItem::leaf("Notifications", "bell", "/notifications"),
        NavItem::group(
            "HR",
            "people",
            "/hr",
            vec![
                NavItem::leaf("Payslips", "receipt", "/hr/payslips"),
                NavItem::leaf("Calendar", "calendar", "/hr/calendar"),
                NavItem::leaf("Training", "school", "/hr/training"),
            ],
        ),
        NavItem::leaf("Customers", "contacts", "/customers"),
        NavItem::leaf("Stock Levels", "inventory", "/inventory"),
        NavItem::leaf("My Surveys", "poll", "/surveys"),
        NavItem::leaf("Routes", "map", "/routes"),
        NavItem::leaf("Reporting", "bar-chart", "/reporting"),
        NavItem::leaf("Help", "help", "/help"),
    ]
}
