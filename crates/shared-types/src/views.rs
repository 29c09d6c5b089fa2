use crate::access::Page;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Dashboard variant rendered at `/dashboard`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum DashboardView {
    Admin,
    Manager,
    Employee,
}

impl DashboardView {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => DashboardView::Admin,
            Role::Manager => DashboardView::Manager,
            Role::Employee => DashboardView::Employee,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DashboardView::Admin => "Admin Dashboard",
            DashboardView::Manager => "Manager Dashboard",
            DashboardView::Employee => "My Dashboard",
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            DashboardView::Admin => "Organization-wide review progress and activity.",
            DashboardView::Manager => "Track and manage your team's performance reviews.",
            DashboardView::Employee => "Your reviews, feedback and development goals.",
        }
    }
}

/// Tabs on the settings page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    Profile,
    Notifications,
    Admin,
}

impl SettingsTab {
    /// Profile and Notifications for everyone, Admin Settings for admins.
    pub fn visible_for(role: Role) -> Vec<SettingsTab> {
        match role {
            Role::Admin => vec![SettingsTab::Profile, SettingsTab::Notifications, SettingsTab::Admin],
            Role::Manager | Role::Employee => vec![SettingsTab::Profile, SettingsTab::Notifications],
        }
    }

    pub fn value(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "profile",
            SettingsTab::Notifications => "notifications",
            SettingsTab::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SettingsTab::Profile => "Profile",
            SettingsTab::Notifications => "Notifications",
            SettingsTab::Admin => "Admin Settings",
        }
    }
}

/// Whether the reviews page offers the "Create Review" action.
pub fn can_create_reviews(role: Role) -> bool {
    Page::ReviewCreate.access_for(role).is_allowed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ALL_ROLES;

    #[test]
    fn each_role_gets_its_own_dashboard() {
        assert_eq!(DashboardView::for_role(Role::Admin), DashboardView::Admin);
        assert_eq!(DashboardView::for_role(Role::Manager), DashboardView::Manager);
        assert_eq!(DashboardView::for_role(Role::Employee), DashboardView::Employee);
    }

    #[test]
    fn absent_role_selects_employee_dashboard() {
        assert_eq!(DashboardView::for_role(Role::default()), DashboardView::Employee);
    }

    #[test]
    fn admin_settings_tab_is_admin_only() {
        for role in ALL_ROLES {
            let tabs = SettingsTab::visible_for(role);
            assert_eq!(&tabs[..2], &[SettingsTab::Profile, SettingsTab::Notifications]);
            assert_eq!(tabs.contains(&SettingsTab::Admin), role == Role::Admin);
        }
    }

    #[test]
    fn create_review_action_for_admin_and_manager() {
        assert!(can_create_reviews(Role::Admin));
        assert!(can_create_reviews(Role::Manager));
        assert!(!can_create_reviews(Role::Employee));
    }
}
