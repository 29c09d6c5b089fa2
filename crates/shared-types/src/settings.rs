use crate::role::Role;
use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

/// Editable profile shown on the first settings tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ProfileSettings {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub bio: String,
}

impl ProfileSettings {
    /// Starting values for the signed-in role.
    pub fn for_role(role: Role) -> Self {
        Self {
            name: role.display_name().to_string(),
            email: role.demo_email().to_string(),
            job_title: String::new(),
            bio: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum NotificationFrequency {
    #[default]
    Immediate,
    Daily,
    Weekly,
}

pub const NOTIFICATION_FREQUENCIES: [NotificationFrequency; 3] = [
    NotificationFrequency::Immediate,
    NotificationFrequency::Daily,
    NotificationFrequency::Weekly,
];

impl NotificationFrequency {
    pub fn value(&self) -> &'static str {
        match self {
            NotificationFrequency::Immediate => "immediate",
            NotificationFrequency::Daily => "daily",
            NotificationFrequency::Weekly => "weekly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationFrequency::Immediate => "Immediate",
            NotificationFrequency::Daily => "Daily Digest",
            NotificationFrequency::Weekly => "Weekly Digest",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        NOTIFICATION_FREQUENCIES.into_iter().find(|f| f.value() == value)
    }
}

/// Which emails the user receives, and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NotificationPreferences {
    pub review_assigned: bool,
    pub review_completed: bool,
    pub review_reminder: bool,
    pub system_updates: bool,
    pub team_changes: bool,
    pub performance_goals: bool,
    #[serde(default)]
    pub frequency: NotificationFrequency,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            review_assigned: true,
            review_completed: true,
            review_reminder: true,
            system_updates: false,
            team_changes: true,
            performance_goals: true,
            frequency: NotificationFrequency::Immediate,
        }
    }
}

/// Toggleable notification kinds, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    ReviewAssigned,
    ReviewCompleted,
    ReviewReminder,
    SystemUpdates,
    TeamChanges,
    PerformanceGoals,
}

pub const NOTIFICATION_KINDS: [NotificationKind; 6] = [
    NotificationKind::ReviewAssigned,
    NotificationKind::ReviewCompleted,
    NotificationKind::ReviewReminder,
    NotificationKind::SystemUpdates,
    NotificationKind::TeamChanges,
    NotificationKind::PerformanceGoals,
];

impl NotificationKind {
    pub fn id(&self) -> &'static str {
        match self {
            NotificationKind::ReviewAssigned => "review-assigned",
            NotificationKind::ReviewCompleted => "review-completed",
            NotificationKind::ReviewReminder => "review-reminder",
            NotificationKind::SystemUpdates => "system-updates",
            NotificationKind::TeamChanges => "team-changes",
            NotificationKind::PerformanceGoals => "performance-goals",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NotificationKind::ReviewAssigned => "Review Assigned",
            NotificationKind::ReviewCompleted => "Review Completed",
            NotificationKind::ReviewReminder => "Review Reminders",
            NotificationKind::SystemUpdates => "System Updates",
            NotificationKind::TeamChanges => "Team Changes",
            NotificationKind::PerformanceGoals => "Performance Goals",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            NotificationKind::ReviewAssigned => "Receive an email when a review is assigned to you.",
            NotificationKind::ReviewCompleted => "Receive an email when a review about you is completed.",
            NotificationKind::ReviewReminder => "Receive reminder emails about upcoming review deadlines.",
            NotificationKind::SystemUpdates => "Receive emails about system updates and maintenance.",
            NotificationKind::TeamChanges => "Receive emails when there are changes to your team structure.",
            NotificationKind::PerformanceGoals => "Receive emails about updates to your performance goals.",
        }
    }
}

impl NotificationPreferences {
    pub fn is_enabled(&self, kind: NotificationKind) -> bool {
        match kind {
            NotificationKind::ReviewAssigned => self.review_assigned,
            NotificationKind::ReviewCompleted => self.review_completed,
            NotificationKind::ReviewReminder => self.review_reminder,
            NotificationKind::SystemUpdates => self.system_updates,
            NotificationKind::TeamChanges => self.team_changes,
            NotificationKind::PerformanceGoals => self.performance_goals,
        }
    }

    pub fn set(&mut self, kind: NotificationKind, enabled: bool) {
        let slot = match kind {
            NotificationKind::ReviewAssigned => &mut self.review_assigned,
            NotificationKind::ReviewCompleted => &mut self.review_completed,
            NotificationKind::ReviewReminder => &mut self.review_reminder,
            NotificationKind::SystemUpdates => &mut self.system_updates,
            NotificationKind::TeamChanges => &mut self.team_changes,
            NotificationKind::PerformanceGoals => &mut self.performance_goals,
        };
        *slot = enabled;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum ReviewFrequency {
    #[default]
    Quarterly,
    Biannual,
    Annual,
}

pub const REVIEW_FREQUENCIES: [ReviewFrequency; 3] = [
    ReviewFrequency::Quarterly,
    ReviewFrequency::Biannual,
    ReviewFrequency::Annual,
];

impl ReviewFrequency {
    pub fn value(&self) -> &'static str {
        match self {
            ReviewFrequency::Quarterly => "quarterly",
            ReviewFrequency::Biannual => "biannual",
            ReviewFrequency::Annual => "annual",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewFrequency::Quarterly => "Quarterly",
            ReviewFrequency::Biannual => "Bi-Annual",
            ReviewFrequency::Annual => "Annual",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        REVIEW_FREQUENCIES.into_iter().find(|f| f.value() == value)
    }
}

/// A capability switch on the Permissions tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct RolePermission {
    pub role: Role,
    pub key: String,
    pub label: String,
    pub enabled: bool,
}

fn permission(role: Role, key: &str, label: &str) -> RolePermission {
    RolePermission {
        role,
        key: key.to_string(),
        label: label.to_string(),
        enabled: true,
    }
}

/// System-wide settings editable by admins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct AdminSettings {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Company name is required"))
    )]
    pub company_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Enter a valid domain"))
    )]
    pub company_domain: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid system email"))
    )]
    pub system_email: String,
    pub maintenance_mode: bool,
    pub debug_mode: bool,
    pub review_frequency: ReviewFrequency,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 90, message = "Review window must be between 1 and 90 days"))
    )]
    pub review_window_days: u32,
    pub enable_peer_reviews: bool,
    pub enable_self_assessments: bool,
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, max = 30, message = "Reminder days must be between 1 and 30"))
    )]
    pub reminder_days: u32,
    pub template_name: String,
    pub template_description: String,
    pub permissions: Vec<RolePermission>,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            company_name: "Acme Corporation".to_string(),
            company_domain: "acmecorp.com".to_string(),
            system_email: "system@acmecorp.com".to_string(),
            maintenance_mode: false,
            debug_mode: false,
            review_frequency: ReviewFrequency::Quarterly,
            review_window_days: 14,
            enable_peer_reviews: true,
            enable_self_assessments: true,
            reminder_days: 3,
            template_name: "Standard Performance Review".to_string(),
            template_description: "Standard template for quarterly performance reviews.".to_string(),
            permissions: vec![
                permission(Role::Admin, "manage-users", "Manage Users"),
                permission(Role::Admin, "manage-reviews", "Manage All Reviews"),
                permission(Role::Admin, "system-settings", "System Settings"),
                permission(Role::Manager, "team-reviews", "Manage Team Reviews"),
                permission(Role::Manager, "view-reports", "View Team Reports"),
                permission(Role::Manager, "set-goals", "Set Performance Goals"),
                permission(Role::Employee, "self-review", "Submit Self Reviews"),
                permission(Role::Employee, "peer-review", "Submit Peer Reviews"),
                permission(Role::Employee, "view-history", "View Review History"),
            ],
        }
    }
}

impl AdminSettings {
    pub fn permissions_for(&self, role: Role) -> impl Iterator<Item = (usize, &RolePermission)> {
        self.permissions
            .iter()
            .enumerate()
            .filter(move |(_, p)| p.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_defaults() {
        let prefs = NotificationPreferences::default();
        assert!(prefs.review_assigned);
        assert!(!prefs.system_updates);
        assert_eq!(prefs.frequency, NotificationFrequency::Immediate);
    }

    #[test]
    fn toggling_a_kind_flips_only_that_field() {
        let mut prefs = NotificationPreferences::default();
        prefs.set(NotificationKind::SystemUpdates, true);
        prefs.set(NotificationKind::TeamChanges, false);
        assert!(prefs.is_enabled(NotificationKind::SystemUpdates));
        assert!(!prefs.is_enabled(NotificationKind::TeamChanges));
        assert!(prefs.is_enabled(NotificationKind::ReviewReminder));
    }

    #[test]
    fn admin_defaults() {
        let settings = AdminSettings::default();
        assert_eq!(settings.company_name, "Acme Corporation");
        assert_eq!(settings.review_window_days, 14);
        assert_eq!(settings.reminder_days, 3);
        assert_eq!(settings.permissions_for(Role::Manager).count(), 3);
        assert!(settings.permissions.iter().all(|p| p.enabled));
    }

    #[test]
    fn profile_starts_from_role_identity() {
        let profile = ProfileSettings::for_role(Role::Manager);
        assert_eq!(profile.name, "Manager User");
        assert_eq!(profile.email, "manager@example.com");
    }

    #[test]
    fn select_values_parse_back() {
        assert_eq!(NotificationFrequency::from_value("weekly"), Some(NotificationFrequency::Weekly));
        assert_eq!(ReviewFrequency::from_value("biannual"), Some(ReviewFrequency::Biannual));
        assert_eq!(ReviewFrequency::from_value("monthly"), None);
    }
}
