use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal role held on the client after sign-in.
///
/// Stored and transmitted as the lowercase strings `"admin"`, `"manager"`
/// and `"employee"`. A missing or unrecognised value reads as `Employee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Employee,
}

/// Every role, in the order the portal lists them.
pub const ALL_ROLES: [Role; 3] = [Role::Admin, Role::Manager, Role::Employee];

impl Role {
    /// Exact parse of a stored role string. No trimming or case folding.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Role::Admin),
            "manager" => Some(Role::Manager),
            "employee" => Some(Role::Employee),
            _ => None,
        }
    }

    /// Parse a role string, defaulting to `Employee` for unknown values.
    pub fn from_str_or_default(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Role assigned at sign-in. `"admin"` is checked before `"manager"`,
    /// both as case-sensitive substrings of the email.
    pub fn from_email(email: &str) -> Self {
        if email.contains("admin") {
            Role::Admin
        } else if email.contains("manager") {
            Role::Manager
        } else {
            Role::Employee
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Employee => "Employee",
        }
    }

    /// Name shown in the sidebar footer.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Admin User",
            Role::Manager => "Manager User",
            Role::Employee => "Employee User",
        }
    }

    /// Demo account email; also what the sidebar shows under the name.
    pub fn demo_email(&self) -> &'static str {
        match self {
            Role::Admin => "admin@example.com",
            Role::Manager => "manager@example.com",
            Role::Employee => "employee@example.com",
        }
    }

    /// One-line summary used on the landing page and the sign-in hint.
    pub fn summary(&self) -> &'static str {
        match self {
            Role::Admin => "Full access to all features, user management and system settings.",
            Role::Manager => "Create and manage reviews for team members and view team reports.",
            Role::Employee => "Complete self-assessments and peer reviews and track your progress.",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_with_admin_is_admin() {
        assert_eq!(Role::from_email("admin@example.com"), Role::Admin);
        assert_eq!(Role::from_email("sysadmin@corp.io"), Role::Admin);
    }

    #[test]
    fn email_with_manager_is_manager() {
        assert_eq!(Role::from_email("manager@example.com"), Role::Manager);
        assert_eq!(Role::from_email("team.manager@corp.io"), Role::Manager);
    }

    #[test]
    fn admin_is_checked_before_manager() {
        assert_eq!(Role::from_email("admin.manager@example.com"), Role::Admin);
        assert_eq!(Role::from_email("manager-admin@example.com"), Role::Admin);
    }

    #[test]
    fn anything_else_is_employee() {
        assert_eq!(Role::from_email("employee@example.com"), Role::Employee);
        assert_eq!(Role::from_email("jane@example.com"), Role::Employee);
        assert_eq!(Role::from_email(""), Role::Employee);
    }

    #[test]
    fn email_matching_is_case_sensitive() {
        assert_eq!(Role::from_email("ADMIN@example.com"), Role::Employee);
        assert_eq!(Role::from_email("Manager@example.com"), Role::Employee);
    }

    #[test]
    fn stored_strings_parse_back() {
        for role in ALL_ROLES {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("superuser"), None);
    }

    #[test]
    fn non_canonical_spellings_are_rejected() {
        assert_eq!(Role::parse(" Manager "), None);
        assert_eq!(Role::parse("Admin"), None);
        assert_eq!(Role::parse("ADMIN"), None);
        assert_eq!(Role::parse(" admin "), None);
        assert_eq!(Role::from_str_or_default("Admin"), Role::Employee);
    }

    #[test]
    fn unknown_strings_default_to_employee() {
        assert_eq!(Role::from_str_or_default("superuser"), Role::Employee);
        assert_eq!(Role::from_str_or_default(""), Role::Employee);
        assert_eq!(Role::default(), Role::Employee);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Role::Manager).unwrap(), "\"manager\"");
        let role: Role = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, Role::Admin);
    }

    #[test]
    fn sidebar_identity_follows_role() {
        assert_eq!(Role::Admin.display_name(), "Admin User");
        assert_eq!(Role::Employee.demo_email(), "employee@example.com");
        assert_eq!(Role::Manager.to_string(), "manager");
    }
}
