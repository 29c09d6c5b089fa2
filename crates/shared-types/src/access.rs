use crate::navigation::NAV_ITEMS;
use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Outcome of a page guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "lowercase")]
pub enum Access {
    Allowed,
    Denied,
}

impl Access {
    pub fn is_allowed(self) -> bool {
        matches!(self, Access::Allowed)
    }
}

/// Allowed iff `role` is in `permitted`.
pub fn check_access(role: Role, permitted: &[Role]) -> Access {
    if permitted.contains(&role) {
        Access::Allowed
    } else {
        Access::Denied
    }
}

const REVIEW_AUTHORS: &[Role] = &[Role::Admin, Role::Manager];

/// Protected pages of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Dashboard,
    Reviews,
    ReviewCreate,
    Reports,
    Users,
    Settings,
}

pub const ALL_PAGES: [Page; 6] = [
    Page::Dashboard,
    Page::Reviews,
    Page::ReviewCreate,
    Page::Reports,
    Page::Users,
    Page::Settings,
];

impl Page {
    pub fn path(&self) -> &'static str {
        match self {
            Page::Dashboard => "/dashboard",
            Page::Reviews => "/reviews",
            Page::ReviewCreate => "/reviews/create",
            Page::Reports => "/reports",
            Page::Users => "/users",
            Page::Settings => "/settings",
        }
    }

    /// Identifier used in `/api/access/{page}`.
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Reviews => "reviews",
            Page::ReviewCreate => "review-create",
            Page::Reports => "reports",
            Page::Users => "users",
            Page::Settings => "settings",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Reviews => "Reviews",
            Page::ReviewCreate => "Create Review",
            Page::Reports => "Reports",
            Page::Users => "Users",
            Page::Settings => "Settings",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        ALL_PAGES.into_iter().find(|page| page.slug() == slug)
    }

    /// Match a route path, ignoring any query string and trailing slash.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split('?').next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };
        ALL_PAGES.into_iter().find(|page| page.path() == path)
    }

    /// Roles allowed on this page. Pages in the navigation list take the
    /// list's role set.
    pub fn permitted_roles(&self) -> &'static [Role] {
        if let Page::ReviewCreate = self {
            return REVIEW_AUTHORS;
        }
        NAV_ITEMS
            .iter()
            .find(|item| item.path == self.path())
            .map(|item| item.roles)
            .unwrap_or(&[])
    }

    pub fn access_for(&self, role: Role) -> Access {
        check_access(role, self.permitted_roles())
    }

    /// Body of the static panel rendered on a denied page.
    pub fn denied_message(&self) -> String {
        format!(
            "You do not have permission to view {}.",
            self.title().to_lowercase()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::ALL_ROLES;

    #[test]
    fn check_access_is_set_membership() {
        assert_eq!(check_access(Role::Admin, &[Role::Admin]), Access::Allowed);
        assert_eq!(check_access(Role::Manager, &[Role::Admin]), Access::Denied);
        assert_eq!(check_access(Role::Employee, &[]), Access::Denied);
    }

    #[test]
    fn guard_denies_iff_role_not_permitted_for_every_nav_page() {
        for item in NAV_ITEMS {
            let page = Page::from_path(item.path).unwrap();
            assert_eq!(page.permitted_roles(), item.roles);
            for role in ALL_ROLES {
                let denied = page.access_for(role) == Access::Denied;
                assert_eq!(denied, !item.roles.contains(&role), "{:?} on {}", role, item.path);
            }
        }
    }

    #[test]
    fn manager_is_denied_users_but_allowed_reports() {
        assert_eq!(Page::Users.access_for(Role::Manager), Access::Denied);
        assert_eq!(Page::Reports.access_for(Role::Manager), Access::Allowed);
    }

    #[test]
    fn review_creation_is_admin_and_manager_only() {
        assert!(Page::ReviewCreate.access_for(Role::Admin).is_allowed());
        assert!(Page::ReviewCreate.access_for(Role::Manager).is_allowed());
        assert!(!Page::ReviewCreate.access_for(Role::Employee).is_allowed());
    }

    #[test]
    fn from_path_ignores_query_and_trailing_slash() {
        assert_eq!(Page::from_path("/reviews?employee=3"), Some(Page::Reviews));
        assert_eq!(Page::from_path("/reports/"), Some(Page::Reports));
        assert_eq!(Page::from_path("/reviews/create"), Some(Page::ReviewCreate));
        assert_eq!(Page::from_path("/"), None);
        assert_eq!(Page::from_path("/nowhere"), None);
    }

    #[test]
    fn slugs_round_trip_through_serde_names() {
        for page in ALL_PAGES {
            assert_eq!(Page::from_slug(page.slug()), Some(page));
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.slug()));
        }
        assert_eq!(Page::from_slug("admin"), None);
    }

    #[test]
    fn denied_message_names_the_page() {
        assert_eq!(
            Page::Reports.denied_message(),
            "You do not have permission to view reports."
        );
    }
}
