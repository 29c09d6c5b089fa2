use crate::role::Role;
use serde::{Deserialize, Serialize};

/// Glyph shown next to a navigation entry. The UI maps each to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum NavIcon {
    Home,
    ClipboardList,
    BarChart,
    Users,
    Cog,
}

/// One sidebar entry and the roles allowed to see it.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub title: &'static str,
    pub path: &'static str,
    pub icon: NavIcon,
    pub roles: &'static [Role],
}

impl NavItem {
    pub fn is_visible_to(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }
}

/// The portal's navigation list, in display order.
pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        title: "Dashboard",
        path: "/dashboard",
        icon: NavIcon::Home,
        roles: &[Role::Admin, Role::Manager, Role::Employee],
    },
    NavItem {
        title: "Reviews",
        path: "/reviews",
        icon: NavIcon::ClipboardList,
        roles: &[Role::Admin, Role::Manager, Role::Employee],
    },
    NavItem {
        title: "Reports",
        path: "/reports",
        icon: NavIcon::BarChart,
        roles: &[Role::Admin, Role::Manager],
    },
    NavItem {
        title: "Users",
        path: "/users",
        icon: NavIcon::Users,
        roles: &[Role::Admin],
    },
    NavItem {
        title: "Settings",
        path: "/settings",
        icon: NavIcon::Cog,
        roles: &[Role::Admin, Role::Manager, Role::Employee],
    },
];

/// Keep the items whose role set contains `role`, preserving order.
pub fn filter_nav(items: &[NavItem], role: Role) -> Vec<&NavItem> {
    items.iter().filter(|item| item.is_visible_to(role)).collect()
}

/// `filter_nav` over the portal's own navigation list.
pub fn nav_for(role: Role) -> Vec<&'static NavItem> {
    filter_nav(NAV_ITEMS, role)
}

/// Owned form of a navigation entry for JSON responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NavLink {
    pub title: String,
    pub path: String,
    pub icon: NavIcon,
}

impl From<&NavItem> for NavLink {
    fn from(item: &NavItem) -> Self {
        Self {
            title: item.title.to_string(),
            path: item.path.to_string(),
            icon: item.icon,
        }
    }
}
