pub mod dashboard;
pub mod landing;
pub mod not_found;
pub mod reports;
pub mod reviews;
pub mod settings;
pub mod signin;
pub mod signup;
pub mod users;

use crate::guard::AccessGuard;
use crate::session::{use_role, use_session, SessionGate};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdFileText, LdFolder, LdLayoutDashboard, LdLock, LdSettings, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{nav_for, NavIcon, Page, Role};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, InitialsAvatar, Separator,
    Sidebar, SidebarContent, SidebarFooter, SidebarGroup, SidebarGroupLabel, SidebarHeader,
    SidebarInset, SidebarMenu, SidebarMenuButton, SidebarMenuItem, SidebarProvider,
    SidebarTrigger, ToastOptions,
};

use landing::Landing;
use not_found::NotFound;
use signin::SignIn;
use signup::SignUp;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/signin")]
    SignIn {},
    #[route("/signup")]
    SignUp {},
    #[layout(AppLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/reviews?:employee")]
    Reviews { employee: Option<String> },
    #[route("/reviews/create")]
    ReviewCreate {},
    #[route("/reports")]
    Reports {},
    #[route("/settings")]
    Settings {},
    #[route("/users")]
    Users {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Protected page behind this route, if any.
    pub fn page(&self) -> Option<Page> {
        match self {
            Route::Dashboard {} => Some(Page::Dashboard),
            Route::Reviews { .. } => Some(Page::Reviews),
            Route::ReviewCreate {} => Some(Page::ReviewCreate),
            Route::Reports {} => Some(Page::Reports),
            Route::Settings {} => Some(Page::Settings),
            Route::Users {} => Some(Page::Users),
            Route::Landing {} | Route::SignIn {} | Route::SignUp {} | Route::NotFound { .. } => None,
        }
    }

    /// Route for a navigation entry path.
    pub fn from_nav_path(path: &str) -> Option<Self> {
        match Page::from_path(path)? {
            Page::Dashboard => Some(Route::Dashboard {}),
            Page::Reviews => Some(Route::Reviews { employee: None }),
            Page::ReviewCreate => Some(Route::ReviewCreate {}),
            Page::Reports => Some(Route::Reports {}),
            Page::Settings => Some(Route::Settings {}),
            Page::Users => Some(Route::Users {}),
        }
    }
}

fn nav_icon(icon: NavIcon) -> Element {
    match icon {
        NavIcon::Home => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
        NavIcon::ClipboardList => rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
        NavIcon::BarChart => rsx! { Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 } },
        NavIcon::Users => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
        NavIcon::Cog => rsx! { Icon::<LdSettings> { icon: LdSettings, width: 18, height: 18 } },
    }
}

/// Whether the sidebar entry at `path` should be highlighted on `page`.
fn nav_active(path: &str, page: Option<Page>) -> bool {
    match page {
        Some(Page::ReviewCreate) => path == Page::Reviews.path(),
        Some(page) => page.path() == path,
        None => false,
    }
}

/// Sidebar layout for the protected pages.
///
/// Waits for the stored role to load, then shows the navigation entries
/// visible to that role.
#[component]
fn AppLayout() -> Element {
    rsx! {
        SessionGate { LayoutShell {} }
    }
}

#[component]
fn LayoutShell() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let toast = use_toast();

    let role = session.role();
    let active_page = route.page();
    let page_title = active_page.map(|page| page.title()).unwrap_or_default();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider {
            Sidebar {
                SidebarHeader {
                    div { class: "sidebar-brand",
                        span { class: "sidebar-brand-mark",
                            Icon::<LdFileText> { icon: LdFileText, width: 20, height: 20 }
                        }
                        span { class: "sidebar-brand-name", "HR Portal" }
                    }
                }

                Separator {}

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Navigation" }
                        SidebarMenu {
                            for item in nav_for(role) {
                                if let Some(target) = Route::from_nav_path(item.path) {
                                    SidebarMenuItem { key: "{item.path}",
                                        Link { to: target,
                                            SidebarMenuButton { active: nav_active(item.path, active_page),
                                                {nav_icon(item.icon)}
                                                "{item.title}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-identity",
                        InitialsAvatar { name: "{role.display_name()}" }
                        div { class: "sidebar-identity-text",
                            span { class: "sidebar-identity-name", "{role.display_name()}" }
                            span { class: "sidebar-identity-email", "{role.demo_email()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        class: "sidebar-sign-out",
                        onclick: move |_| {
                            session.clear();
                            toast.success(
                                "Logged out. You have been successfully logged out.".to_string(),
                                ToastOptions::new(),
                            );
                            navigator().push(Route::Landing {});
                        },
                        Icon::<LdLock> { icon: LdLock, width: 16, height: 16 }
                        "Sign Out"
                    }
                }
            }

            SidebarInset {
                header { class: "topbar",
                    SidebarTrigger {
                        span { class: "topbar-trigger-icon", "\u{2630}" }
                    }
                    span { class: "topbar-title", "{page_title}" }
                    span { class: "topbar-spacer" }
                    Badge { variant: role_badge_variant(role), "{role.label()}" }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

// Protected route components. Each reads the role once and hands it down.

#[component]
fn Dashboard() -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::Dashboard, role,
            dashboard::DashboardPage { role }
        }
    }
}

#[component]
fn Reviews(employee: Option<String>) -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::Reviews, role,
            reviews::list::ReviewListPage { role, employee }
        }
    }
}

#[component]
fn ReviewCreate() -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::ReviewCreate, role,
            reviews::create::ReviewCreatePage { role }
        }
    }
}

#[component]
fn Reports() -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::Reports, role,
            reports::ReportsPage { role }
        }
    }
}

#[component]
fn Settings() -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::Settings, role,
            settings::SettingsPage { role }
        }
    }
}

#[component]
fn Users() -> Element {
    let role = use_role();
    rsx! {
        AccessGuard { page: Page::Users, role,
            users::UsersPage { role }
        }
    }
}

/// Badge variant for a role label.
fn role_badge_variant(role: Role) -> BadgeVariant {
    match role {
        Role::Admin => BadgeVariant::Destructive,
        Role::Manager => BadgeVariant::Primary,
        Role::Employee => BadgeVariant::Secondary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_nav_path_has_a_route() {
        for role in [Role::Admin, Role::Manager, Role::Employee] {
            for item in nav_for(role) {
                let route = Route::from_nav_path(item.path).unwrap();
                assert_eq!(route.page().map(|p| p.path()), Some(item.path));
            }
        }
    }

    #[test]
    fn public_routes_have_no_page() {
        assert_eq!(Route::Landing {}.page(), None);
        assert_eq!(Route::SignIn {}.page(), None);
        assert_eq!(Route::NotFound { route: vec!["nope".into()] }.page(), None);
    }

    #[test]
    fn review_create_highlights_reviews_entry() {
        assert!(nav_active("/reviews", Some(Page::ReviewCreate)));
        assert!(!nav_active("/reports", Some(Page::ReviewCreate)));
        assert!(nav_active("/users", Some(Page::Users)));
        assert!(!nav_active("/dashboard", None));
    }
}
