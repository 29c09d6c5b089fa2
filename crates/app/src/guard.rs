use dioxus::prelude::*;
use shared_types::{Page, Role};
use shared_ui::{Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Render `children` only when `role` may open `page`; otherwise a static
/// "Access Denied" panel.
#[component]
pub fn AccessGuard(page: Page, role: Role, children: Element) -> Element {
    if page.access_for(role).is_allowed() {
        rsx! { {children} }
    } else {
        rsx! { AccessDenied { page } }
    }
}

#[component]
pub fn AccessDenied(page: Page) -> Element {
    let message = page.denied_message();

    rsx! {
        div { class: "access-denied",
            Card { class: "access-denied-card",
                CardHeader {
                    CardTitle { "Access Denied" }
                    CardDescription { "{message}" }
                }
                CardContent {
                    p { class: "access-denied-hint",
                        "Contact your administrator if you need access to this page."
                    }
                }
            }
        }
    }
}
