use crate::components::{LoadError, LoadingCards};
use dioxus::prelude::*;
use shared_types::{DirectoryUser, Role};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, InitialsAvatar, PageDescription, PageHeader, PageTitle,
};

/// `/users`: the admin-only directory.
#[component]
pub fn UsersPage(role: Role) -> Element {
    let mut users = use_resource(use_reactive!(|role| async move {
        server::api::list_directory(role).await
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./users.css") }

        div { class: "users-page",
            PageHeader {
                PageTitle { "Users" }
                PageDescription { "Everyone with an account on the portal." }
            }

            match &*users.read() {
                None => rsx! { LoadingCards { count: 6 } },
                Some(Err(err)) => rsx! {
                    LoadError {
                        title: "Failed to load users.",
                        error: err.to_string(),
                        on_retry: move |_| users.restart(),
                    }
                },
                Some(Ok(list)) => rsx! { UserGrid { users: list.clone() } },
            }
        }
    }
}

#[component]
fn UserGrid(users: Vec<DirectoryUser>) -> Element {
    rsx! {
        div { class: "user-grid",
            for user in users.iter() {
                Card { key: "{user.id}", class: "user-card",
                    CardContent { class: "user-card-body",
                        InitialsAvatar { name: user.name.clone() }
                        div { class: "user-card-text",
                            p { class: "user-card-name", "{user.name}" }
                            p { class: "user-card-email", "{user.email}" }
                        }
                        Badge { variant: BadgeVariant::Secondary, "{user.title}" }
                    }
                }
            }
        }
    }
}
