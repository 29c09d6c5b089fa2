use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, Card, CardContent, CardDescription, CardHeader, CardTitle};

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card { class: "auth-card",
                CardHeader {
                    CardTitle { "Page not found" }
                    CardDescription { "Nothing lives at {path}." }
                }
                CardContent {
                    Link { to: Route::Landing {},
                        Button { "Back to home" }
                    }
                }
            }
        }
    }
}
