use dioxus::prelude::*;
use shared_types::AppError;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, Skeleton};

/// Error card shown when a page's data call fails, with a retry button.
#[component]
pub fn LoadError(title: String, error: String, on_retry: EventHandler<()>) -> Element {
    let message = AppError::friendly_message(&error);

    rsx! {
        Card { class: "load-error",
            CardHeader {
                CardTitle { "Error" }
                CardDescription { "{title}" }
            }
            CardContent {
                p { class: "load-error-text", "{message}" }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_retry.call(()),
                    "Retry"
                }
            }
        }
    }
}

/// Skeleton placeholders while a page loads.
#[component]
pub fn LoadingCards(#[props(default = 3)] count: usize) -> Element {
    rsx! {
        div { class: "loading-cards",
            for i in 0..count {
                Skeleton { key: "{i}", class: "loading-card" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_shows_friendly_text() {
        fn app() -> Element {
            rsx! {
                LoadError {
                    title: "Failed to load reports.",
                    error: "error running server function: boom",
                    on_retry: |_| {},
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("Failed to load reports."));
        assert!(html.contains("Retry"));
    }
}
