use dioxus::prelude::*;
use shared_types::Activity;
use shared_ui::{Avatar, AvatarFallback, Card, CardContent, CardDescription, CardHeader, CardTitle};

/// Recent activity feed shared by all three dashboards.
#[component]
pub fn RecentActivity(items: Vec<Activity>) -> Element {
    rsx! {
        Card { class: "activity-card",
            CardHeader {
                CardTitle { "Recent Activity" }
                CardDescription { "Latest review updates across the portal" }
            }
            CardContent {
                if items.is_empty() {
                    p { class: "activity-empty", "No recent activity." }
                }
                ul { class: "activity-list",
                    for item in items {
                        li { key: "{item.id}", class: "activity-item",
                            Avatar {
                                AvatarFallback { "{item.initials()}" }
                            }
                            div { class: "activity-text",
                                p {
                                    span { class: "activity-actor", "{item.actor}" }
                                    " {item.action} "
                                    span { class: "activity-subject", "{item.subject}" }
                                }
                                span { class: "activity-time", "{item.timestamp}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_actor_action_and_time() {
        fn app() -> Element {
            rsx! {
                RecentActivity {
                    items: vec![Activity {
                        id: 1,
                        actor: "John Smith".into(),
                        action: "completed".into(),
                        subject: "Self Assessment".into(),
                        timestamp: "2 hours ago".into(),
                    }],
                }
            }
        }
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("John Smith"));
        assert!(html.contains("Self Assessment"));
        assert!(html.contains("2 hours ago"));
        assert!(!html.contains("No recent activity."));
    }
}
