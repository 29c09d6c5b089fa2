use super::RecentActivity;
use crate::components::StatusBadge;
use dioxus::prelude::*;
use shared_types::{percent, EmployeeDashboard, ReviewMilestone};
use shared_ui::{
    Badge, BadgeVariant, Card, CardContent, CardDescription, CardHeader, CardTitle, ProgressBar,
    TabContent, TabList, TabTrigger, Tabs,
};

#[component]
fn MilestoneCard(title: String, milestone: ReviewMilestone) -> Element {
    rsx! {
        Card { class: "milestone-card",
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "Due {milestone.due}" }
            }
            CardContent {
                StatusBadge { status: milestone.status }
            }
        }
    }
}

#[component]
pub fn EmployeeView(data: EmployeeDashboard) -> Element {
    let peer = data.peer_reviews.clone();
    let peer_percent = percent(peer.completed, peer.total);

    rsx! {
        Tabs { default_value: "reviews", horizontal: true,
            TabList {
                TabTrigger { value: "reviews", index: 0usize, "My Reviews" }
                TabTrigger { value: "performance", index: 1usize, "Performance" }
                TabTrigger { value: "activity", index: 2usize, "Recent Activity" }
            }

            TabContent { value: "reviews", index: 0usize,
                div { class: "stat-grid",
                    MilestoneCard { title: "Self Assessment", milestone: data.self_review.clone() }
                    Card { class: "milestone-card",
                        CardHeader {
                            CardTitle { "Peer Reviews" }
                            CardDescription { "Due {peer.due}" }
                        }
                        CardContent {
                            ProgressBar {
                                value: f64::from(peer_percent),
                                label: "Complete",
                                detail: "{peer.completed}/{peer.total}",
                            }
                        }
                    }
                    MilestoneCard { title: "Manager Review", milestone: data.manager_review.clone() }
                }

                Card {
                    CardHeader {
                        CardTitle { "Upcoming Reviews" }
                    }
                    CardContent {
                        ul { class: "deadline-list",
                            for deadline in data.upcoming.iter() {
                                li { key: "{deadline.title}", class: "deadline-item",
                                    span { "{deadline.title}" }
                                    Badge { variant: BadgeVariant::Outline, "Due in {deadline.due_in_days} days" }
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "performance", index: 1usize,
                div { class: "dashboard-columns",
                    Card {
                        CardHeader {
                            CardTitle { "Performance Summary" }
                            CardDescription { "Ratings from your last review" }
                        }
                        CardContent { class: "progress-list",
                            for skill in data.skills.iter() {
                                ProgressBar {
                                    key: "{skill.name}",
                                    value: f64::from(skill.percent()),
                                    label: "{skill.name}",
                                    detail: "{skill.rating}/{skill.max_rating}",
                                }
                            }
                            blockquote { class: "manager-feedback", "{data.manager_feedback}" }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Development Goals" }
                        }
                        CardContent { class: "progress-list",
                            for goal in data.goals.iter() {
                                div { key: "{goal.title}", class: "goal",
                                    ProgressBar {
                                        value: f64::from(goal.progress),
                                        label: "{goal.title}",
                                        detail: "{goal.progress}%",
                                    }
                                    p { class: "goal-description", "{goal.description}" }
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "activity", index: 2usize,
                RecentActivity { items: data.activity.clone() }
            }
        }
    }
}
