use super::RecentActivity;
use crate::components::StatusBadge;
use crate::routes::Route;
use dioxus::prelude::*;
use shared_types::{percent, ManagerDashboard, ReviewStatus};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, InitialsAvatar, ProgressBar, StatCard, TabContent, TabList,
    TabTrigger, Tabs,
};

#[component]
pub fn ManagerView(data: ManagerDashboard) -> Element {
    let stats = data.stats.clone();
    let done = data
        .team
        .iter()
        .filter(|m| m.review_status == ReviewStatus::Completed)
        .count() as u32;
    let team_size = data.team.len() as u32;

    rsx! {
        Tabs { default_value: "team", horizontal: true,
            TabList {
                TabTrigger { value: "team", index: 0usize, "My Team" }
                TabTrigger { value: "status", index: 1usize, "Review Status" }
                TabTrigger { value: "activity", index: 2usize, "Recent Activity" }
            }

            TabContent { value: "team", index: 0usize,
                Card {
                    CardHeader {
                        CardTitle { "My Team" }
                        CardDescription { "Select a team member to see their reviews" }
                    }
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Name" }
                                DataTableColumn { "Title" }
                                DataTableColumn { "Review Status" }
                                DataTableColumn { "" }
                            }
                            DataTableBody {
                                for member in data.team.iter() {
                                    DataTableRow { key: "{member.id}",
                                        DataTableCell {
                                            div { class: "team-member",
                                                InitialsAvatar { name: member.name.clone() }
                                                span { "{member.name}" }
                                            }
                                        }
                                        DataTableCell { "{member.title}" }
                                        DataTableCell {
                                            StatusBadge { status: member.review_status }
                                        }
                                        DataTableCell {
                                            Link {
                                                to: Route::Reviews { employee: Some(member.id.clone()) },
                                                Button {
                                                    variant: ButtonVariant::Ghost,
                                                    size: ButtonSize::Small,
                                                    "View Reviews"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "status", index: 1usize,
                div { class: "stat-grid",
                    StatCard { title: "Completed", value: "{stats.completed}", caption: "{stats.completion_rate}% completion rate" }
                    StatCard { title: "In Progress", value: "{stats.in_progress}", caption: "{stats.share_of_total(stats.in_progress)}% of total" }
                    StatCard { title: "Pending", value: "{stats.pending}", caption: "{stats.share_of_total(stats.pending)}% of total" }
                }

                div { class: "dashboard-columns",
                    Card {
                        CardHeader {
                            CardTitle { "Team Review Progress" }
                            CardDescription { "{done} of {team_size} reviews complete" }
                        }
                        CardContent {
                            ProgressBar {
                                value: f64::from(percent(done, team_size)),
                                label: "Complete",
                                detail: "{percent(done, team_size)}%",
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Upcoming Deadlines" }
                        }
                        CardContent {
                            ul { class: "deadline-list",
                                for deadline in data.deadlines.iter() {
                                    li { key: "{deadline.title}", class: "deadline-item",
                                        span { "{deadline.title}" }
                                        Badge { variant: BadgeVariant::Outline, "Due in {deadline.due_in_days} days" }
                                    }
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
