use super::RecentActivity;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdFileText, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{percent, AdminDashboard, TrendPoint};
use shared_ui::{
    Card, CardContent, CardDescription, CardHeader, CardTitle, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, ProgressBar, StatCard,
    TabContent, TabList, TabTrigger, Tabs,
};

#[component]
pub fn AdminView(data: AdminDashboard) -> Element {
    let stats = data.stats.clone();

    rsx! {
        Tabs { default_value: "overview", horizontal: true,
            TabList {
                TabTrigger { value: "overview", index: 0usize, "Overview" }
                TabTrigger { value: "departments", index: 1usize, "Departments" }
                TabTrigger { value: "activity", index: 2usize, "Recent Activity" }
            }

            TabContent { value: "overview", index: 0usize,
                div { class: "stat-grid",
                    StatCard {
                        title: "Total Reviews",
                        value: "{stats.total}",
                        caption: "This review cycle",
                        icon: rsx! { Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "Completed",
                        value: "{stats.completed}",
                        caption: "{stats.completion_rate}% completion rate",
                        icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "In Progress",
                        value: "{stats.in_progress}",
                        caption: "{stats.share_of_total(stats.in_progress)}% of total",
                        icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
                    }
                    StatCard {
                        title: "Pending",
                        value: "{stats.pending}",
                        caption: "{stats.share_of_total(stats.pending)}% of total",
                        icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                    }
                }

                div { class: "dashboard-columns",
                    CompletionTrend { points: data.trend.clone() }

                    Card {
                        CardHeader {
                            CardTitle { "Department Progress" }
                            CardDescription { "Completed reviews per department" }
                        }
                        CardContent { class: "progress-list",
                            for dept in data.departments.iter() {
                                ProgressBar {
                                    key: "{dept.name}",
                                    value: f64::from(dept.percent()),
                                    label: "{dept.name}",
                                    detail: "{dept.completed}/{dept.total}",
                                }
                            }
                        }
                    }
                }
            }

            TabContent { value: "departments", index: 1usize,
                Card {
                    CardHeader {
                        CardTitle { "Department Overview" }
                        CardDescription { "Review status by department" }
                    }
                    CardContent {
                        DataTable {
                            DataTableHeader {
                                DataTableColumn { "Department" }
                                DataTableColumn { "Completed" }
                                DataTableColumn { "Pending" }
                                DataTableColumn { "Total" }
                                DataTableColumn { "Progress" }
                            }
                            DataTableBody {
                                for dept in data.departments.iter() {
                                    DataTableRow { key: "{dept.name}",
                                        DataTableCell { "{dept.name}" }
                                        DataTableCell { "{dept.completed}" }
                                        DataTableCell { "{dept.pending()}" }
                                        DataTableCell { "{dept.total}" }
                                        DataTableCell { "{dept.percent()}%" }
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

/// Bar chart of completed versus total reviews per month.
#[component]
fn CompletionTrend(points: Vec<TrendPoint>) -> Element {
    let peak = points.iter().map(|p| p.total).max().unwrap_or(0);

    rsx! {
        Card {
            CardHeader {
                CardTitle { "Review Completion Trend" }
                CardDescription { "Completed reviews against the total each month" }
            }
            CardContent {
                div { class: "trend-chart",
                    for point in points.iter() {
                        div { key: "{point.label}", class: "trend-column",
                            div { class: "trend-bars",
                                div {
                                    class: "trend-bar trend-bar-total",
                                    style: "height: {percent(point.total, peak)}%",
                                    title: "{point.total} total",
                                }
                                div {
                                    class: "trend-bar trend-bar-completed",
                                    style: "height: {percent(point.completed, peak)}%",
                                    title: "{point.completed} completed",
                                }
                            }
                            span { class: "trend-label", "{point.label}" }
                        }
                    }
                }
            }
        }
    }
}
