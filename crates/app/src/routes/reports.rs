use crate::components::{LoadError, LoadingCards};
use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFolder;
use dioxus_free_icons::Icon;
use shared_types::{Department, Period, Report, ReportFilters, Role, DEPARTMENTS, PERIODS};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader,
    CardTitle, FormSelect, PageDescription, PageHeader, PageTitle,
};

fn updated_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// `/reports` with department and period filters.
#[component]
pub fn ReportsPage(role: Role) -> Element {
    let mut filters = use_signal(ReportFilters::default);

    let mut list = use_resource(move || {
        let current = filters();
        async move { server::api::list_reports(role, current).await }
    });

    let current = filters();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reports.css") }

        div { class: "reports-page",
            PageHeader {
                PageTitle { "Reports" }
                PageDescription { "Performance reports by department and review period." }
            }

            Card { class: "report-filters",
                CardContent { class: "report-filters-row",
                    FormSelect {
                        id: "department",
                        label: "Department",
                        value: "{current.department.value()}",
                        onchange: move |e: FormEvent| {
                            if let Some(department) = Department::from_value(&e.value()) {
                                filters.write().department = department;
                            }
                        },
                        for department in DEPARTMENTS {
                            option { key: "{department.value()}", value: "{department.value()}", "{department.label()}" }
                        }
                    }
                    FormSelect {
                        id: "period",
                        label: "Time Period",
                        value: "{current.period.value()}",
                        onchange: move |e: FormEvent| {
                            if let Some(period) = Period::from_value(&e.value()) {
                                filters.write().period = period;
                            }
                        },
                        for period in PERIODS {
                            option { key: "{period.value()}", value: "{period.value()}", "{period.label()}" }
                        }
                    }
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: current.is_default(),
                        onclick: move |_| filters.write().reset(),
                        "Reset Filters"
                    }
                }
            }

            match &*list.read() {
                None => rsx! { LoadingCards {} },
                Some(Err(err)) => rsx! {
                    LoadError {
                        title: "Failed to load reports.",
                        error: err.to_string(),
                        on_retry: move |_| list.restart(),
                    }
                },
                Some(Ok(result)) => rsx! {
                    p { class: "report-scope",
                        "Showing "
                        Badge { variant: BadgeVariant::Outline, "{result.filters.department.label()}" }
                        " for "
                        Badge { variant: BadgeVariant::Outline, "{result.filters.period.label()}" }
                    }
                    ReportGrid { reports: result.reports.clone() }
                },
            }
        }
    }
}

#[component]
fn ReportGrid(reports: Vec<Report>) -> Element {
    if reports.is_empty() {
        return rsx! {
            p { class: "report-empty", "No reports match these filters." }
        };
    }

    rsx! {
        div { class: "report-grid",
            for report in reports.iter() {
                Card { key: "{report.id}", class: "report-card",
                    CardHeader {
                        CardTitle {
                            span { class: "report-card-title",
                                Icon::<LdFolder> { icon: LdFolder, width: 16, height: 16 }
                                "{report.name}"
                            }
                        }
                        CardDescription { "{report.description}" }
                    }
                    CardContent {
                        p { class: "report-updated", "Last updated: {updated_label(report.last_updated)}" }
                    }
                }
            }
        }
    }
}
