mod activity;
mod admin;
mod employee;
mod manager;

pub use activity::RecentActivity;

use crate::components::{LoadError, LoadingCards};
use dioxus::prelude::*;
use shared_types::{DashboardSnapshot, DashboardView, Role};
use shared_ui::{PageDescription, PageHeader, PageTitle};

/// `/dashboard`: one of three views, chosen by the signed-in role.
#[component]
pub fn DashboardPage(role: Role) -> Element {
    let mut snapshot = use_resource(use_reactive!(|role| async move {
        server::api::get_dashboard(role).await
    }));

    let view = DashboardView::for_role(role);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard-page",
            PageHeader {
                PageTitle { "{view.title()}" }
                PageDescription { "{view.subtitle()}" }
            }

            match &*snapshot.read() {
                None => rsx! { LoadingCards { count: 4 } },
                Some(Err(err)) => rsx! {
                    LoadError {
                        title: "Failed to load dashboard data.",
                        error: err.to_string(),
                        on_retry: move |_| snapshot.restart(),
                    }
                },
                Some(Ok(DashboardSnapshot::Admin(data))) => rsx! {
                    admin::AdminView { data: data.clone() }
                },
                Some(Ok(DashboardSnapshot::Manager(data))) => rsx! {
                    manager::ManagerView { data: data.clone() }
                },
                Some(Ok(DashboardSnapshot::Employee(data))) => rsx! {
                    employee::EmployeeView { data: data.clone() }
                },
            }
        }
    }
}
