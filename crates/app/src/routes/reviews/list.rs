use crate::components::{LoadError, LoadingCards, StatusBadge};
use crate::routes::Route;
use chrono::NaiveDate;
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdFileText;
use dioxus_free_icons::Icon;
use shared_types::{can_create_reviews, Review, Role};
use shared_ui::{
    Button, ButtonSize, ButtonVariant, Card, CardContent, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow, PageActions, PageDescription,
    PageHeader, PageTitle,
};

/// `/reviews`, optionally narrowed to one employee by `?employee=<id>`.
#[component]
pub fn ReviewListPage(role: Role, employee: Option<String>) -> Element {
    let mut reviews = use_resource(use_reactive!(|role, employee| async move {
        server::api::list_reviews(role, employee).await
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./reviews.css") }

        div { class: "reviews-page",
            PageHeader {
                PageTitle { "Performance Reviews" }
                PageDescription { "Self assessments, peer reviews and manager evaluations." }
                if can_create_reviews(role) {
                    PageActions {
                        Link { to: Route::ReviewCreate {},
                            Button { "Create Review" }
                        }
                    }
                }
            }

            if let Some(id) = employee.as_ref() {
                div { class: "reviews-filter",
                    span { "Showing reviews for employee #{id}" }
                    Link { to: Route::Reviews { employee: None },
                        Button { variant: ButtonVariant::Ghost, size: ButtonSize::Small, "Clear filter" }
                    }
                }
            }

            match &*reviews.read() {
                None => rsx! { LoadingCards {} },
                Some(Err(err)) => rsx! {
                    LoadError {
                        title: "Failed to load reviews.",
                        error: err.to_string(),
                        on_retry: move |_| reviews.restart(),
                    }
                },
                Some(Ok(list)) => rsx! { ReviewTable { reviews: list.clone() } },
            }
        }
    }
}

fn due_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[component]
fn ReviewTable(reviews: Vec<Review>) -> Element {
    rsx! {
        Card {
            CardContent {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Type" }
                        DataTableColumn { "Subject" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Due Date" }
                    }
                    DataTableBody {
                        if reviews.is_empty() {
                            DataTableEmpty { colspan: 4, message: "No reviews found." }
                        }
                        for review in reviews.iter() {
                            DataTableRow { key: "{review.id}",
                                DataTableCell {
                                    span { class: "review-type",
                                        Icon::<LdFileText> { icon: LdFileText, width: 14, height: 14 }
                                        "{review.review_type.label()}"
                                    }
                                }
                                DataTableCell { "{review.subject}" }
                                DataTableCell {
                                    StatusBadge { status: review.status }
                                }
                                DataTableCell { "{due_label(review.due_date)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
