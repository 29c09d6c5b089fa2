use dioxus::prelude::*;
use shared_types::ReviewStatus;
use shared_ui::{Badge, BadgeVariant};

pub fn status_variant(status: ReviewStatus) -> BadgeVariant {
    match status {
        ReviewStatus::Completed => BadgeVariant::Success,
        ReviewStatus::InProgress => BadgeVariant::Warning,
        ReviewStatus::Pending => BadgeVariant::Secondary,
    }
}

#[component]
pub fn StatusBadge(status: ReviewStatus) -> Element {
    rsx! {
        Badge { variant: status_variant(status), "{status.label()}" }
    }
}
