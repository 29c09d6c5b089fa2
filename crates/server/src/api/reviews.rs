use dioxus::prelude::*;
use shared_types::{EmployeeOption, Review, ReviewDraft, Role};

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_reviews(
    role: Role,
    employee: Option<String>,
) -> Result<Vec<Review>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::reviews(&AppState::from_config(), role, employee.as_deref())
        .await
        .map_err(|e| e.into_server_fn_error())
}

/// Choices for the employee dropdown on the review form.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_employees(role: Role) -> Result<Vec<EmployeeOption>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::employees(&AppState::from_config(), role)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(draft), fields(subject = %draft.subject)))]
#[server]
pub async fn submit_review(role: Role, draft: ReviewDraft) -> Result<Review, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::submit_review(&AppState::from_config(), role, draft)
        .await
        .map_err(|e| e.into_server_fn_error())
}
