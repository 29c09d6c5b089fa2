use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use shared_types::{AppError, EmployeeOption, Review, ReviewDraft};

use crate::portal::{self, AppState};
use crate::role_header::PortalRole;

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ReviewQuery {
    /// Only reviews of this employee.
    pub employee: Option<String>,
}

/// GET /api/reviews
#[utoipa::path(
    get,
    path = "/api/reviews",
    params(
        ReviewQuery,
        ("X-Portal-Role" = Option<String>, Header, description = "admin, manager or employee")
    ),
    responses(
        (status = 200, description = "Reviews", body = Vec<Review>),
        (status = 503, description = "Simulated backend failure", body = AppError)
    ),
    tag = "reviews"
)]
pub async fn list_reviews(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<Vec<Review>>, AppError> {
    portal::reviews(&state, role, query.employee.as_deref())
        .await
        .map(Json)
}

/// POST /api/reviews
#[utoipa::path(
    post,
    path = "/api/reviews",
    request_body = ReviewDraft,
    params(("X-Portal-Role" = Option<String>, Header, description = "admin or manager")),
    responses(
        (status = 201, description = "Review accepted as pending", body = Review),
        (status = 403, description = "Role may not create reviews", body = AppError),
        (status = 422, description = "Invalid draft", body = AppError)
    ),
    tag = "reviews"
)]
pub async fn submit_review(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
    Json(draft): Json<ReviewDraft>,
) -> Result<(StatusCode, Json<Review>), AppError> {
    let review = portal::submit_review(&state, role, draft).await?;
    Ok((StatusCode::CREATED, Json(review)))
}

/// GET /api/reviews/employees
#[utoipa::path(
    get,
    path = "/api/reviews/employees",
    params(("X-Portal-Role" = Option<String>, Header, description = "admin or manager")),
    responses(
        (status = 200, description = "Employees a review can be written for", body = Vec<EmployeeOption>),
        (status = 403, description = "Role may not create reviews", body = AppError)
    ),
    tag = "reviews"
)]
pub async fn list_employees(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
) -> Result<Json<Vec<EmployeeOption>>, AppError> {
    portal::employees(&state, role).await.map(Json)
}
