use axum::{extract::Path, Json};
use shared_types::{AccessDecision, AppError, Page};

use crate::role_header::PortalRole;

/// GET /api/access/{page}
#[utoipa::path(
    get,
    path = "/api/access/{page}",
    params(
        ("page" = String, Path, description = "dashboard, reviews, review-create, reports, users or settings"),
        ("X-Portal-Role" = Option<String>, Header, description = "admin, manager or employee")
    ),
    responses(
        (status = 200, description = "Guard decision", body = AccessDecision),
        (status = 404, description = "Unknown page", body = AppError)
    ),
    tag = "navigation"
)]
pub async fn get_access(
    PortalRole(role): PortalRole,
    Path(page): Path<String>,
) -> Result<Json<AccessDecision>, AppError> {
    let page = Page::from_slug(&page)
        .ok_or_else(|| AppError::not_found(format!("Unknown page: {page}")))?;
    Ok(Json(AccessDecision::evaluate(page, role)))
}
