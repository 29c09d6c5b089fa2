use axum::Json;
use shared_types::{nav_for, NavLink};

use crate::role_header::PortalRole;

/// GET /api/navigation
#[utoipa::path(
    get,
    path = "/api/navigation",
    params(("X-Portal-Role" = Option<String>, Header, description = "admin, manager or employee")),
    responses((status = 200, description = "Navigation entries visible to the role", body = Vec<NavLink>)),
    tag = "navigation"
)]
pub async fn get_navigation(PortalRole(role): PortalRole) -> Json<Vec<NavLink>> {
    Json(nav_for(role).into_iter().map(NavLink::from).collect())
}
