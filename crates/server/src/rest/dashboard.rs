use axum::{extract::State, Json};
use shared_types::{AppError, DashboardSnapshot};

use crate::portal::{self, AppState};
use crate::role_header::PortalRole;

/// GET /api/dashboard
#[utoipa::path(
    get,
    path = "/api/dashboard",
    params(("X-Portal-Role" = Option<String>, Header, description = "admin, manager or employee")),
    responses(
        (status = 200, description = "Dashboard for the caller's role", body = DashboardSnapshot),
        (status = 503, description = "Simulated backend failure", body = AppError)
    ),
    tag = "dashboard"
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
) -> Result<Json<DashboardSnapshot>, AppError> {
    portal::dashboard(&state, role).await.map(Json)
}
