use axum::{extract::State, Json};
use shared_types::{AppError, DirectoryUser};

use crate::portal::{self, AppState};
use crate::role_header::PortalRole;

/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    params(("X-Portal-Role" = Option<String>, Header, description = "admin")),
    responses(
        (status = 200, description = "User directory", body = Vec<DirectoryUser>),
        (status = 403, description = "Admins only", body = AppError)
    ),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
) -> Result<Json<Vec<DirectoryUser>>, AppError> {
    portal::directory(&state, role).await.map(Json)
}
