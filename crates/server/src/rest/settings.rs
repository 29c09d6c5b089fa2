use axum::{extract::State, Json};
use shared_types::{AdminSettings, AppError, MessageResponse, NotificationPreferences, ProfileSettings};

use crate::portal::{self, AppState};
use crate::role_header::PortalRole;

/// PUT /api/settings/profile
#[utoipa::path(
    put,
    path = "/api/settings/profile",
    request_body = ProfileSettings,
    responses(
        (status = 200, description = "Profile saved", body = MessageResponse),
        (status = 422, description = "Invalid profile", body = AppError)
    ),
    tag = "settings"
)]
pub async fn save_profile(
    State(state): State<AppState>,
    Json(body): Json<ProfileSettings>,
) -> Result<Json<MessageResponse>, AppError> {
    portal::save_profile(&state, body).await.map(Json)
}

/// PUT /api/settings/notifications
#[utoipa::path(
    put,
    path = "/api/settings/notifications",
    request_body = NotificationPreferences,
    responses((status = 200, description = "Preferences saved", body = MessageResponse)),
    tag = "settings"
)]
pub async fn save_notifications(
    State(state): State<AppState>,
    Json(body): Json<NotificationPreferences>,
) -> Result<Json<MessageResponse>, AppError> {
    portal::save_notification_preferences(&state, body)
        .await
        .map(Json)
}

/// PUT /api/settings/admin
#[utoipa::path(
    put,
    path = "/api/settings/admin",
    request_body = AdminSettings,
    params(("X-Portal-Role" = Option<String>, Header, description = "admin")),
    responses(
        (status = 200, description = "System settings saved", body = MessageResponse),
        (status = 403, description = "Admins only", body = AppError),
        (status = 422, description = "Invalid settings", body = AppError)
    ),
    tag = "settings"
)]
pub async fn save_admin(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
    Json(body): Json<AdminSettings>,
) -> Result<Json<MessageResponse>, AppError> {
    portal::save_admin_settings(&state, role, body).await.map(Json)
}
