use axum::Json;
use shared_types::{PasswordStrength, PasswordStrengthRequest, PasswordStrengthResponse};

/// POST /api/password/strength
#[utoipa::path(
    post,
    path = "/api/password/strength",
    request_body = PasswordStrengthRequest,
    responses((status = 200, description = "Strength report", body = PasswordStrengthResponse)),
    tag = "session"
)]
pub async fn password_strength(
    Json(body): Json<PasswordStrengthRequest>,
) -> Json<PasswordStrengthResponse> {
    Json(PasswordStrength::of(&body.password).into())
}
