use axum::{extract::State, Json};
use shared_types::{AppError, MessageResponse, SessionResponse, SignInRequest, SignUpRequest};

use crate::portal::{self, AppState};

/// POST /api/session/sign-in
#[utoipa::path(
    post,
    path = "/api/session/sign-in",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Role derived from the email", body = SessionResponse),
        (status = 422, description = "Email or password missing", body = AppError),
        (status = 503, description = "Simulated backend failure", body = AppError)
    ),
    tag = "session"
)]
pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    portal::sign_in(&state, body).await.map(Json)
}

/// POST /api/session/sign-up
#[utoipa::path(
    post,
    path = "/api/session/sign-up",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "Account created", body = MessageResponse),
        (status = 422, description = "Mismatched confirmation or weak password", body = AppError),
        (status = 503, description = "Simulated backend failure", body = AppError)
    ),
    tag = "session"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    portal::sign_up(&state, body).await.map(Json)
}
