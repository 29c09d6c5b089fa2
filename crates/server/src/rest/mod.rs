pub mod access;
pub mod dashboard;
pub mod navigation;
pub mod password;
pub mod reports;
pub mod reviews;
pub mod session;
pub mod settings;
pub mod users;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::portal::AppState;

/// Build the REST mirror of the portal's server functions.
pub fn rest_router() -> Router<AppState> {
    Router::new()
        // Session
        .route("/api/session/sign-in", post(session::sign_in))
        .route("/api/session/sign-up", post(session::sign_up))
        // Role-gated navigation
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/access/{page}", get(access::get_access))
        .route("/api/password/strength", post(password::password_strength))
        // Portal data
        .route("/api/dashboard", get(dashboard::get_dashboard))
        .route("/api/reviews", get(reviews::list_reviews).post(reviews::submit_review))
        .route("/api/reviews/employees", get(reviews::list_employees))
        .route("/api/reports", get(reports::list_reports))
        .route("/api/users", get(users::list_users))
        // Settings
        .route("/api/settings/profile", put(settings::save_profile))
        .route("/api/settings/notifications", put(settings::save_notifications))
        .route("/api/settings/admin", put(settings::save_admin))
}
