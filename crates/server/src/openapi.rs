use axum::Router;
use shared_types::{
    // Session
    MessageResponse, PasswordStrengthRequest, PasswordStrengthResponse, SessionResponse,
    SignInRequest, SignUpRequest,
    // Roles and navigation
    Access, AccessDecision, DashboardView, NavIcon, NavLink, Page, Role,
    // Dashboards
    AdminDashboard, DashboardSnapshot, EmployeeDashboard, ManagerDashboard,
    // Reviews and reports
    CriteriaRatings, Department, EmployeeOption, Period, Report, ReportFilters, ReportList,
    Review, ReviewDraft, ReviewStatus, ReviewType,
    // Users and settings
    AdminSettings, DirectoryUser, NotificationFrequency, NotificationPreferences,
    ProfileSettings, ReviewFrequency, RolePermission,
    // Errors
    AppError, AppErrorKind,
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::health;
use crate::portal::AppState;
use crate::rest;

/// OpenAPI documentation for the REST mirror.
#[derive(OpenApi)]
#[openapi(
    paths(
        rest::session::sign_in,
        rest::session::sign_up,
        rest::password::password_strength,
        rest::navigation::get_navigation,
        rest::access::get_access,
        rest::dashboard::get_dashboard,
        rest::reviews::list_reviews,
        rest::reviews::submit_review,
        rest::reviews::list_employees,
        rest::reports::list_reports,
        rest::users::list_users,
        rest::settings::save_profile,
        rest::settings::save_notifications,
        rest::settings::save_admin,
        health::health_check,
    ),
    components(schemas(
        MessageResponse, PasswordStrengthRequest, PasswordStrengthResponse, SessionResponse,
        SignInRequest, SignUpRequest,
        Access, AccessDecision, DashboardView, NavIcon, NavLink, Page, Role,
        AdminDashboard, DashboardSnapshot, EmployeeDashboard, ManagerDashboard,
        CriteriaRatings, Department, EmployeeOption, Period, Report, ReportFilters, ReportList,
        Review, ReviewDraft, ReviewStatus, ReviewType,
        AdminSettings, DirectoryUser, NotificationFrequency, NotificationPreferences,
        ProfileSettings, ReviewFrequency, RolePermission,
        AppError, AppErrorKind,
        health::HealthResponse,
    )),
    tags(
        (name = "session", description = "Demo sign-in, sign-up and password strength"),
        (name = "navigation", description = "Role-filtered navigation and page guards"),
        (name = "dashboard", description = "Role-specific dashboard data"),
        (name = "reviews", description = "Performance reviews"),
        (name = "reports", description = "Performance reports"),
        (name = "users", description = "User directory"),
        (name = "settings", description = "Profile, notification and system settings"),
        (name = "health", description = "Health check endpoint")
    ),
    info(
        title = "HR Portal API",
        description = "Role-gated performance review portal",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

/// Build an Axum router serving the REST mirror at `/api/*`, the health
/// check and the API docs at `/docs`.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(rest::rest_router())
        .route("/health", axum::routing::get(health::health_check))
        .with_state(state)
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
}
