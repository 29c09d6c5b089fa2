//! Operations behind both the server functions and the REST mirror.
//!
//! Every call first passes through [`AppState::simulate`], which waits the
//! configured latency and fails with `AppError::unavailable` when failures
//! are switched on.

use std::time::Duration;

use shared_types::{
    filter_reviews, validate_sign_up, AdminSettings, AppError, DashboardSnapshot, DashboardView,
    DirectoryUser, EmployeeOption, MessageResponse, NotificationPreferences, Page,
    PortalSettings, ProfileSettings, ReportFilters, ReportList, Review, ReviewDraft,
    ReviewStatus, Role, SessionResponse, SignInRequest, SignUpRequest,
};

use crate::error_convert::ValidateRequest;
use crate::fixtures;

/// Shared state for the REST router and server functions.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub portal: PortalSettings,
}

/// Which configured latency a call waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    SignIn,
    SignUp,
    Save,
    Read,
}

impl AppState {
    pub fn new(portal: PortalSettings) -> Self {
        Self { portal }
    }

    /// State built from the loaded `config.toml`.
    pub fn from_config() -> Self {
        Self::new(crate::config::portal_settings().clone())
    }

    fn latency(&self, kind: CallKind) -> u64 {
        match kind {
            CallKind::SignIn => self.portal.sign_in_latency_ms,
            CallKind::SignUp => self.portal.sign_up_latency_ms,
            CallKind::Save => self.portal.save_latency_ms,
            CallKind::Read => 0,
        }
    }

    pub async fn simulate(&self, kind: CallKind) -> Result<(), AppError> {
        let delay = self.latency(kind);
        if delay > 0 {
            tokio::time::sleep(Duration::from_millis(delay)).await;
        }
        if self.portal.simulate_failures {
            tracing::warn!(?kind, "simulated backend failure");
            return Err(AppError::unavailable(
                "The service is temporarily unavailable. Please try again.",
            ));
        }
        Ok(())
    }
}

/// Forbidden unless `role` may open `page`.
pub fn require_page(page: Page, role: Role) -> Result<(), AppError> {
    if page.access_for(role).is_allowed() {
        Ok(())
    } else {
        Err(AppError::forbidden(page.denied_message()))
    }
}

pub async fn sign_in(state: &AppState, req: SignInRequest) -> Result<SessionResponse, AppError> {
    req.validate_request()?;
    state.simulate(CallKind::SignIn).await?;

    let role = Role::from_email(&req.email);
    tracing::info!(%role, "demo sign-in");
    Ok(SessionResponse::for_role(role))
}

pub async fn sign_up(state: &AppState, req: SignUpRequest) -> Result<MessageResponse, AppError> {
    req.validate_request()?;
    let strength = validate_sign_up(&req.password, &req.confirm_password)
        .map_err(|rejection| AppError::field(rejection.field(), rejection.title()))?;
    state.simulate(CallKind::SignUp).await?;

    tracing::info!(score = strength.score, "account created");
    Ok(MessageResponse::new("Account created successfully!"))
}

pub async fn dashboard(state: &AppState, role: Role) -> Result<DashboardSnapshot, AppError> {
    require_page(Page::Dashboard, role)?;
    state.simulate(CallKind::Read).await?;

    Ok(match DashboardView::for_role(role) {
        DashboardView::Admin => DashboardSnapshot::Admin(fixtures::admin_dashboard()),
        DashboardView::Manager => DashboardSnapshot::Manager(fixtures::manager_dashboard()),
        DashboardView::Employee => DashboardSnapshot::Employee(fixtures::employee_dashboard()),
    })
}

/// Reviews, narrowed to one employee when `employee` is non-empty.
pub async fn reviews(
    state: &AppState,
    role: Role,
    employee: Option<&str>,
) -> Result<Vec<Review>, AppError> {
    require_page(Page::Reviews, role)?;
    state.simulate(CallKind::Read).await?;

    let all = fixtures::reviews();
    let employee = employee.filter(|id| !id.is_empty());
    Ok(filter_reviews(&all, employee).into_iter().cloned().collect())
}

pub async fn employees(state: &AppState, role: Role) -> Result<Vec<EmployeeOption>, AppError> {
    require_page(Page::ReviewCreate, role)?;
    state.simulate(CallKind::Read).await?;
    Ok(fixtures::employees())
}

/// Accept a draft and echo it back as a pending review. Nothing is stored.
pub async fn submit_review(
    state: &AppState,
    role: Role,
    draft: ReviewDraft,
) -> Result<Review, AppError> {
    require_page(Page::ReviewCreate, role)?;
    draft.validate_request()?;
    draft.check()?;
    state.simulate(CallKind::Save).await?;

    let review = Review {
        id: uuid::Uuid::new_v4().to_string(),
        review_type: draft.review_type,
        subject: draft.subject.trim().to_string(),
        status: ReviewStatus::Pending,
        due_date: draft.due_date,
        employee_id: draft.employee_id.filter(|id| !id.is_empty()),
    };
    tracing::info!(
        review_id = %review.id,
        review_type = draft.review_type.value(),
        send_email = draft.send_email,
        "review submitted"
    );
    Ok(review)
}

/// The report list. Filters are echoed back; every report covers every
/// department and period.
pub async fn reports(
    state: &AppState,
    role: Role,
    filters: ReportFilters,
) -> Result<ReportList, AppError> {
    require_page(Page::Reports, role)?;
    state.simulate(CallKind::Read).await?;
    Ok(ReportList {
        filters,
        reports: fixtures::reports(),
    })
}

pub async fn directory(state: &AppState, role: Role) -> Result<Vec<DirectoryUser>, AppError> {
    require_page(Page::Users, role)?;
    state.simulate(CallKind::Read).await?;
    Ok(fixtures::directory())
}

pub async fn save_profile(
    state: &AppState,
    profile: ProfileSettings,
) -> Result<MessageResponse, AppError> {
    profile.validate_request()?;
    state.simulate(CallKind::Save).await?;
    tracing::info!("profile saved");
    Ok(MessageResponse::new("Your profile has been updated."))
}

pub async fn save_notification_preferences(
    state: &AppState,
    preferences: NotificationPreferences,
) -> Result<MessageResponse, AppError> {
    state.simulate(CallKind::Save).await?;
    tracing::info!(frequency = preferences.frequency.value(), "notification preferences saved");
    Ok(MessageResponse::new("Your notification preferences have been saved."))
}

pub async fn save_admin_settings(
    state: &AppState,
    role: Role,
    settings: AdminSettings,
) -> Result<MessageResponse, AppError> {
    if role != Role::Admin {
        return Err(AppError::forbidden("Only administrators can change system settings."));
    }
    settings.validate_request()?;
    state.simulate(CallKind::Save).await?;
    tracing::info!(company = %settings.company_name, "system settings saved");
    Ok(MessageResponse::new("The system settings have been updated successfully."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{AppErrorKind, ReviewType};

    fn state() -> AppState {
        AppState::default()
    }

    fn draft() -> ReviewDraft {
        let mut draft = ReviewDraft::new(chrono::NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        draft.subject = "Q2 Review".into();
        draft
    }

    #[tokio::test]
    async fn sign_in_derives_role_from_email() {
        let session = sign_in(
            &state(),
            SignInRequest { email: "manager@example.com".into(), password: "pw".into() },
        )
        .await
        .unwrap();
        assert_eq!(session.role, Role::Manager);
    }

    #[tokio::test]
    async fn sign_up_rejects_mismatch_before_strength() {
        let err = sign_up(
            &state(),
            SignUpRequest {
                name: "Pat".into(),
                email: "pat@example.com".into(),
                password: "weak".into(),
                confirm_password: "other".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::ValidationError);
        assert!(err.field_errors.contains_key("confirm_password"));
    }

    #[tokio::test]
    async fn dashboard_matches_role() {
        let snapshot = dashboard(&state(), Role::Employee).await.unwrap();
        assert!(matches!(snapshot, DashboardSnapshot::Employee(_)));
        let snapshot = dashboard(&state(), Role::Admin).await.unwrap();
        assert!(matches!(snapshot, DashboardSnapshot::Admin(_)));
    }

    #[tokio::test]
    async fn reviews_filter_by_employee() {
        let list = reviews(&state(), Role::Manager, Some("2")).await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].subject, "Sarah Williams - Q1 Review");

        let all = reviews(&state(), Role::Employee, Some("")).await.unwrap();
        assert_eq!(all.len(), fixtures::reviews().len());
    }

    #[tokio::test]
    async fn employees_cannot_submit_reviews() {
        let err = submit_review(&state(), Role::Employee, draft()).await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
    }

    #[tokio::test]
    async fn peer_review_requires_employee() {
        let mut peer = draft();
        peer.review_type = ReviewType::Peer;
        let err = submit_review(&state(), Role::Manager, peer.clone()).await.unwrap_err();
        assert!(err.field_errors.contains_key("employee_id"));

        peer.employee_id = Some("4".into());
        let review = submit_review(&state(), Role::Manager, peer).await.unwrap();
        assert_eq!(review.status, ReviewStatus::Pending);
        assert_eq!(review.employee_id.as_deref(), Some("4"));
    }

    #[tokio::test]
    async fn directory_is_admin_only() {
        assert!(directory(&state(), Role::Admin).await.is_ok());
        let err = directory(&state(), Role::Manager).await.unwrap_err();
        assert_eq!(err.message, "You do not have permission to view users.");
    }

    #[tokio::test]
    async fn admin_settings_require_admin() {
        let err = save_admin_settings(&state(), Role::Manager, AdminSettings::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert!(save_admin_settings(&state(), Role::Admin, AdminSettings::default()).await.is_ok());
    }

    #[tokio::test]
    async fn simulated_failure_is_unavailable() {
        let failing = AppState::new(PortalSettings {
            simulate_failures: true,
            ..PortalSettings::default()
        });
        let err = save_notification_preferences(&failing, NotificationPreferences::default())
            .await
            .unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Unavailable);
    }
}
