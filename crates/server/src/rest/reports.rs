use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use shared_types::{AppError, Department, Page, Period, ReportFilters, ReportList};

use crate::portal::{self, AppState};
use crate::role_header::PortalRole;

#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub struct ReportQuery {
    /// `all`, `engineering`, `marketing`, `sales`, `hr` or `finance`.
    pub department: Option<String>,
    /// `q1-2025` through `q4-2025`, or `annual-2025`.
    pub period: Option<String>,
}

impl ReportQuery {
    /// Missing values fall back to the reset filters; unknown values are rejected.
    pub fn into_filters(self) -> Result<ReportFilters, AppError> {
        let mut filters = ReportFilters::default();
        if let Some(value) = self.department {
            filters.department = Department::from_value(&value)
                .ok_or_else(|| AppError::bad_request(format!("Unknown department: {value}")))?;
        }
        if let Some(value) = self.period {
            filters.period = Period::from_value(&value)
                .ok_or_else(|| AppError::bad_request(format!("Unknown period: {value}")))?;
        }
        Ok(filters)
    }
}

/// GET /api/reports
#[utoipa::path(
    get,
    path = "/api/reports",
    params(
        ReportQuery,
        ("X-Portal-Role" = Option<String>, Header, description = "admin or manager")
    ),
    responses(
        (status = 200, description = "Reports with the applied filters", body = ReportList),
        (status = 400, description = "Unknown department or period", body = AppError),
        (status = 403, description = "Role may not view reports", body = AppError)
    ),
    tag = "reports"
)]
pub async fn list_reports(
    State(state): State<AppState>,
    PortalRole(role): PortalRole,
    Query(query): Query<ReportQuery>,
) -> Result<Json<ReportList>, AppError> {
    portal::require_page(Page::Reports, role)?;
    let filters = query.into_filters()?;
    portal::reports(&state, role, filters).await.map(Json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_reset_filters() {
        assert!(ReportQuery::default().into_filters().unwrap().is_default());
    }

    #[test]
    fn query_values_parse() {
        let filters = ReportQuery {
            department: Some("sales".into()),
            period: Some("annual-2025".into()),
        }
        .into_filters()
        .unwrap();
        assert_eq!(filters.department, Department::Sales);
        assert_eq!(filters.period, Period::Annual);
    }

    #[test]
    fn unknown_department_is_rejected() {
        let err = ReportQuery {
            department: Some("legal".into()),
            period: None,
        }
        .into_filters()
        .unwrap_err();
        assert_eq!(err.message, "Unknown department: legal");
    }
}
