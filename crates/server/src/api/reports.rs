use dioxus::prelude::*;
use shared_types::{ReportFilters, ReportList, Role};

#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_reports(role: Role, filters: ReportFilters) -> Result<ReportList, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::reports(&AppState::from_config(), role, filters)
        .await
        .map_err(|e| e.into_server_fn_error())
}
