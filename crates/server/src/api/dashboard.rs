use dioxus::prelude::*;
use shared_types::{DashboardSnapshot, Role};

/// The dashboard variant for `role`.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn get_dashboard(role: Role) -> Result<DashboardSnapshot, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::dashboard(&AppState::from_config(), role)
        .await
        .map_err(|e| e.into_server_fn_error())
}
