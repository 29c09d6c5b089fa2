use dioxus::prelude::*;
use shared_types::{DirectoryUser, Role};

/// The user directory. Admins only.
#[cfg_attr(feature = "server", tracing::instrument)]
#[server]
pub async fn list_directory(role: Role) -> Result<Vec<DirectoryUser>, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::directory(&AppState::from_config(), role)
        .await
        .map_err(|e| e.into_server_fn_error())
}
