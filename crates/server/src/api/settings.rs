use dioxus::prelude::*;
use shared_types::{AdminSettings, MessageResponse, NotificationPreferences, ProfileSettings, Role};

#[cfg_attr(feature = "server", tracing::instrument(skip(profile)))]
#[server]
pub async fn save_profile(profile: ProfileSettings) -> Result<MessageResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::save_profile(&AppState::from_config(), profile)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(preferences)))]
#[server]
pub async fn save_notification_preferences(
    preferences: NotificationPreferences,
) -> Result<MessageResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::save_notification_preferences(&AppState::from_config(), preferences)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(settings)))]
#[server]
pub async fn save_admin_settings(
    role: Role,
    settings: AdminSettings,
) -> Result<MessageResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::save_admin_settings(&AppState::from_config(), role, settings)
        .await
        .map_err(|e| e.into_server_fn_error())
}
