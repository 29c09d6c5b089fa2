use dioxus::prelude::*;
use shared_types::{MessageResponse, SessionResponse, SignInRequest, SignUpRequest};

/// Demo sign-in. Any password is accepted; the role comes from the email.
#[cfg_attr(feature = "server", tracing::instrument(skip(req), fields(email = %req.email)))]
#[server]
pub async fn sign_in(req: SignInRequest) -> Result<SessionResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::sign_in(&AppState::from_config(), req)
        .await
        .map_err(|e| e.into_server_fn_error())
}

#[cfg_attr(feature = "server", tracing::instrument(skip(req), fields(email = %req.email)))]
#[server]
pub async fn sign_up(req: SignUpRequest) -> Result<MessageResponse, ServerFnError> {
    use crate::error_convert::AppErrorExt;
    use crate::portal::{self, AppState};

    portal::sign_up(&AppState::from_config(), req)
        .await
        .map_err(|e| e.into_server_fn_error())
}
