//! Server functions called by the portal UI.
//!
//! Each one delegates to [`crate::portal`] with state built from the loaded
//! config and hands failures back as JSON-encoded `AppError`s.

mod dashboard;
pub use dashboard::*;

mod reports;
pub use reports::*;

mod reviews;
pub use reviews::*;

mod session;
pub use session::*;

mod settings;
pub use settings::*;

mod users;
pub use users::*;

use dioxus::prelude::*;
use shared_types::FeatureFlags;

/// Feature flags from `config.toml`.
#[server]
pub async fn get_feature_flags() -> Result<FeatureFlags, ServerFnError> {
    Ok(crate::config::feature_flags().clone())
}
