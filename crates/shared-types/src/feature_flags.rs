use serde::{Deserialize, Serialize};

/// Feature flags controlling which optional integrations are active.
///
/// Loaded from `config.toml` at server startup and exposed to clients
/// via a server function. Every field defaults to `false` so that a
/// missing or incomplete config file disables all optional features.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct FeatureFlags {
    #[serde(default)]
    pub telemetry: bool,
}

/// Behaviour of the simulated backend behind every server function.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalSettings {
    /// Delay before a sign-in call resolves.
    #[serde(default)]
    pub sign_in_latency_ms: u64,
    #[serde(default)]
    pub sign_up_latency_ms: u64,
    /// Delay applied to settings saves and review submissions.
    #[serde(default)]
    pub save_latency_ms: u64,
    /// When set, every simulated call resolves with `AppError::unavailable`.
    #[serde(default)]
    pub simulate_failures: bool,
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub features: FeatureFlags,
    #[serde(default)]
    pub portal: PortalSettings,
}
