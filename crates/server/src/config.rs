use shared_types::{AppConfig, FeatureFlags, PortalSettings};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Parse `config.toml` contents. A broken file yields the defaults.
pub fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to parse {CONFIG_PATH}, using defaults");
        AppConfig::default()
    })
}

fn read_config() -> AppConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => parse_config(&contents),
        Err(e) => {
            tracing::info!(error = %e, "{CONFIG_PATH} not found, using defaults");
            AppConfig::default()
        }
    }
}

/// Read `config.toml` into the global `OnceLock` and log what was loaded.
/// Only the first call reads the file.
pub fn load_config() -> &'static AppConfig {
    let config = config();
    tracing::info!(
        features = ?config.features,
        portal = ?config.portal,
        "configuration loaded"
    );
    config
}

/// The loaded configuration, read on first use.
pub fn config() -> &'static AppConfig {
    CONFIG.get_or_init(read_config)
}

pub fn feature_flags() -> &'static FeatureFlags {
    &config().features
}

pub fn portal_settings() -> &'static PortalSettings {
    &config().portal
}
