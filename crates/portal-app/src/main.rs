//! Entry point for the client portal.

use portal_core::{ConfigError, PortalConfig};

mod app;
mod pages;
mod routes;

const CONFIG_TOML: &str = include_str!("../config/portal.toml");

/// Parse the embedded configuration, falling back to defaults.
///
/// Logging is not up yet at this point, so the error is handed back for
/// the caller to report once it is.
fn load_config(source: &str, base_url_override: Option<&str>) -> (PortalConfig, Option<ConfigError>) {
    let (config, error) = match PortalConfig::from_toml_str(source) {
        Ok(config) => (config, None),
        Err(e) => (PortalConfig::default(), Some(e)),
    };

    match base_url_override {
        Some(url) if !url.trim().is_empty() => (config.with_base_url(url), error),
        _ => (config, error),
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    let (config, config_error) = load_config(CONFIG_TOML, option_env!("PORTAL_API_BASE_URL"));

    portal_logging::PortalSubscriberBuilder::new()
        .with_config(config.logging.clone())
        .init();

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Embedded configuration rejected, using defaults");
    }

    tracing::info!(
        api = %config.api.base_url,
        strategy = ?config.navigation.match_strategy,
        "Starting client portal"
    );

    dioxus::LaunchBuilder::new()
        .with_context(config)
        .launch(app::App);
}
