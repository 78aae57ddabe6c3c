//! Portal configuration.
//!
//! Loaded from TOML. Every section has defaults, so a file only needs the
//! values that differ:
//!
//! ```toml
//! [api]
//! base_url = "https://api.example.com"
//!
//! [navigation]
//! match_strategy = "exact"
//!
//! [logging]
//! default_level = "debug"
//! ```

use serde::{Deserialize, Serialize};

use portal_logging::LogConfig;

use crate::error::ConfigError;
use crate::navigation::MatchStrategy;

/// Top-level portal configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalConfig {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
    pub logging: LogConfig,
}

impl PortalConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: PortalConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the portal cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        for (name, path) in [
            ("api.theme_path", &self.api.theme_path),
            ("api.session_path", &self.api.session_path),
        ] {
            if !path.starts_with('/') {
                return Err(ConfigError::Invalid(format!(
                    "{} must start with '/', got {:?}",
                    name, path
                )));
            }
        }
        Ok(())
    }

    /// Override the API base URL, e.g. from a build-time variable
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }
}

/// Backend API settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Path of the theme endpoint, relative to `base_url`
    pub theme_path: String,
    /// Path of the session endpoint used by the auth provider
    pub session_path: String,
    /// Request timeout; native builds only, browsers apply their own
    pub request_timeout_secs: u64,
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Full URL of the theme endpoint
    pub fn theme_url(&self) -> String {
        self.url(&self.theme_path)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3000/api".to_string(),
            theme_path: "/tema".to_string(),
            session_path: "/sessao".to_string(),
            request_timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub match_strategy: MatchStrategy,
}
