//! Error types for the client portal core

use thiserror::Error;

/// Top-level error type for the portal core
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Theme load error: {0}")]
    ThemeLoad(#[from] ThemeLoadError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while fetching or decoding the tenant theme
///
/// None of these ever reach the render tree: the loader turns them into a
/// logged [`LoadOutcome::Failed`](crate::theme::LoadOutcome::Failed).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThemeLoadError {
    #[error("Theme request failed: {0}")]
    Network(String),

    #[error("Theme endpoint answered with status {status}")]
    Status { status: u16 },

    #[error("Malformed theme payload: {0}")]
    Malformed(String),
}

/// Errors related to portal configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}
