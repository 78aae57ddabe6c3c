//! Where theme descriptors come from.
//!
//! The HTTP implementation lives in the UI crate next to the rest of the
//! browser plumbing. The sources here are deterministic stand-ins for tests
//! and offline builds.

use async_trait::async_trait;

use super::descriptor::ThemeDescriptor;
use crate::error::ThemeLoadError;

/// Fetches the active tenant theme.
///
/// Browser futures are not `Send`, so on `wasm32` the trait drops that bound.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait ThemeSource {
    /// Request the current theme descriptor once.
    async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError>;
}

/// Always returns the same descriptor
#[derive(Debug, Clone, Default)]
pub struct StaticThemeSource {
    descriptor: ThemeDescriptor,
}

impl StaticThemeSource {
    pub fn new(descriptor: ThemeDescriptor) -> Self {
        Self { descriptor }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ThemeSource for StaticThemeSource {
    async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
        Ok(self.descriptor.clone())
    }
}

/// Always fails with the same error
#[derive(Debug, Clone)]
pub struct FailingThemeSource {
    error: ThemeLoadError,
}

impl FailingThemeSource {
    pub fn new(error: ThemeLoadError) -> Self {
        Self { error }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ThemeSource for FailingThemeSource {
    async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
        Err(self.error.clone())
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl<T: ThemeSource + Send + Sync + ?Sized> ThemeSource for std::sync::Arc<T> {
    async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
        (**self).fetch_theme().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_returns_descriptor() {
        let source = StaticThemeSource::new(ThemeDescriptor::new().with("corPrimaria", "#123"));
        let descriptor = source.fetch_theme().await.unwrap();
        assert_eq!(descriptor.get("corPrimaria"), Some("#123"));
    }

    #[tokio::test]
    async fn test_failing_source_returns_error() {
        let source = FailingThemeSource::new(ThemeLoadError::Status { status: 503 });
        let err = source.fetch_theme().await.unwrap_err();
        assert_eq!(err, ThemeLoadError::Status { status: 503 });
    }

    #[tokio::test]
    async fn test_arc_source_delegates() {
        let source = std::sync::Arc::new(StaticThemeSource::default());
        assert!(source.fetch_theme().await.unwrap().is_empty());
    }
}
