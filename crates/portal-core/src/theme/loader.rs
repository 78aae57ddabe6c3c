//! One-shot tenant theme loading.
//!
//! The loader fetches the descriptor from a [`ThemeSource`] and hands it to
//! the applier. Failures are logged and reported as a value; they never
//! escape as errors, because a missing theme only means default styling.
//! There is no retry: one mount, one request.
//!
//! Every load is bound to a [`CancellationToken`]. Once the owner cancels
//! (typically on unmount), the loader performs no further writes, even if
//! the response is already on its way.

use tokio_util::sync::CancellationToken;

use super::applier::{ApplyReport, apply_with_report};
use super::sink::StyleSink;
use super::source::ThemeSource;
use crate::error::ThemeLoadError;

/// Result of a single load attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The descriptor was fetched and applied.
    Applied(ApplyReport),
    /// The fetch failed; the document keeps its default styling.
    Failed(ThemeLoadError),
    /// The owner went away before the theme could be applied.
    Cancelled,
}

impl LoadOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, LoadOutcome::Applied(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, LoadOutcome::Cancelled)
    }
}

/// Fetches and applies the tenant theme
#[derive(Debug, Clone)]
pub struct ThemeLoader<S> {
    source: S,
}

impl<S: ThemeSource> ThemeLoader<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch the theme once and apply it to `sink`.
    pub async fn load<K: StyleSink + ?Sized>(
        &self,
        sink: &mut K,
        token: &CancellationToken,
    ) -> LoadOutcome {
        if token.is_cancelled() {
            tracing::debug!("Theme load cancelled before request");
            return LoadOutcome::Cancelled;
        }

        tracing::debug!("Requesting tenant theme");
        let result = tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::debug!("Theme load cancelled while in flight");
                return LoadOutcome::Cancelled;
            }
            result = self.source.fetch_theme() => result,
        };

        // The response may resolve in the same turn the owner unmounts.
        if token.is_cancelled() {
            tracing::debug!("Discarding theme that resolved after cancellation");
            return LoadOutcome::Cancelled;
        }

        match result {
            Ok(descriptor) => {
                let report = apply_with_report(&descriptor, sink);
                tracing::info!(
                    applied = report.applied_count(),
                    skipped = report.skipped_count(),
                    "Tenant theme applied"
                );
                LoadOutcome::Applied(report)
            }
            Err(err) => {
                tracing::warn!(error = %err, "Tenant theme unavailable, keeping default styling");
                LoadOutcome::Failed(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::descriptor::ThemeDescriptor;
    use crate::theme::mapping::StyleTarget;
    use crate::theme::sink::{MemoryStyleSink, RecordingStyleSink};
    use crate::theme::source::{FailingThemeSource, StaticThemeSource};

    use async_trait::async_trait;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    /// Counts requests so tests can assert there is no retry
    struct CountingSource {
        calls: AtomicUsize,
        inner: FailingThemeSource,
    }

    #[async_trait]
    impl ThemeSource for CountingSource {
        async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.inner.fetch_theme().await
        }
    }

    /// Blocks until released, then returns the descriptor
    struct GatedSource {
        release: Arc<Notify>,
        descriptor: ThemeDescriptor,
    }

    #[async_trait]
    impl ThemeSource for GatedSource {
        async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
            self.release.notified().await;
            Ok(self.descriptor.clone())
        }
    }

    #[tokio::test]
    async fn test_load_applies_descriptor() {
        let loader = ThemeLoader::new(StaticThemeSource::new(
            ThemeDescriptor::new()
                .with("corPrimaria", "#112233")
                .with("desconhecido", "x"),
        ));
        let mut sink = MemoryStyleSink::new();

        let outcome = loader.load(&mut sink, &CancellationToken::new()).await;

        match outcome {
            LoadOutcome::Applied(report) => {
                assert_eq!(report.applied, vec!["corPrimaria"]);
                assert_eq!(report.skipped, vec!["desconhecido"]);
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(
            sink.get(StyleTarget::CustomProperty("--primary-color")),
            Some("#112233")
        );
    }

    #[tokio::test]
    async fn test_failure_keeps_defaults_and_does_not_retry() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            inner: FailingThemeSource::new(ThemeLoadError::Network("offline".into())),
        };
        let loader = ThemeLoader::new(source);
        let primary = StyleTarget::CustomProperty("--primary-color");
        let mut sink = MemoryStyleSink::with_defaults([(primary, "#0d47a1")]);

        let outcome = loader.load(&mut sink, &CancellationToken::new()).await;

        assert_eq!(
            outcome,
            LoadOutcome::Failed(ThemeLoadError::Network("offline".into()))
        );
        assert_eq!(sink.get(primary), Some("#0d47a1"));
        assert_eq!(loader.source().calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cancelled_before_start_skips_request() {
        let source = CountingSource {
            calls: AtomicUsize::new(0),
            inner: FailingThemeSource::new(ThemeLoadError::Status { status: 500 }),
        };
        let loader = ThemeLoader::new(source);
        let token = CancellationToken::new();
        token.cancel();

        let mut sink = RecordingStyleSink::new();
        let outcome = loader.load(&mut sink, &token).await;

        assert!(outcome.is_cancelled());
        assert_eq!(loader.source().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_cancel_in_flight_prevents_write() {
        let release = Arc::new(Notify::new());
        let loader = ThemeLoader::new(GatedSource {
            release: release.clone(),
            descriptor: ThemeDescriptor::new().with("corPrimaria", "#abcdef"),
        });
        let token = CancellationToken::new();
        let mut sink = RecordingStyleSink::new();

        let load = loader.load(&mut sink, &token);
        let cancel = async {
            token.cancel();
            release.notify_one();
        };
        let (outcome, ()) = tokio::join!(load, cancel);

        assert!(outcome.is_cancelled());
        assert!(sink.writes().is_empty());
    }
}
