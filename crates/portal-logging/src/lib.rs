//! Structured logging for the client portal
//!
//! One builder sets up `tracing` for both targets the portal runs on:
//!
//! - **Native** (desktop shell, tests): fmt layer, JSONL by default or
//!   human-readable with [`LogConfig::development`].
//! - **Browser** (`wasm32`): [`BrowserConsoleLayer`] writing to the
//!   devtools console.
//!
//! # Quick Start
//!
//! ```ignore
//! use portal_logging::{LogConfig, PortalSubscriberBuilder};
//!
//! PortalSubscriberBuilder::new()
//!     .with_config(LogConfig::development())
//!     .init();
//!
//! tracing::info!("Portal starting");
//! ```

pub mod config;
pub mod layers;

pub use config::{ConsoleConfig, FilterConfig, JsonlConfig, LogConfig};
#[cfg(target_arch = "wasm32")]
pub use layers::BrowserConsoleLayer;
pub use layers::{ConsoleLine, FieldCollector};

use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Builder for configuring and initializing the portal subscriber
pub struct PortalSubscriberBuilder {
    config: LogConfig,
}

impl PortalSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the default log level
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.config.default_level = level.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }

    /// Initialize the subscriber globally
    ///
    /// # Panics
    ///
    /// Panics if a global subscriber has already been set.
    pub fn init(self) {
        if let Err(e) = self.try_init() {
            panic!("Failed to install tracing subscriber: {}", e);
        }
    }

    /// Initialize the subscriber globally, reporting failure instead of panicking
    pub fn try_init(self) -> Result<(), TryInitError> {
        let (env_filter, rejected) = build_env_filter(&self.config);
        let console = self
            .config
            .console
            .enabled
            .then(|| console_layer(&self.config));

        Registry::default().with(console).with(env_filter).try_init()?;

        for directive in rejected {
            tracing::warn!(directive = %directive, "Ignoring invalid log filter directive");
        }
        Ok(())
    }
}

impl Default for PortalSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the global filter: `RUST_LOG` if set, else the default level, plus
/// per-target overrides. Directives that fail to parse are returned.
pub fn build_env_filter(config: &LogConfig) -> (EnvFilter, Vec<String>) {
    let mut filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_level));
    let mut rejected = Vec::new();

    for directive in config.target_directives() {
        match directive.parse::<Directive>() {
            Ok(parsed) => filter = filter.add_directive(parsed),
            Err(_) => rejected.push(directive),
        }
    }

    (filter, rejected)
}

fn console_level(config: &LogConfig) -> Option<LevelFilter> {
    config
        .console
        .level
        .as_deref()
        .and_then(|level| level.parse::<LevelFilter>().ok())
}

#[cfg(not(target_arch = "wasm32"))]
fn console_layer(config: &LogConfig) -> BoxedLayer {
    let layer: BoxedLayer = if config.console.pretty {
        tracing_subscriber::fmt::layer()
            .with_ansi(config.console.ansi)
            .with_target(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(config.jsonl.include_spans)
            .flatten_event(config.jsonl.flatten_events)
            .with_file(config.jsonl.include_location)
            .with_line_number(config.jsonl.include_location)
            .boxed()
    };

    match console_level(config) {
        Some(level) => layer.with_filter(level).boxed(),
        None => layer,
    }
}

#[cfg(target_arch = "wasm32")]
fn console_layer(config: &LogConfig) -> BoxedLayer {
    let layer = BrowserConsoleLayer::new();
    match console_level(config) {
        Some(level) => layer.with_filter(level).boxed(),
        None => layer.boxed(),
    }
}
