//! # Portal Core
//!
//! Runtime theming and access gating for the client portal.
//!
//! Everything here is renderer-agnostic: the UI crate binds these types to
//! live components, and tests drive them with in-memory doubles.
//!
//! ## Modules
//!
//! - [`theme`]: mapping table, descriptor, applier, style sinks, loader
//! - [`auth`]: auth snapshot and the route gate state machine
//! - [`navigation`]: static link groups and the active-item resolver
//! - [`config`]: TOML configuration
//! - [`error`]: error types

pub mod auth;
pub mod config;
pub mod error;
pub mod navigation;
pub mod theme;

// Re-export main types
pub use auth::{AuthGate, AuthState, GateDecision, GateState, NavigationMode, Role, UserRecord};
pub use config::{ApiConfig, NavigationConfig, PortalConfig};
pub use error::*;
pub use navigation::{
    LEFT_GROUP, MatchStrategy, NavGroup, NavigationItem, NavigationResolver, RIGHT_GROUP,
    ResolvedItem, ResolvedNavigation, Surface,
};
pub use theme::{
    ApplyReport, FailingThemeSource, LoadOutcome, MemoryStyleSink, RecordingStyleSink,
    StaticThemeSource, StyleSink, StyleTarget, ThemeDescriptor, ThemeLoader, ThemeSource,
};

// Cancellation is part of the loader API
pub use tokio_util::sync::CancellationToken;
