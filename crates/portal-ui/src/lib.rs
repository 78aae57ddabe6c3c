//! Dioxus components for the client portal.
//!
//! Binds the renderer-agnostic `portal-core` to the live document: tenant
//! theming, the auth provider and gate, and the navigation surfaces.

pub mod api;
pub mod auth;
pub mod navigation;
pub mod theme;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthContext, AuthGate, AuthProvider, use_auth};
pub use navigation::NavigationBar;
pub use theme::{DocumentStyleSink, HttpThemeSource, ThemeLoader, set_property_script};
