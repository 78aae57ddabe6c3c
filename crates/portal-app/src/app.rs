//! Root component and the gated layout.

use dioxus::prelude::*;
use portal_core::{ApiConfig, PortalConfig};
use portal_ui::{ApiClient, AuthGate, AuthProvider, NavigationBar, ThemeLoader, use_auth};

use crate::routes::Route;

/// Build-time default styles; tenant themes override the variables
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Provide the API client to the tree, if one can be built.
///
/// Without a client the theme loader keeps default styling and the auth
/// provider settles as signed out.
fn provide_api_client(config: &ApiConfig) {
    match ApiClient::new(config) {
        Ok(client) => {
            provide_context(client);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to build API client, running offline");
        }
    }
}

/// Root application component.
///
/// Expects the [`PortalConfig`] in context (set at launch).
#[component]
pub fn App() -> Element {
    let config = use_context::<PortalConfig>();
    use_hook(|| provide_api_client(&config.api));

    rsx! {
        style { {STYLES_CSS} }
        ThemeLoader { theme_path: config.api.theme_path.clone(),
            AuthProvider { session_path: config.api.session_path.clone(),
                Router::<Route> {}
            }
        }
    }
}

/// Layout for every signed-in route: gate, navigation, page outlet.
#[component]
pub fn Protected() -> Element {
    let config = use_context::<PortalConfig>();
    let auth = use_auth();
    let route = use_route::<Route>();
    let snapshot = auth.snapshot();
    let user = snapshot.current_user.clone();

    rsx! {
        AuthGate { auth: snapshot, login_path: Route::login_path(),
            div { class: "portal-shell",
                NavigationBar {
                    current_path: route.to_string(),
                    strategy: config.navigation.match_strategy,
                    user: user,
                    on_sign_out: move |_| auth.sign_out(),
                }
                main { class: "portal-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
