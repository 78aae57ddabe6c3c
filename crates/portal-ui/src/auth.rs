//! Auth provider and the route gate component.

use dioxus::prelude::*;
use portal_core::{AuthState, GateDecision, GateState, NavigationMode, UserRecord};
use serde::Serialize;

use crate::api::{ApiClient, ApiError};

/// Handle to the auth state, shared through context.
///
/// Reading [`AuthContext::snapshot`] inside a component subscribes it to
/// auth changes.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
    client: Signal<Option<ApiClient>>,
    session_path: Signal<String>,
}

impl AuthContext {
    pub fn snapshot(&self) -> AuthState {
        self.state.read().clone()
    }

    pub fn current_user(&self) -> Option<UserRecord> {
        self.state.read().current_user.clone()
    }

    pub fn sign_in(&self, user: UserRecord) {
        tracing::info!(user_id = %user.id, role = ?user.role, "Signed in");
        let mut state = self.state;
        state.set(AuthState::signed_in(user));
    }

    /// Clear the local session and tell the backend, without waiting for it
    pub fn sign_out(&self) {
        tracing::info!("Signing out");
        let mut state = self.state;
        state.set(AuthState::signed_out());

        let client = self.client.read().clone();
        let path = self.session_path.read().clone();
        if let Some(client) = client {
            spawn(async move {
                if let Err(e) = client.delete(&path).await {
                    tracing::warn!(error = %e, "Failed to end server session");
                }
            });
        }
    }

    /// Exchange credentials for a session
    pub async fn sign_in_with_credentials(&self, email: String, password: String) -> Result<(), ApiError> {
        let client = self.client.read().clone();
        let path = self.session_path.read().clone();
        let Some(client) = client else {
            return Err(ApiError::Network("no API client configured".into()));
        };

        let payload = client.post_json(&path, &Credentials { email, password }).await?;
        let user: UserRecord =
            serde_json::from_value(payload).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.sign_in(user);
        Ok(())
    }
}

#[derive(Serialize)]
struct Credentials {
    email: String,
    password: String,
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

/// Provides [`AuthContext`] and restores the session on mount.
///
/// Starts in the loading state. The session endpoint answers with the user
/// record, or 401/403 when there is no session. Any other failure is
/// treated as signed out so the gate can settle.
#[component]
pub fn AuthProvider(session_path: String, children: Element) -> Element {
    let client = try_use_context::<ApiClient>();
    let mut state = use_signal(AuthState::loading);
    let client_signal = use_signal(|| client.clone());
    let path_signal = use_signal(|| session_path.clone());

    use_context_provider(|| AuthContext {
        state,
        client: client_signal,
        session_path: path_signal,
    });

    use_hook(|| {
        spawn(async move {
            let Some(client) = client else {
                tracing::warn!("No API client in context, starting signed out");
                state.set(AuthState::signed_out());
                return;
            };

            let restored = restore_session(&client, &session_path).await;
            state.set(match restored {
                Some(user) => AuthState::signed_in(user),
                None => AuthState::signed_out(),
            });
        })
    });

    rsx! {
        {children}
    }
}

async fn restore_session(client: &ApiClient, path: &str) -> Option<UserRecord> {
    match client.get_json(path).await {
        Ok(payload) => match serde_json::from_value::<UserRecord>(payload) {
            Ok(user) => {
                tracing::debug!(user_id = %user.id, "Session restored");
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session payload is not a user record");
                None
            }
        },
        Err(e) if e.is_unauthorized() => {
            tracing::debug!("No active session");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Session restore failed");
            None
        }
    }
}

/// Renders `children` only for an authenticated user.
///
/// Takes the auth snapshot as a prop. While auth is loading a placeholder is
/// shown; once it settles without a user, the gate replaces the current
/// history entry with the login route.
#[component]
pub fn AuthGate(auth: AuthState, login_path: String, children: Element) -> Element {
    let gate = portal_core::AuthGate::new(login_path);
    let decision = gate.decide(&auth);
    let redirect = match &decision {
        GateDecision::Redirect { to, mode } => Some((to.clone(), *mode)),
        _ => None,
    };

    tracing::trace!(state = ?GateState::from_auth(&auth), "Auth gate evaluated");

    use_effect(use_reactive!(|redirect| {
        if let Some((to, mode)) = redirect {
            tracing::info!(to = %to, "Unauthenticated, redirecting to login");
            let nav = navigator();
            match mode {
                NavigationMode::Replace => {
                    nav.replace(to);
                }
                NavigationMode::Push => {
                    nav.push(to);
                }
            }
        }
    }));

    match decision {
        GateDecision::ShowPlaceholder => rsx! {
            div { class: "auth-pending",
                div { class: "auth-pending__spinner" }
                p { "Verificando autenticação..." }
            }
        },
        GateDecision::RenderProtected => rsx! {
            {children}
        },
        GateDecision::Redirect { .. } => rsx! {},
    }
}
