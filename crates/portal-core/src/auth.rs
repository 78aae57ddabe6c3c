//! Route-level access gate.
//!
//! The gate never reads global auth state. Callers hand it an [`AuthState`]
//! snapshot and get back a [`GateDecision`]; rendering and navigation are
//! left to the UI layer.
//!
//! ## States
//!
//! | `loading` | `current_user` | state             | decision                 |
//! |-----------|----------------|-------------------|--------------------------|
//! | `true`    | any            | `Pending`         | show placeholder         |
//! | `false`   | present        | `Authenticated`   | render protected subtree |
//! | `false`   | absent         | `Unauthenticated` | replace-navigate to login|
//!
//! `Pending` has no timeout. If the auth provider never finishes loading,
//! the placeholder stays up.

use serde::{Deserialize, Serialize};

/// Portal role of a signed-in user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Client,
    Staff,
}

impl Role {
    /// Label shown next to the user's name
    pub fn label(&self) -> &'static str {
        match self {
            Role::Client => "Cliente",
            Role::Staff => "Equipe",
        }
    }
}

/// The signed-in user, as owned by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub display_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
}

/// Snapshot of the auth provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub current_user: Option<UserRecord>,
    pub loading: bool,
}

impl AuthState {
    /// Session restore still in progress
    pub fn loading() -> Self {
        Self {
            current_user: None,
            loading: true,
        }
    }

    pub fn signed_in(user: UserRecord) -> Self {
        Self {
            current_user: Some(user),
            loading: false,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            current_user: None,
            loading: false,
        }
    }
}

impl Default for AuthState {
    fn default() -> Self {
        Self::loading()
    }
}

/// Gate state derived from an [`AuthState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Pending,
    Authenticated,
    Unauthenticated,
}

impl GateState {
    pub fn from_auth(auth: &AuthState) -> Self {
        if auth.loading {
            return GateState::Pending;
        }
        match auth.current_user {
            Some(_) => GateState::Authenticated,
            None => GateState::Unauthenticated,
        }
    }

    pub fn is_settled(&self) -> bool {
        !matches!(self, GateState::Pending)
    }
}

/// How a redirect touches the history stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationMode {
    /// Append a history entry.
    Push,
    /// Overwrite the current entry, so "back" cannot return to it.
    Replace,
}

/// What the gate wants rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    ShowPlaceholder,
    RenderProtected,
    Redirect { to: String, mode: NavigationMode },
}

/// Guards a subtree of routes behind authentication.
///
/// Holds no per-route rules; every route under the gate is treated alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGate {
    login_path: String,
}

impl AuthGate {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn decide(&self, auth: &AuthState) -> GateDecision {
        match GateState::from_auth(auth) {
            GateState::Pending => GateDecision::ShowPlaceholder,
            GateState::Authenticated => GateDecision::RenderProtected,
            GateState::Unauthenticated => GateDecision::Redirect {
                to: self.login_path.clone(),
                mode: NavigationMode::Replace,
            },
        }
    }
}
