//! Route table.
//!
//! Paths here must match the navigation groups in `portal_core::navigation`
//! exactly, or the matching link never shows as active. The gate's login
//! redirect is derived from [`Route::Login`], so it always lands on a
//! routed page.

use dioxus::prelude::*;

use crate::app::Protected;
use crate::pages::{
    Agenda, Dashboard, Documentos, Login, NotFound, Perfil, PreAtendimento, Processo, Processos,
};

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Dashboard {})]
    #[route("/login")]
    Login {},

    #[layout(Protected)]
        #[route("/dashboard")]
        Dashboard {},
        #[route("/processos")]
        Processos {},
        #[route("/processos/:id")]
        Processo { id: String },
        #[route("/documentos")]
        Documentos {},
        #[route("/pre-atendimento")]
        PreAtendimento {},
        #[route("/agenda")]
        Agenda {},
        #[route("/perfil")]
        Perfil {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Path the auth gate redirects signed-out users to
    pub fn login_path() -> String {
        Route::Login {}.to_string()
    }
}
