//! Page components.
//!
//! Business content (case lists, folders, legal text) comes from the
//! backend; these pages are the frames it renders into.

use dioxus::prelude::*;
use portal_core::GateState;
use portal_ui::use_auth;

use crate::routes::Route;

#[component]
fn PageFrame(title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        section { class: "page",
            h1 { class: "page__title", "{title}" }
            p { class: "page__subtitle", "{subtitle}" }
            {children}
        }
    }
}

#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let nav = navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        submitting.set(true);
        error.set(None);

        spawn(async move {
            match auth.sign_in_with_credentials(email(), password()).await {
                Ok(()) => {
                    nav.replace(Route::Dashboard {});
                }
                Err(e) if e.is_unauthorized() => {
                    error.set(Some("E-mail ou senha inválidos.".to_string()));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Sign-in request failed");
                    error.set(Some("Não foi possível entrar. Tente novamente.".to_string()));
                }
            }
            submitting.set(false);
        });
    };

    if GateState::from_auth(&auth.snapshot()) == GateState::Authenticated {
        return rsx! {
            PageFrame { title: "Você já está conectado", subtitle: "",
                Link { class: "button", to: Route::Dashboard {}, "Ir para o início" }
            }
        };
    }

    rsx! {
        section { class: "login",
            h1 { class: "login__title", "Portal do Cliente" }
            form { class: "login__form", onsubmit: submit,
                label { "E-mail" }
                input {
                    r#type: "email",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { "Senha" }
                input {
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                if let Some(message) = error() {
                    p { class: "login__error", "{message}" }
                }
                button { r#type: "submit", disabled: submitting(), "Entrar" }
            }
        }
    }
}

#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let name = auth
        .current_user()
        .map(|user| user.display_name)
        .unwrap_or_default();

    rsx! {
        PageFrame { title: "Olá, {name}", subtitle: "Acompanhe seus processos e atendimentos." }
    }
}

#[component]
pub fn Processos() -> Element {
    rsx! {
        PageFrame { title: "Processos", subtitle: "Andamento dos seus processos." }
    }
}

#[component]
pub fn Processo(id: String) -> Element {
    rsx! {
        PageFrame { title: "Processo {id}", subtitle: "Movimentações e documentos do processo.",
            Link { to: Route::Processos {}, "Voltar para processos" }
        }
    }
}

#[component]
pub fn Documentos() -> Element {
    rsx! {
        PageFrame { title: "Documentos", subtitle: "Pastas e arquivos compartilhados." }
    }
}

#[component]
pub fn PreAtendimento() -> Element {
    rsx! {
        PageFrame { title: "Pré-atendimento", subtitle: "Conte-nos sobre o seu caso." }
    }
}

#[component]
pub fn Agenda() -> Element {
    rsx! {
        PageFrame { title: "Agenda", subtitle: "Audiências e reuniões marcadas." }
    }
}

#[component]
pub fn Perfil() -> Element {
    rsx! {
        PageFrame { title: "Perfil", subtitle: "Seus dados de contato." }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! {
        PageFrame { title: "Página não encontrada", subtitle: "{path}",
            Link { to: Route::Dashboard {}, "Voltar ao início" }
        }
    }
}
