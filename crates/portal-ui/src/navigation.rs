//! Top bar (desktop) and bottom drawer (mobile) navigation.

use dioxus::prelude::*;
use portal_core::{
    MatchStrategy, NavGroup, NavigationResolver, ResolvedItem, ResolvedNavigation, Surface,
    UserRecord,
};

/// Both navigation surfaces for the current path.
///
/// The resolver runs on every render; there is no navigation state of its
/// own. CSS decides which surface is visible at a given viewport width.
#[component]
pub fn NavigationBar(
    current_path: String,
    #[props(default)] strategy: MatchStrategy,
    user: Option<UserRecord>,
    on_sign_out: EventHandler<()>,
) -> Element {
    let resolver = NavigationResolver::new(strategy);
    let desktop = resolver.resolve(&current_path, Surface::Desktop);
    let mobile = resolver.resolve(&current_path, Surface::Mobile);

    rsx! {
        header { class: "portal-header",
            nav { class: "nav-desktop",
                NavSurface { navigation: desktop }
                if let Some(user) = user.clone() {
                    UserBadge { user: user, on_sign_out: on_sign_out }
                }
            }
        }
        nav { class: "nav-mobile",
            NavSurface { navigation: mobile }
            if let Some(user) = user {
                UserBadge { user: user, on_sign_out: on_sign_out }
            }
        }
    }
}

#[component]
fn NavSurface(navigation: ResolvedNavigation) -> Element {
    let surface = navigation.surface;

    rsx! {
        NavGroupLinks { class: surface.group_class(NavGroup::Left), entries: navigation.left.clone() }
        NavGroupLinks { class: surface.group_class(NavGroup::Right), entries: navigation.right.clone() }
    }
}

#[component]
fn NavGroupLinks(class: &'static str, entries: Vec<ResolvedItem>) -> Element {
    rsx! {
        ul { class: "{class}",
            for entry in entries {
                li { key: "{entry.item.path}",
                    Link {
                        class: "{entry.class}",
                        to: entry.item.path,
                        span { class: "nav-icon", "{entry.item.icon}" }
                        span { class: "nav-label", "{entry.item.label}" }
                    }
                }
            }
        }
    }
}

#[component]
fn UserBadge(user: UserRecord, on_sign_out: EventHandler<()>) -> Element {
    let role = user.role.label();

    rsx! {
        div { class: "user-badge",
            span { class: "user-badge__name", "{user.display_name}" }
            span { class: "user-badge__role", "{role}" }
            button {
                class: "user-badge__signout",
                onclick: move |_| on_sign_out.call(()),
                "Sair"
            }
        }
    }
}
