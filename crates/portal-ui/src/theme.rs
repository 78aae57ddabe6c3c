//! Tenant theming for the live document.
//!
//! [`ThemeLoader`] wraps the whole app. Its children render straight away
//! with the build-time styles; the tenant theme lands whenever the request
//! resolves, possibly after first paint.

use async_trait::async_trait;
use dioxus::prelude::*;
use portal_core::{
    CancellationToken, StyleSink, StyleTarget, ThemeDescriptor, ThemeLoadError, ThemeSource,
};

use crate::api::ApiClient;

/// Writes style values onto `document.documentElement`.
///
/// Goes through the renderer's document bridge, so the same sink works in
/// the browser and in the desktop webview.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentStyleSink;

impl DocumentStyleSink {
    pub fn new() -> Self {
        Self
    }
}

impl StyleSink for DocumentStyleSink {
    fn write(&mut self, target: StyleTarget, value: &str) {
        dioxus::document::eval(&set_property_script(target, value));
    }
}

/// JavaScript statement for a single style write
pub fn set_property_script(target: StyleTarget, value: &str) -> String {
    // JSON string literals are valid JS string literals.
    let name = serde_json::Value::from(target.property_name()).to_string();
    let value = serde_json::Value::from(value).to_string();
    format!("document.documentElement.style.setProperty({}, {});", name, value)
}

/// Theme descriptor fetched from the backend
#[derive(Debug, Clone)]
pub struct HttpThemeSource {
    client: ApiClient,
    path: String,
}

impl HttpThemeSource {
    pub fn new(client: ApiClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl ThemeSource for HttpThemeSource {
    async fn fetch_theme(&self) -> Result<ThemeDescriptor, ThemeLoadError> {
        let payload = self.client.get_json(&self.path).await?;
        ThemeDescriptor::from_json(&payload)
    }
}

/// Fetches the tenant theme once per mount and applies it.
///
/// Reads the [`ApiClient`] from context; without one the document keeps its
/// default styling. The request is cancelled when the component unmounts, so
/// a late response never touches the document.
#[component]
pub fn ThemeLoader(theme_path: String, children: Element) -> Element {
    let client = try_use_context::<ApiClient>();
    let token = use_hook(CancellationToken::new);

    use_drop({
        let token = token.clone();
        move || token.cancel()
    });

    use_hook(|| {
        let Some(client) = client else {
            tracing::warn!("No API client in context, keeping default styling");
            return;
        };
        let token = token.clone();
        let loader = portal_core::ThemeLoader::new(HttpThemeSource::new(client, theme_path));
        spawn(async move {
            let mut sink = DocumentStyleSink::new();
            loader.load(&mut sink, &token).await;
        });
    });

    rsx! {
        {children}
    }
}
