//! Custom tracing layers for the portal
//!
//! Native builds use tracing-subscriber's fmt layers directly. In the
//! browser there is no stdout worth writing to, so [`BrowserConsoleLayer`]
//! renders each event to a single line and hands it to the devtools
//! console at the matching severity.

use std::fmt::{self, Write as _};

use tracing::Level;
use tracing::field::{Field, Visit};

/// Collects an event's message and fields
#[derive(Debug, Default)]
pub struct FieldCollector {
    pub message: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl Visit for FieldCollector {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push((field.name().to_string(), format!("{:?}", value)));
        }
    }
}

/// One rendered console line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub level: Level,
    pub text: String,
}

impl ConsoleLine {
    /// Render `LEVEL target: message key=value ...`
    pub fn render(level: Level, target: &str, collector: &FieldCollector) -> Self {
        let mut text = format!("{} {}:", level, target);
        if let Some(message) = &collector.message {
            let _ = write!(text, " {}", message);
        }
        for (key, value) in &collector.fields {
            let _ = write!(text, " {}={}", key, value);
        }
        Self { level, text }
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserConsoleLayer;

#[cfg(target_arch = "wasm32")]
mod browser {
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer};
    use wasm_bindgen::JsValue;
    use web_sys::console;

    use super::{ConsoleLine, FieldCollector};

    /// Layer that forwards events to the browser console
    #[derive(Debug, Default, Clone, Copy)]
    pub struct BrowserConsoleLayer;

    impl BrowserConsoleLayer {
        pub fn new() -> Self {
            Self
        }
    }

    impl<S: Subscriber> Layer<S> for BrowserConsoleLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut collector = FieldCollector::default();
            event.record(&mut collector);

            let meta = event.metadata();
            let line = ConsoleLine::render(*meta.level(), meta.target(), &collector);
            let value = JsValue::from_str(&line.text);

            match line.level {
                Level::ERROR => console::error_1(&value),
                Level::WARN => console::warn_1(&value),
                Level::INFO => console::info_1(&value),
                _ => console::debug_1(&value),
            }
        }
    }
}
