//! White-label theming.
//!
//! Data flows one way: [`ThemeLoader`] fetches a [`ThemeDescriptor`], the
//! [`mapping`] table resolves each option, and [`apply`] writes the result
//! into a [`StyleSink`].

pub mod applier;
pub mod descriptor;
pub mod loader;
pub mod mapping;
pub mod sink;
pub mod source;

pub use applier::{ApplyReport, apply, apply_with_report};
pub use descriptor::ThemeDescriptor;
pub use loader::{LoadOutcome, ThemeLoader};
pub use mapping::{StyleTarget, ThemeMapping};
pub use sink::{MemoryStyleSink, RecordingStyleSink, StyleSink, StyleWrite};
pub use source::{FailingThemeSource, StaticThemeSource, ThemeSource};
