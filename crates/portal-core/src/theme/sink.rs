//! Style sinks: the single write surface for the document's visual state.
//!
//! The applier never touches the document directly. It writes through a
//! [`StyleSink`], so tests can swap in [`MemoryStyleSink`] or
//! [`RecordingStyleSink`] and the UI crate can provide a sink backed by the
//! live document.

use std::collections::BTreeMap;

use super::mapping::StyleTarget;

/// Destination for resolved theme writes.
pub trait StyleSink {
    /// Set `target` to `value`. Later writes to the same target win.
    fn write(&mut self, target: StyleTarget, value: &str);
}

impl<S: StyleSink + ?Sized> StyleSink for &mut S {
    fn write(&mut self, target: StyleTarget, value: &str) {
        (**self).write(target, value);
    }
}

impl<S: StyleSink + ?Sized> StyleSink for Box<S> {
    fn write(&mut self, target: StyleTarget, value: &str) {
        (**self).write(target, value);
    }
}

/// In-memory visual state with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStyleSink {
    values: BTreeMap<StyleTarget, String>,
}

impl MemoryStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing state, e.g. the build-time defaults.
    pub fn with_defaults<'a>(defaults: impl IntoIterator<Item = (StyleTarget, &'a str)>) -> Self {
        let mut sink = Self::new();
        for (target, value) in defaults {
            sink.write(target, value);
        }
        sink
    }

    /// Current value of a target
    pub fn get(&self, target: StyleTarget) -> Option<&str> {
        self.values.get(&target).map(String::as_str)
    }

    /// Copy of the full state
    pub fn snapshot(&self) -> BTreeMap<StyleTarget, String> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl StyleSink for MemoryStyleSink {
    fn write(&mut self, target: StyleTarget, value: &str) {
        self.values.insert(target, value.to_string());
    }
}

/// A single recorded write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleWrite {
    pub target: StyleTarget,
    pub value: String,
}

/// Records every write in order, without collapsing repeats.
#[derive(Debug, Clone, Default)]
pub struct RecordingStyleSink {
    writes: Vec<StyleWrite>,
}

impl RecordingStyleSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> &[StyleWrite] {
        &self.writes
    }

    /// Drain recorded writes
    pub fn take(&mut self) -> Vec<StyleWrite> {
        std::mem::take(&mut self.writes)
    }
}

impl StyleSink for RecordingStyleSink {
    fn write(&mut self, target: StyleTarget, value: &str) {
        self.writes.push(StyleWrite {
            target,
            value: value.to_string(),
        });
    }
}
