//! Applies a theme descriptor to a style sink.

use super::descriptor::ThemeDescriptor;
use super::mapping;
use super::sink::StyleSink;

/// What a single apply pass did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Option names that resolved and were written.
    pub applied: Vec<String>,
    /// Option names with no mapping, left untouched.
    pub skipped: Vec<String>,
}

impl ApplyReport {
    pub fn applied_count(&self) -> usize {
        self.applied.len()
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Write every known option of `descriptor` into `sink`.
///
/// Unknown options are skipped silently, so a newer backend can send
/// options this client does not understand yet. Re-applying the same
/// descriptor yields the same state.
pub fn apply<S: StyleSink + ?Sized>(descriptor: &ThemeDescriptor, sink: &mut S) {
    apply_with_report(descriptor, sink);
}

/// Same as [`apply`], also reporting which options were used.
pub fn apply_with_report<S: StyleSink + ?Sized>(
    descriptor: &ThemeDescriptor,
    sink: &mut S,
) -> ApplyReport {
    let mut report = ApplyReport::default();

    for (option, value) in descriptor.iter() {
        match mapping::lookup(option) {
            Some(target) => {
                sink.write(target, value);
                report.applied.push(option.to_string());
            }
            None => {
                tracing::debug!(option = %option, "Skipping unknown theme option");
                report.skipped.push(option.to_string());
            }
        }
    }

    report
}
