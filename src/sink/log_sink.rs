//! Forwarding to the [`log`] facade.

use core::fmt::Arguments;

use crate::{Severity, sink::Sink};

/// Forwards lines to the [`log`] facade, using the tag as the record target.
///
/// Filtering is left to the facade: its `max_level_*` and `release_max_level_*` features, the
/// runtime [`log::set_max_level`], and the installed logger's per-target configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl Sink for LogSink {
    #[inline]
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        log::log!(target: tag, log::Level::from(severity), "{}", line);
    }
}
