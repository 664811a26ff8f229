//! Sinks that receive rendered log lines.
//!
//! A sink owns every decision about whether a line is emitted. The dispatcher never inspects or
//! caches thresholds, it renders the line lazily and hands it over.

use core::fmt::Arguments;

use crate::Severity;

#[cfg(feature = "log")]
mod log_sink;
#[cfg(feature = "log")]
pub use log_sink::LogSink;

#[cfg(feature = "tracing")]
mod tracing_sink;
#[cfg(feature = "tracing")]
pub use tracing_sink::TracingSink;

#[cfg(feature = "defmt")]
mod defmt_sink;
#[cfg(feature = "defmt")]
pub use defmt_sink::DefmtSink;

/// A logging backend.
pub trait Sink {
    /// Writes one line at `severity` for `tag`.
    ///
    /// The sink may drop the line according to its own thresholds. Failures of the underlying
    /// output are the sink's concern and are not reported back.
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>);
}

impl<S> Sink for &S
where
    S: Sink + ?Sized,
{
    #[inline]
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        (*self).write(severity, tag, line)
    }
}

/// The default sink, forwarding to every enabled backend.
///
/// - `log`: [`LogSink`]
/// - `tracing`: [`TracingSink`]
/// - `defmt`: [`DefmtSink`]
///
/// Lines are discarded if no backend feature is enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Global;

impl Sink for Global {
    #[inline]
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        #[cfg(feature = "log")]
        LogSink.write(severity, tag, line);

        #[cfg(feature = "tracing")]
        TracingSink.write(severity, tag, line);

        #[cfg(feature = "defmt")]
        DefmtSink.write(severity, tag, line);

        #[cfg(not(any(feature = "log", feature = "tracing", feature = "defmt")))]
        let _ = (severity, tag, line);
    }
}
