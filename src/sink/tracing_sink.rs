//! Forwarding to [`tracing`].

use core::fmt::Arguments;

use crate::{Severity, sink::Sink};

const TARGET: &str = "safelog";

/// Emits lines as [`tracing`] events.
///
/// `tracing` targets must be known at compile time, so every event uses the target `safelog`
/// and carries the tag in a `tag` field. Subscriber filters such as `tracing_subscriber::EnvFilter`
/// only see the `safelog` target and can not match event fields, so they set one level for every
/// tag. For per-tag levels wrap the sink in a [`Filter`](crate::filter::Filter):
///
/// ```
/// use safelog::{Severity, filter::Filter, sink::TracingSink};
///
/// static SINK: Filter<TracingSink> = Filter::new(TracingSink);
///
/// SINK.set_level("*", Severity::Debug).unwrap();
/// SINK.set_level("wifi", Severity::Warn).unwrap();
///
/// safelog::debug!(sink: SINK, "wifi", "rssi", -67_i8); // dropped
/// safelog::debug!(sink: SINK, "adc", "raw", 1234_u16); // emitted
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl Sink for TracingSink {
    #[inline]
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        match severity {
            Severity::Error => tracing::error!(target: TARGET, tag, "{}", line),
            Severity::Warn => tracing::warn!(target: TARGET, tag, "{}", line),
            Severity::Info => tracing::info!(target: TARGET, tag, "{}", line),
            Severity::Debug => tracing::debug!(target: TARGET, tag, "{}", line),
        }
    }
}
