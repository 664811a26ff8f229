//! Forwarding to [`defmt`].

use core::fmt::Arguments;

use crate::{LINE_CAPACITY, Severity, line::LineBuf, sink::Sink};

/// Emits lines through [`defmt`].
///
/// `defmt` does not accept [`core::fmt`] arguments, so the line is rendered into a stack buffer
/// of [`LINE_CAPACITY`] bytes first and sent as a string. Longer lines are truncated and end
/// with `…`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefmtSink;

impl Sink for DefmtSink {
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        let buf = LineBuf::<LINE_CAPACITY>::render(line);
        let line = buf.as_str();
        let ellipsis = if buf.truncated() { "…" } else { "" };

        match severity {
            Severity::Error => defmt::error!("{=str}: {=str}{=str}", tag, line, ellipsis),
            Severity::Warn => defmt::warn!("{=str}: {=str}{=str}", tag, line, ellipsis),
            Severity::Info => defmt::info!("{=str}: {=str}{=str}", tag, line, ellipsis),
            Severity::Debug => defmt::debug!("{=str}: {=str}{=str}", tag, line, ellipsis),
        }
    }
}
