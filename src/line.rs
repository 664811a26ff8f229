//! Rendered log lines.

use core::fmt::{self, Write};

use crate::value::LogValue;

/// Maximum length in bytes of a line held in a fixed buffer.
///
/// Longer lines are truncated by sinks that render into a buffer.
pub const LINE_CAPACITY: usize = 128;

/// Maximum length in bytes of a tag pattern held by a [`Filter`](crate::filter::Filter).
pub const TAG_CAPACITY: usize = 32;

/// A `"<label>: <value>"` line, rendered lazily through [`Display`](core::fmt::Display).
#[derive(Debug)]
pub struct Line<'a, V: ?Sized> {
    label: &'a str,
    value: &'a V,
}

impl<'a, V: LogValue + ?Sized> Line<'a, V> {
    /// Creates a new [`Line`].
    #[inline]
    pub const fn new(label: &'a str, value: &'a V) -> Self {
        Self { label, value }
    }

    /// Returns the label.
    #[inline]
    pub const fn label(&self) -> &'a str {
        self.label
    }
}

impl<V: LogValue + ?Sized> fmt::Display for Line<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)?;
        f.write_str(": ")?;

        self.value.fmt_value(f)
    }
}

/// A fixed-capacity line buffer that truncates on a char boundary instead of failing.
#[derive(Debug, Default)]
pub(crate) struct LineBuf<const N: usize> {
    buf: heapless::String<N>,
    truncated: bool,
}

impl<const N: usize> LineBuf<N> {
    pub(crate) const fn new() -> Self {
        Self {
            buf: heapless::String::new(),
            truncated: false,
        }
    }

    /// Renders `args` into a new buffer.
    pub(crate) fn render(args: fmt::Arguments<'_>) -> Self {
        let mut this = Self::new();

        // Writing never fails, overflow only sets `truncated`.
        let _ = this.write_fmt(args);

        this
    }

    #[cfg(any(test, feature = "defmt"))]
    pub(crate) fn as_str(&self) -> &str {
        self.buf.as_str()
    }

    pub(crate) const fn truncated(&self) -> bool {
        self.truncated
    }

    pub(crate) fn into_inner(self) -> heapless::String<N> {
        self.buf
    }
}

impl<const N: usize> Write for LineBuf<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.truncated {
            return Ok(());
        }

        if self.buf.push_str(s).is_ok() {
            return Ok(());
        }

        for c in s.chars() {
            if self.buf.push(c).is_err() {
                self.truncated = true;

                break;
            }
        }

        Ok(())
    }
}
