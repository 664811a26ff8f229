//! # safelog
//!
//! Type-dispatched logging for `no_std` environments.
//!
//! Embedded logging APIs are usually `printf`-shaped: the format specifier must match the exact
//! native width of its argument, and fixed-width integers are not guaranteed to alias any native
//! width. `safelog` removes the format string from the call site. Every call takes a tag, a label
//! and exactly one value, and the value's static type selects the routine that renders it:
//!
//! ```
//! # use safelog::{info, mock::Recorder};
//! let sink = Recorder::<4>::new();
//!
//! let sensor_id: u8 = 42;
//! let temperature: i32 = -5;
//! let voltage: f32 = 3.3;
//!
//! info!(sink: sink, "LoggerTest", "Sensor ID", sensor_id);
//! info!(sink: sink, "LoggerTest", "Temperature", temperature);
//! info!(sink: sink, "LoggerTest", "Voltage", voltage);
//! info!(sink: sink, "LoggerTest", "Status", "Active");
//!
//! let lines = sink.lines();
//! assert_eq!(lines[0], "Sensor ID: 42");
//! assert_eq!(lines[1], "Temperature: -5");
//! assert_eq!(lines[2], "Voltage: 3.300000");
//! assert_eq!(lines[3], "Status: Active");
//! ```
//!
//! Values of any other type are rejected at compile time, see [`LogValue`].
//!
//! Without an explicit `sink:` the macros write to [`Global`](sink::Global), which forwards to
//! every enabled backend. Severity thresholds belong to the sink: the backend's own filters, or a
//! [`Filter`](filter::Filter) wrapped around any sink.
//!
//! ## Features
//!
//! - `log`: Forwards lines to [`log`](https://docs.rs/log/latest/log/), with the tag as the target.
//! - `tracing`: Forwards lines to [`tracing`](https://docs.rs/tracing/latest/tracing/), with the tag as a field.
//! - `defmt`: Forwards lines to [`defmt`](https://docs.rs/defmt/latest/defmt/index.html)
//!   and implements [`defmt::Format`](https://docs.rs/defmt/latest/defmt/trait.Format.html) for structs and enums.
//! - `alloc`: Implements [`LogValue`] for `alloc::string::String`.
//!
//! The [`Filter`](filter::Filter) and [`Recorder`](mock::Recorder) sinks use
//! [`critical_section`](https://docs.rs/critical-section/latest/critical_section/), the target
//! must provide an implementation.

#![no_std]
#![deny(unsafe_code)]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod severity;
pub use severity::Severity;

mod error;
pub use error::{FilterError, ParseSeverityError};

mod value;
pub use value::LogValue;

mod line;
pub use line::{LINE_CAPACITY, Line, TAG_CAPACITY};

pub mod filter;
pub mod sink;
pub use sink::Sink;

mod macros;

pub(crate) mod logging;

#[doc(hidden)]
pub mod mock;

#[cfg(test)]
mod tests;

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(test)]
extern crate std;

/// Renders `"<label>: <value>"` and writes it to `sink` at `severity`.
///
/// The routine that renders `value` is selected by its static type, see [`LogValue`].
/// Whether the line is actually emitted is decided by the sink.
///
/// Usually called through [`error!`], [`warn!`], [`info!`] or [`debug!`].
#[inline]
pub fn emit<S, V>(sink: &S, severity: Severity, tag: &str, label: &str, value: &V)
where
    S: Sink + ?Sized,
    V: LogValue + ?Sized,
{
    sink.write(severity, tag, format_args!("{}", Line::new(label, value)));
}
