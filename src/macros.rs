/// Logs `"<label>: <value>"` at the given [`Severity`](crate::Severity).
///
/// The value may be any type implementing [`LogValue`](crate::LogValue) and is taken by
/// reference. Without `sink:` the line goes to [`Global`](crate::sink::Global).
///
/// ```
/// # use safelog::{Severity, mock::Recorder};
/// let sink = Recorder::<1>::new();
///
/// safelog::emit!(sink: sink, Severity::Warn, "adc", "saturated", true);
///
/// assert_eq!(sink.lines(), ["saturated: true"]);
///
/// safelog::emit!(Severity::Warn, "adc", "saturated", true);
/// ```
#[macro_export]
macro_rules! emit {
    (sink: $sink:expr, $severity:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit(&$sink, $severity, $tag, $label, &$value)
    };
    ($severity:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit(&$crate::sink::Global, $severity, $tag, $label, &$value)
    };
}

/// Logs `"<label>: <value>"` at [`Severity::Error`](crate::Severity::Error).
///
/// See [`emit!`](crate::emit!).
#[macro_export]
macro_rules! error {
    (sink: $sink:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!(sink: $sink, $crate::Severity::Error, $tag, $label, $value)
    };
    ($tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!($crate::Severity::Error, $tag, $label, $value)
    };
}

/// Logs `"<label>: <value>"` at [`Severity::Warn`](crate::Severity::Warn).
///
/// See [`emit!`](crate::emit!).
#[macro_export]
macro_rules! warn {
    (sink: $sink:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!(sink: $sink, $crate::Severity::Warn, $tag, $label, $value)
    };
    ($tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!($crate::Severity::Warn, $tag, $label, $value)
    };
}

/// Logs `"<label>: <value>"` at [`Severity::Info`](crate::Severity::Info).
///
/// See [`emit!`](crate::emit!).
#[macro_export]
macro_rules! info {
    (sink: $sink:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!(sink: $sink, $crate::Severity::Info, $tag, $label, $value)
    };
    ($tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!($crate::Severity::Info, $tag, $label, $value)
    };
}

/// Logs `"<label>: <value>"` at [`Severity::Debug`](crate::Severity::Debug).
///
/// See [`emit!`](crate::emit!).
#[macro_export]
macro_rules! debug {
    (sink: $sink:expr, $tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!(sink: $sink, $crate::Severity::Debug, $tag, $label, $value)
    };
    ($tag:expr, $label:expr, $value:expr $(,)?) => {
        $crate::emit!($crate::Severity::Debug, $tag, $label, $value)
    };
}
