//! Diagnostics of the crate itself.
//!
//! These bypass the sinks and go straight to the enabled backends. `defmt` has no targets, the
//! target is dropped for it.

/// Emits one diagnostic at `$level` to every enabled backend.
///
/// `$level` names the macro of each backend, so it must be one of `trace`, `debug`, `info`,
/// `warn` or `error`.
macro_rules! diagnostic {
    ($level:ident, target: $target:expr, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!(target: $target, $($arg)+);

        #[cfg(feature = "log")]
        log::$level!(target: $target, $($arg)+);

        #[cfg(feature = "defmt")]
        defmt::$level!($($arg)+);
    };
}

macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::logging::diagnostic!(trace, $($arg)+);
    };
}

// Suffixed to stay clear of the exported `debug!` and `warn!`.
macro_rules! debug_ {
    ($($arg:tt)+) => {
        $crate::logging::diagnostic!(debug, $($arg)+);
    };
}

macro_rules! warn_ {
    ($($arg:tt)+) => {
        $crate::logging::diagnostic!(warn, $($arg)+);
    };
}

pub(crate) use debug_ as debug;
pub(crate) use diagnostic;
pub(crate) use trace;
pub(crate) use warn_ as warn;
