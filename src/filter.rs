//! Severity thresholds in front of a sink.
//!
//! A [`Filter`] owns two thresholds, mirroring what embedded logging backends usually provide:
//!
//! - A static level, fixed at construction. Lines less urgent than it never reach the sink.
//! - Runtime levels per tag, changed at any time through [`Filter::set_level`] and
//!   [`Filter::disable`].
//!
//! ```
//! use safelog::{Severity, filter::Filter, mock::Recorder};
//!
//! static SINK: Filter<Recorder<8>> = Filter::new(Recorder::new());
//!
//! SINK.set_level("wifi", Severity::Warn).unwrap();
//!
//! safelog::info!(sink: SINK, "wifi", "rssi", -67_i8);
//! safelog::warn!(sink: SINK, "wifi", "retries", 3_u8);
//! safelog::info!(sink: SINK, "adc", "raw", 1234_u16);
//!
//! assert_eq!(SINK.inner().lines(), ["retries: 3", "raw: 1234"]);
//! ```

use core::{cell::RefCell, fmt::Arguments};

use critical_section::Mutex;

use crate::{
    FilterError, Severity, TAG_CAPACITY,
    logging::{debug, trace, warn},
    sink::Sink,
};

#[cfg(any(feature = "log", feature = "defmt", feature = "tracing"))]
const FILTER: &str = "safelog::filter";

/// The runtime level of tags without a matching pattern, unless changed with the `*` pattern.
pub const DEFAULT_LEVEL: Severity = Severity::Info;

/// A parsed tag pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pattern<'a> {
    /// `*`
    Any,
    /// `prefix*`
    Prefix(&'a str),
    /// `tag`
    Exact(&'a str),
}

impl<'a> Pattern<'a> {
    fn parse(pattern: &'a str) -> Self {
        match pattern.strip_suffix('*') {
            Some("") => Pattern::Any,
            Some(prefix) => Pattern::Prefix(prefix),
            None => Pattern::Exact(pattern),
        }
    }
}

#[derive(Debug)]
struct Entry {
    tag: heapless::String<TAG_CAPACITY>,
    prefix: bool,
    /// `None` disables the tag.
    level: Option<Severity>,
}

impl Entry {
    fn is(&self, tag: &str, prefix: bool) -> bool {
        self.prefix == prefix && self.tag.as_str() == tag
    }
}

#[derive(Debug)]
struct Table<const N: usize> {
    default: Option<Severity>,
    entries: heapless::Vec<Entry, N>,
}

impl<const N: usize> Table<N> {
    const fn new() -> Self {
        Self {
            default: Some(DEFAULT_LEVEL),
            entries: heapless::Vec::new(),
        }
    }

    /// Exact match first, then the longest matching prefix, then the default.
    fn level(&self, tag: &str) -> Option<Severity> {
        if let Some(entry) = self.entries.iter().find(|entry| entry.is(tag, false)) {
            return entry.level;
        }

        self.entries
            .iter()
            .filter(|entry| entry.prefix && tag.starts_with(entry.tag.as_str()))
            .max_by_key(|entry| entry.tag.len())
            .map_or(self.default, |entry| entry.level)
    }

    fn set(&mut self, pattern: &str, level: Option<Severity>) -> Result<(), FilterError> {
        let (tag, prefix) = match Pattern::parse(pattern) {
            Pattern::Any => {
                self.default = level;
                self.entries.clear();

                return Ok(());
            }
            Pattern::Prefix(prefix) => (prefix, true),
            Pattern::Exact(tag) => (tag, false),
        };

        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.is(tag, prefix)) {
            entry.level = level;

            return Ok(());
        }

        let tag = heapless::String::try_from(tag).map_err(|_| FilterError::PatternTooLong)?;

        self.entries
            .push(Entry { tag, prefix, level })
            .map_err(|_| FilterError::TableFull)
    }
}

/// A sink wrapper that drops lines below the static level or the runtime level of their tag.
///
/// Tag patterns:
///
/// - `*` sets the level of every tag and removes all other patterns, so set it first.
///   Defaults to [`DEFAULT_LEVEL`].
/// - `prefix*` matches every tag starting with `prefix`. The longest matching prefix wins.
/// - Any other pattern matches one tag exactly and takes precedence over prefixes.
///
/// Holds up to `N` patterns besides `*`. The runtime table is guarded by a
/// [`critical_section::Mutex`], so a [`Filter`] can live in a `static` and be reconfigured from
/// any context.
pub struct Filter<S, const N: usize = 8> {
    inner: S,
    static_level: Severity,
    table: Mutex<RefCell<Table<N>>>,
}

impl<S, const N: usize> Filter<S, N> {
    /// Creates a new [`Filter`] that lets every severity through statically.
    #[inline]
    pub const fn new(inner: S) -> Self {
        Self::with_static_level(inner, Severity::Debug)
    }

    /// Creates a new [`Filter`] that drops every line less urgent than `static_level`,
    /// regardless of the runtime levels.
    #[inline]
    pub const fn with_static_level(inner: S, static_level: Severity) -> Self {
        Self {
            inner,
            static_level,
            table: Mutex::new(RefCell::new(Table::new())),
        }
    }

    /// Returns the static level.
    #[inline]
    pub const fn static_level(&self) -> Severity {
        self.static_level
    }

    /// Returns a reference to the wrapped sink.
    #[inline]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Consumes the [`Filter`] and returns the wrapped sink.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    /// Sets the runtime level of the tags matching `pattern`.
    ///
    /// Setting a pattern again replaces its level.
    pub fn set_level(&self, pattern: &str, level: Severity) -> Result<(), FilterError> {
        self.set(pattern, Some(level))
    }

    /// Drops every line of the tags matching `pattern`.
    pub fn disable(&self, pattern: &str) -> Result<(), FilterError> {
        self.set(pattern, None)
    }

    /// Removes every pattern and restores the default level to [`DEFAULT_LEVEL`].
    pub fn reset(&self) {
        critical_section::with(|cs| *self.table.borrow_ref_mut(cs) = Table::new());

        trace!(target: FILTER, "Filter reset");
    }

    /// Returns the runtime level of `tag`, or `None` if the tag is disabled.
    pub fn level(&self, tag: &str) -> Option<Severity> {
        critical_section::with(|cs| self.table.borrow_ref(cs).level(tag))
    }

    /// Returns `true` if a line at `severity` for `tag` would reach the wrapped sink.
    pub fn is_enabled(&self, severity: Severity, tag: &str) -> bool {
        severity >= self.static_level && self.level(tag).is_some_and(|level| severity >= level)
    }

    fn set(&self, pattern: &str, level: Option<Severity>) -> Result<(), FilterError> {
        let result = critical_section::with(|cs| self.table.borrow_ref_mut(cs).set(pattern, level));

        match result {
            Ok(()) => {
                debug!(target: FILTER, "Level set. pattern: {}, level: {:?}", pattern, level);
            }
            Err(_err) => {
                warn!(target: FILTER, "Failed to set level. pattern: {}, error: {}", pattern, _err);
            }
        }

        result
    }
}

impl<S, const N: usize> core::fmt::Debug for Filter<S, N>
where
    S: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Filter")
            .field("inner", &self.inner)
            .field("static_level", &self.static_level)
            .finish_non_exhaustive()
    }
}

impl<S, const N: usize> Sink for Filter<S, N>
where
    S: Sink,
{
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        if self.is_enabled(severity, tag) {
            self.inner.write(severity, tag, line);
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{debug, error, info, mock::Recorder, tests::init_tracing, warn};

    use super::*;

    fn filter() -> Filter<Recorder<16>, 4> {
        init_tracing();

        Filter::new(Recorder::new())
    }

    #[test]
    fn default_level_is_info() {
        let sink = filter();

        debug!(sink: sink, "T", "debug", 1_u8);
        info!(sink: sink, "T", "info", 2_u8);

        assert_eq!(sink.level("T"), Some(Severity::Info));
        assert_eq!(sink.inner().lines(), ["info: 2"]);
    }

    #[test]
    fn threshold_above_debug_drops_only_debug() {
        let sink = filter();

        sink.set_level("*", Severity::Debug).expect("Must set");
        sink.set_level("T", Severity::Info).expect("Must set");

        debug!(sink: sink, "T", "debug", 1_u8);
        info!(sink: sink, "T", "info", 2_u8);
        warn!(sink: sink, "T", "warn", 3_u8);
        error!(sink: sink, "T", "error", 4_u8);
        debug!(sink: sink, "other", "debug", 5_u8);

        assert_eq!(
            sink.inner().lines(),
            ["info: 2", "warn: 3", "error: 4", "debug: 5"]
        );
    }

    #[test]
    fn static_level_wins_over_runtime_level() {
        init_tracing();

        let sink = Filter::<_, 4>::with_static_level(Recorder::<8>::new(), Severity::Warn);

        sink.set_level("T", Severity::Debug).expect("Must set");

        debug!(sink: sink, "T", "debug", 1_u8);
        info!(sink: sink, "T", "info", 2_u8);
        warn!(sink: sink, "T", "warn", 3_u8);

        assert_eq!(sink.static_level(), Severity::Warn);
        assert_eq!(sink.inner().lines(), ["warn: 3"]);
    }

    #[test]
    fn precedence() {
        let sink = filter();

        sink.set_level("*", Severity::Error).expect("Must set");
        sink.set_level("wifi*", Severity::Warn).expect("Must set");
        sink.set_level("wifi_drv*", Severity::Info).expect("Must set");
        sink.set_level("wifi_drv_rx", Severity::Debug).expect("Must set");

        assert_eq!(sink.level("adc"), Some(Severity::Error));
        assert_eq!(sink.level("wifi"), Some(Severity::Warn));
        assert_eq!(sink.level("wifi_mgr"), Some(Severity::Warn));
        assert_eq!(sink.level("wifi_drv_tx"), Some(Severity::Info));
        assert_eq!(sink.level("wifi_drv_rx"), Some(Severity::Debug));
    }

    #[test]
    fn wildcard_overrides_every_tag() {
        let sink = filter();

        sink.set_level("wifi*", Severity::Warn).expect("Must set");
        sink.disable("noisy").expect("Must disable");
        sink.set_level("T", Severity::Error).expect("Must set");

        sink.set_level("*", Severity::Debug).expect("Must set");

        assert_eq!(sink.level("wifi_drv"), Some(Severity::Debug));
        assert_eq!(sink.level("noisy"), Some(Severity::Debug));
        assert_eq!(sink.level("T"), Some(Severity::Debug));

        debug!(sink: sink, "T", "debug", 1_u8);

        assert_eq!(sink.inner().lines(), ["debug: 1"]);

        // The table is empty again.
        for tag in ["a", "b", "c", "d"] {
            sink.set_level(tag, Severity::Warn).expect("Must fit");
        }
    }

    #[test]
    fn setting_a_pattern_again_replaces_it() {
        let sink = filter();

        for _ in 0..8 {
            sink.set_level("T", Severity::Warn).expect("Must replace");
        }

        sink.set_level("T", Severity::Error).expect("Must replace");

        assert_eq!(sink.level("T"), Some(Severity::Error));
    }

    #[test]
    fn disable() {
        let sink = filter();

        sink.disable("noisy").expect("Must disable");

        error!(sink: sink, "noisy", "error", 1_u8);
        error!(sink: sink, "T", "error", 2_u8);

        assert_eq!(sink.level("noisy"), None);
        assert!(!sink.is_enabled(Severity::Error, "noisy"));
        assert_eq!(sink.inner().lines(), ["error: 2"]);

        sink.disable("*").expect("Must disable");

        assert!(!sink.is_enabled(Severity::Error, "T"));
    }

    #[test]
    fn reset() {
        let sink = filter();

        sink.set_level("*", Severity::Error).expect("Must set");
        sink.disable("T").expect("Must disable");

        sink.reset();

        assert_eq!(sink.level("T"), Some(DEFAULT_LEVEL));
        assert_eq!(sink.level("other"), Some(DEFAULT_LEVEL));
    }

    #[test]
    fn table_full() {
        let sink = filter();

        for tag in ["a", "b", "c", "d"] {
            sink.set_level(tag, Severity::Warn).expect("Must fit");
        }

        assert_eq!(
            sink.set_level("e", Severity::Warn),
            Err(FilterError::TableFull)
        );

        // Replacing and the default need no room.
        sink.set_level("a", Severity::Error).expect("Must replace");
        sink.set_level("*", Severity::Error).expect("Must set default");

        sink.set_level("e", Severity::Warn).expect("Must fit after `*`");
    }

    #[test]
    fn pattern_too_long() {
        let sink = filter();

        let long = "x".repeat(TAG_CAPACITY + 1);
        let fits = "x".repeat(TAG_CAPACITY);

        assert_eq!(
            sink.set_level(&long, Severity::Warn),
            Err(FilterError::PatternTooLong)
        );

        sink.set_level(&fits, Severity::Warn).expect("Must fit");

        // The trailing `*` is not stored.
        sink.set_level(&std::format!("{fits}*"), Severity::Warn)
            .expect("Must fit");
    }
}
