//! Log severities.

use core::str::FromStr;

use crate::error::ParseSeverityError;

/// The severity of a log line.
///
/// Severities are ordered by urgency: `Error > Warn > Info > Debug`.
/// A threshold of [`Severity::Info`] lets `Info`, `Warn` and `Error` through and drops `Debug`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Severity {
    /// Debugging detail.
    Debug,
    /// Normal operation.
    Info,
    /// Something unexpected that the system recovered from.
    Warn,
    /// Something failed.
    Error,
}

impl Severity {
    /// All severities, least urgent first.
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Returns the upper case name of the severity.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warn => "WARN",
            Severity::Info => "INFO",
            Severity::Debug => "DEBUG",
        }
    }
}

impl core::fmt::Display for Severity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Parses `error`, `warn`, `info`, `debug` or their first letter, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| {
                let name = severity.as_str();

                name.eq_ignore_ascii_case(s) || name[..1].eq_ignore_ascii_case(s)
            })
            .ok_or(ParseSeverityError)
    }
}

#[cfg(feature = "log")]
impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warn => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
        }
    }
}

#[cfg(feature = "tracing")]
impl From<Severity> for tracing::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => tracing::Level::ERROR,
            Severity::Warn => tracing::Level::WARN,
            Severity::Info => tracing::Level::INFO,
            Severity::Debug => tracing::Level::DEBUG,
        }
    }
}
