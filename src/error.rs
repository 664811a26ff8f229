/// An error that can occur while configuring a [`Filter`](crate::filter::Filter).
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterError {
    /// The tag pattern is longer than [`TAG_CAPACITY`](crate::TAG_CAPACITY) bytes.
    PatternTooLong,
    /// The filter has no room left for another tag pattern.
    TableFull,
}

impl core::fmt::Display for FilterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::PatternTooLong => write!(f, "Tag pattern too long"),
            Self::TableFull => write!(f, "Filter table full"),
        }
    }
}

impl core::error::Error for FilterError {}

/// An error returned when parsing a [`Severity`](crate::Severity) from a string fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParseSeverityError;

impl core::fmt::Display for ParseSeverityError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown severity")
    }
}

impl core::error::Error for ParseSeverityError {}
