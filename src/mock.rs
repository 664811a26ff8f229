//! In-memory sink for tests and demos.

#![allow(missing_docs)]

use core::{cell::RefCell, fmt::Arguments};

use critical_section::Mutex;

use crate::{LINE_CAPACITY, Severity, TAG_CAPACITY, line::LineBuf, sink::Sink};

/// A recorded line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub severity: Severity,
    pub tag: heapless::String<TAG_CAPACITY>,
    pub line: heapless::String<LINE_CAPACITY>,
    /// The line or the tag did not fit.
    pub truncated: bool,
}

/// A sink that keeps the last `N` lines.
pub struct Recorder<const N: usize = 32> {
    records: Mutex<RefCell<heapless::Vec<Record, N>>>,
}

impl<const N: usize> Recorder<N> {
    pub const fn new() -> Self {
        Self {
            records: Mutex::new(RefCell::new(heapless::Vec::new())),
        }
    }

    pub fn records(&self) -> heapless::Vec<Record, N> {
        critical_section::with(|cs| self.records.borrow_ref(cs).clone())
    }

    pub fn lines(&self) -> heapless::Vec<heapless::String<LINE_CAPACITY>, N> {
        critical_section::with(|cs| {
            self.records
                .borrow_ref(cs)
                .iter()
                .map(|record| record.line.clone())
                .collect()
        })
    }

    pub fn last(&self) -> Option<Record> {
        critical_section::with(|cs| self.records.borrow_ref(cs).last().cloned())
    }

    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.records.borrow_ref(cs).len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        critical_section::with(|cs| self.records.borrow_ref_mut(cs).clear())
    }
}

impl<const N: usize> Default for Recorder<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> core::fmt::Debug for Recorder<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Recorder")
            .field("records", &self.records())
            .finish()
    }
}

impl<const N: usize> Sink for Recorder<N> {
    fn write(&self, severity: Severity, tag: &str, line: Arguments<'_>) {
        // Rendered outside of the critical section.
        let line = LineBuf::<LINE_CAPACITY>::render(line);
        let tag = LineBuf::<TAG_CAPACITY>::render(format_args!("{tag}"));

        let record = Record {
            severity,
            truncated: line.truncated() || tag.truncated(),
            tag: tag.into_inner(),
            line: line.into_inner(),
        };

        critical_section::with(|cs| {
            let mut records = self.records.borrow_ref_mut(cs);

            if records.is_full() {
                records.remove(0);
            }

            // Room was made above.
            let _ = records.push(record);
        });
    }
}

#[cfg(test)]
mod test {
    use crate::{emit, info};

    use super::*;

    #[test]
    fn keeps_the_last_lines() {
        let recorder = Recorder::<2>::new();

        for value in 1_u8..=3 {
            info!(sink: recorder, "T", "n", value);
        }

        assert_eq!(recorder.len(), 2);
        assert_eq!(recorder.lines(), ["n: 2", "n: 3"]);

        recorder.clear();

        assert!(recorder.is_empty());
        assert_eq!(recorder.last(), None);
    }

    #[test]
    fn long_lines_are_truncated() {
        let recorder = Recorder::<1>::new();
        let long = "x".repeat(LINE_CAPACITY);

        emit(&recorder, Severity::Info, "T", "long", long.as_str());

        let record = recorder.last().expect("Must record");

        assert!(record.truncated);
        assert_eq!(record.line.len(), LINE_CAPACITY);
        assert!(record.line.starts_with("long: xxx"));
    }
}
