//! Stateful section scanner for the payroll line stream.

use tracing::trace;

use crate::models::payroll::{CandidateLine, RawLine};

use super::patterns::{
    BANNER_PREFIX, DATE_PREFIX, FOOTER_SYSTEM, HEADER_CLASSIFICATION, HEADER_DESCRIPTION,
    SEPARATOR,
};

/// Event produced by the scanner for one surviving line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent {
    /// The header marker was seen and the data section is open from here
    /// on. Re-emitted on every recurrence of the marker (statements repeat
    /// it per page); a recurrence has no other effect.
    SectionStart {
        /// Line the marker appeared on.
        line: usize,
    },

    /// A line eligible for field extraction.
    Candidate(CandidateLine),
}

/// Single-pass filter that locates the data region and drops structural
/// noise.
///
/// Lazy and non-restartable: the line stream is consumed as events are
/// pulled. The section flag is monotonic for the lifetime of the scanner;
/// once the header marker has been seen the section stays open for the rest
/// of the document. One scanner serves exactly one document.
pub struct SectionScanner<I> {
    lines: I,
    entered: bool,
}

impl<I> SectionScanner<I>
where
    I: Iterator<Item = RawLine>,
{
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            entered: false,
        }
    }

    /// True if `line` (already trimmed) is structural noise inside the data
    /// section: blank, ruled separator, banner, page footer, or date stamp.
    fn is_noise(line: &str) -> bool {
        line.is_empty()
            || line.contains(SEPARATOR)
            || line.starts_with(BANNER_PREFIX)
            || line.contains(FOOTER_SYSTEM)
            || line.starts_with(DATE_PREFIX)
    }
}

impl<I> Iterator for SectionScanner<I>
where
    I: Iterator<Item = RawLine>,
{
    type Item = ScanEvent;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let raw = self.lines.next()?;
            let trimmed = raw.text.trim();

            // The header line itself is never forwarded.
            if trimmed.contains(HEADER_CLASSIFICATION) && trimmed.contains(HEADER_DESCRIPTION) {
                self.entered = true;
                return Some(ScanEvent::SectionStart { line: raw.number });
            }

            if !self.entered {
                continue;
            }

            if Self::is_noise(trimmed) {
                trace!("line {}: structural noise discarded", raw.number);
                continue;
            }

            return Some(ScanEvent::Candidate(CandidateLine {
                text: trimmed.to_string(),
                number: raw.number,
            }));
        }
    }
}
