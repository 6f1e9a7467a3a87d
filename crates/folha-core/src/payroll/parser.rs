//! Statement parser: drives the scanner and row extractor over one
//! document and applies the overall success policy.

use tracing::{debug, info};

use crate::error::ParseError;
use crate::models::payroll::{Dataset, Diagnostic, PayrollRecord, RawLine};

use super::row::{RowExtractor, RowOutcome};
use super::scanner::{ScanEvent, SectionScanner};
use super::Result;

/// Trait for payroll statement parsing.
pub trait StatementParser {
    /// Parse one document's extracted text.
    fn parse(&self, text: &str) -> Result<Dataset>;
}

/// Accumulates records and diagnostics in production order and decides the
/// overall outcome.
#[derive(Debug, Default)]
pub struct Aggregator {
    records: Vec<PayrollRecord>,
    diagnostics: Vec<Diagnostic>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_record(&mut self, record: PayrollRecord) {
        self.records.push(record);
    }

    pub fn push_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Close the document.
    ///
    /// Zero records is the single condition that becomes a caller-visible
    /// error; the accumulated diagnostics ride along with it. Everything
    /// upstream only ever degrades into the log.
    pub fn finish(self) -> Result<Dataset> {
        if self.records.is_empty() {
            return Err(ParseError::NoData {
                diagnostics: self.diagnostics,
            });
        }

        Ok(Dataset {
            records: self.records,
            diagnostics: self.diagnostics,
        })
    }
}

/// Parser for SIAPE payroll statements.
///
/// One synchronous pass per document: section scanner, row extractor,
/// aggregator. All state is local to the call, so independent documents can
/// be parsed from independent calls with no coordination.
pub struct SiapeParser {
    extractor: RowExtractor,
}

impl SiapeParser {
    pub fn new() -> Self {
        Self {
            extractor: RowExtractor::new(),
        }
    }

    /// Parse pre-numbered lines (all pages concatenated in page order).
    pub fn parse_lines<I>(&self, lines: I) -> Result<Dataset>
    where
        I: IntoIterator<Item = RawLine>,
    {
        let mut aggregator = Aggregator::new();

        for event in SectionScanner::new(lines.into_iter()) {
            match event {
                ScanEvent::SectionStart { line } => {
                    debug!("data section started at line {}", line);
                    aggregator.push_diagnostic(Diagnostic::info("section started", line));
                }
                ScanEvent::Candidate(candidate) => match self.extractor.extract(&candidate) {
                    RowOutcome::Record(record) => aggregator.push_record(record),
                    RowOutcome::Invalid(diagnostic) => aggregator.push_diagnostic(diagnostic),
                    RowOutcome::Skip => {}
                },
            }
        }

        let dataset = aggregator.finish()?;
        info!("extracted {} payroll rows", dataset.records.len());
        Ok(dataset)
    }
}

impl Default for SiapeParser {
    fn default() -> Self {
        Self::new()
    }
}

impl StatementParser for SiapeParser {
    fn parse(&self, text: &str) -> Result<Dataset> {
        self.parse_lines(text.lines().enumerate().map(|(i, line)| RawLine {
            text: line.to_string(),
            number: i + 1,
        }))
    }
}
