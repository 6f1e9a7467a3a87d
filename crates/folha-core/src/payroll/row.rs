//! Pattern-based extraction of a single payroll row.

use tracing::trace;

use crate::models::payroll::{CandidateLine, Diagnostic, PayrollRecord};

use super::amount::parse_amount;
use super::patterns::DATA_ROW;

/// Outcome of matching one candidate line.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// The line is a well-formed payroll row.
    Record(PayrollRecord),

    /// The line matched the row shape but its amount did not parse.
    Invalid(Diagnostic),

    /// The line is not a payroll row; dropped without a diagnostic.
    Skip,
}

/// Extracts the three row fields from a candidate line.
pub struct RowExtractor;

impl RowExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Match `line` against the row pattern and convert its amount.
    ///
    /// Lines that do not match the pattern as a whole are skipped silently;
    /// this covers amounts with the wrong number of fractional digits and
    /// non-numeric trailing tokens. A matched row whose amount still fails
    /// to parse yields a warning instead of a record.
    pub fn extract(&self, line: &CandidateLine) -> RowOutcome {
        let Some(caps) = DATA_ROW.captures(&line.text) else {
            trace!("line {}: not a payroll row, skipped", line.number);
            return RowOutcome::Skip;
        };

        let classification = caps[1].trim().to_string();
        let description = caps[2].trim().to_string();
        let raw_amount = &caps[3];

        match parse_amount(raw_amount) {
            Ok(amount) => RowOutcome::Record(PayrollRecord {
                classification,
                description,
                amount,
            }),
            Err(_) => RowOutcome::Invalid(Diagnostic::warning(
                format!("invalid amount '{}' on line {}", raw_amount, line.number),
                line.number,
            )),
        }
    }
}

impl Default for RowExtractor {
    fn default() -> Self {
        Self::new()
    }
}
