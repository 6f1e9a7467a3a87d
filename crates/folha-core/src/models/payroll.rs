//! Payroll statement data models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single text line with its position in the document.
///
/// Positions are 1-based and run across the whole document, pages
/// concatenated in page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawLine {
    /// Line content as extracted.
    pub text: String,

    /// 1-based sequence position.
    pub number: usize,
}

/// A trimmed line that the section scanner deemed eligible for field
/// extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLine {
    /// Trimmed line content.
    pub text: String,

    /// 1-based position of the originating raw line.
    pub number: usize,
}

/// One extracted payroll row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRecord {
    /// Accounting classification code (leading token of the row).
    pub classification: String,

    /// Entry description (rubrica).
    pub description: String,

    /// Amount with two fractional digits.
    pub amount: Decimal,
}

/// Severity of a diagnostic entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Progress information.
    Info,
    /// A row was dropped or degraded but processing continued.
    Warning,
    /// The run failed; the failure is recorded on the log as well.
    Error,
}

/// A single entry in the processing log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the event was.
    pub severity: Severity,

    /// Human-readable description.
    pub message: String,

    /// 1-based line the event refers to; 0 for document-level events.
    pub line: usize,
}

impl Diagnostic {
    /// Info-level entry for `line`.
    pub fn info(message: impl Into<String>, line: usize) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
            line,
        }
    }

    /// Warning-level entry for `line`.
    pub fn warning(message: impl Into<String>, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
            line,
        }
    }

    /// Error-level entry for `line`.
    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
            line,
        }
    }
}

/// Full result of parsing one document: rows and log, both in production
/// order. No reordering, no deduplication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Extracted rows in document order.
    pub records: Vec<PayrollRecord>,

    /// Processing log in production order.
    pub diagnostics: Vec<Diagnostic>,
}
