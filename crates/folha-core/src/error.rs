//! Error types for the folha-core library.

use thiserror::Error;

use crate::models::payroll::Diagnostic;

/// Main error type for the folha library.
#[derive(Error, Debug)]
pub enum FolhaError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Payroll statement parsing error.
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    /// Table serialization error.
    #[error("table error: {0}")]
    Table(#[from] TableError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors related to payroll statement parsing.
#[derive(Error, Debug)]
pub enum ParseError {
    /// Text extraction succeeded but yielded no lines.
    #[error("no text was extracted from the document")]
    EmptyText,

    /// The whole document produced zero payroll rows.
    #[error("no payroll data found in the document")]
    NoData {
        /// Everything the pipeline logged before giving up.
        diagnostics: Vec<Diagnostic>,
    },
}

/// Recoverable failure while normalizing an amount token. Consumed by the
/// row extractor; never escapes the pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid amount: {raw}")]
pub struct AmountError {
    /// The token as it appeared on the line.
    pub raw: String,
}

/// Errors related to table serialization.
#[derive(Error, Debug)]
pub enum TableError {
    /// The CSV writer rejected a row.
    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),

    /// The finished table could not be recovered from the writer.
    #[error("failed to finish table: {0}")]
    Finish(String),
}

/// Result type for the folha library.
pub type Result<T> = std::result::Result<T, FolhaError>;
