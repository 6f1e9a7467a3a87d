//! Core library for SIAPE payroll statement conversion.
//!
//! This crate provides:
//! - PDF text extraction (embedded text only, no OCR)
//! - The payroll parsing pipeline: section scanner, row extractor,
//!   amount normalization, aggregation
//! - Tabular (CSV) serialization of the extracted rows
//! - A one-call conversion entry point for whole documents

pub mod convert;
pub mod error;
pub mod models;
pub mod payroll;
pub mod pdf;
pub mod table;

pub use convert::{convert, dataset_from_lines, extract_dataset, Conversion};
pub use error::{AmountError, FolhaError, ParseError, PdfError, Result, TableError};
pub use models::payroll::{
    CandidateLine, Dataset, Diagnostic, PayrollRecord, RawLine, Severity,
};
pub use payroll::{SiapeParser, StatementParser};
pub use pdf::{PdfTextExtractor, TextSource};
