//! PDF text extraction module.

mod extractor;

pub use extractor::PdfTextExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for document text sources.
///
/// The only obligation to the parsing core is to yield lines in stable
/// document order: pages in page order, lines in reading order within each
/// page.
pub trait TextSource {
    /// Load a document from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Number of pages in the loaded document.
    fn page_count(&self) -> u32;

    /// Extract all text lines from the loaded document.
    fn extract_lines(&self) -> Result<Vec<String>>;
}
