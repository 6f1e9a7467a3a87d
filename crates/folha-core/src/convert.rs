//! One-call document conversion.

use tracing::{debug, info};

use crate::error::{FolhaError, ParseError, Result};
use crate::models::payroll::{Dataset, Diagnostic, RawLine};
use crate::payroll::SiapeParser;
use crate::pdf::{PdfTextExtractor, TextSource};
use crate::table;

/// Three-part result of one conversion.
///
/// Success is `payload.is_ok()`; the payload is the serialized table or the
/// failure that stopped the run; the diagnostic log is present regardless
/// of outcome.
#[derive(Debug)]
pub struct Conversion {
    /// Serialized table bytes, or the failure that stopped the run.
    pub payload: Result<Vec<u8>>,

    /// Ordered processing log.
    pub diagnostics: Vec<Diagnostic>,
}

impl Conversion {
    /// Whether the document converted successfully.
    pub fn is_success(&self) -> bool {
        self.payload.is_ok()
    }

    fn failure(error: FolhaError, mut diagnostics: Vec<Diagnostic>) -> Self {
        // The failure itself closes the log.
        diagnostics.push(Diagnostic::error(error.to_string(), 0));
        Self {
            payload: Err(error),
            diagnostics,
        }
    }
}

/// Parse already-extracted lines into a dataset.
///
/// Zero lines, or only blank ones, means text extraction produced nothing
/// usable; that is reported as [`ParseError::EmptyText`] before the parser
/// runs.
pub fn dataset_from_lines(lines: Vec<String>) -> Result<Dataset> {
    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(ParseError::EmptyText.into());
    }

    let raw_lines = lines.into_iter().enumerate().map(|(i, text)| RawLine {
        text,
        number: i + 1,
    });

    let dataset = SiapeParser::new().parse_lines(raw_lines)?;
    info!("extracted {} payroll rows", dataset.records.len());
    Ok(dataset)
}

/// Run the pipeline up to the parsed dataset: text extraction, section
/// scanning, row extraction, aggregation.
pub fn extract_dataset(data: &[u8]) -> Result<Dataset> {
    let mut source = PdfTextExtractor::new();
    source.load(data)?;
    debug!("document has {} pages", source.page_count());

    let lines = source.extract_lines()?;
    dataset_from_lines(lines)
}

/// Convert one payroll statement PDF into table bytes.
///
/// The whole pipeline runs synchronously within the call and all state is
/// local to it; independent documents can be converted from independent
/// calls with no coordination.
pub fn convert(data: &[u8]) -> Conversion {
    match extract_dataset(data) {
        Ok(dataset) => match table::serialize(&dataset.records) {
            Ok(bytes) => Conversion {
                payload: Ok(bytes),
                diagnostics: dataset.diagnostics,
            },
            Err(e) => Conversion::failure(e.into(), dataset.diagnostics),
        },
        Err(e) => {
            // A zero-row document still hands its log back to the caller.
            let diagnostics = match &e {
                FolhaError::Parse(ParseError::NoData { diagnostics }) => diagnostics.clone(),
                _ => Vec::new(),
            };
            Conversion::failure(e, diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PdfError;
    use crate::models::payroll::Severity;

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_zero_lines_is_empty_text() {
        let err = dataset_from_lines(Vec::new()).unwrap_err();
        assert!(matches!(err, FolhaError::Parse(ParseError::EmptyText)));
    }

    #[test]
    fn test_blank_lines_only_is_empty_text() {
        let err = dataset_from_lines(lines(&["", "   ", "\t"])).unwrap_err();
        assert!(matches!(err, FolhaError::Parse(ParseError::EmptyText)));
    }

    #[test]
    fn test_lines_without_matches_is_no_data() {
        let err = dataset_from_lines(lines(&[
            "CLSF.CONTABIL DENOMINACAO / RUBRICA",
            "------------",
        ]))
        .unwrap_err();

        match err {
            FolhaError::Parse(ParseError::NoData { diagnostics }) => {
                assert_eq!(diagnostics.len(), 1);
                assert_eq!(diagnostics[0].message, "section started");
            }
            other => panic!("expected NoData, got {:?}", other),
        }
    }

    #[test]
    fn test_statement_lines_become_a_dataset() {
        let dataset = dataset_from_lines(lines(&[
            "CLSF.CONTABIL DENOMINACAO / RUBRICA",
            "3.1.1.1.01.04 VENCIMENTO BASICO 1.234,56",
        ]))
        .unwrap();

        assert_eq!(dataset.records.len(), 1);
        assert_eq!(dataset.diagnostics.len(), 1);
    }

    #[test]
    fn test_convert_unreadable_document_fails_with_log() {
        let conversion = convert(b"not a pdf");

        assert!(!conversion.is_success());
        assert!(matches!(
            conversion.payload,
            Err(FolhaError::Pdf(PdfError::Parse(_)))
        ));
        // The failure is still on the log.
        assert_eq!(conversion.diagnostics.len(), 1);
        assert_eq!(conversion.diagnostics[0].severity, Severity::Error);
    }
}
