//! Fixed markers and the row pattern for SIAPE payroll statements.
//!
//! These are structural constants of the statement layout, not
//! configuration.

use lazy_static::lazy_static;
use regex::Regex;

/// First half of the header marker; together with [`HEADER_DESCRIPTION`] on
/// a single line it opens the data section.
pub const HEADER_CLASSIFICATION: &str = "CLSF.CONTABIL";

/// Second half of the header marker.
pub const HEADER_DESCRIPTION: &str = "DENOMINACAO / RUBRICA";

/// Footer printed by SIAPE on every page.
pub const FOOTER_SYSTEM: &str = "SIAPE, GERENCIAL";

/// Fragment appearing in ruled separator lines.
pub const SEPARATOR: &str = "---";

/// Prefix of decorative banner lines.
pub const BANNER_PREFIX: &str = "***";

/// Prefix of the date stamp line.
pub const DATE_PREFIX: &str = "DATA:";

lazy_static! {
    /// A data row, anchored at both ends: classification token, lazily
    /// matched description, amount in Brazilian format (1-3 digits,
    /// dot-separated thousands groups, comma, exactly two fractional
    /// digits, nothing after it).
    pub static ref DATA_ROW: Regex = Regex::new(
        r"^(\S+)\s+(.*?)\s+(\d{1,3}(?:\.\d{3})*,\d{2})$"
    ).unwrap();
}
