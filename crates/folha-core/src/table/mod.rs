//! Tabular serialization of extracted payroll rows.

use crate::error::TableError;
use crate::models::payroll::PayrollRecord;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Column headers of the output table, in order.
pub const COLUMNS: [&str; 3] = ["CLSF.CONTABIL", "DENOMINACAO / RUBRICA", "VALOR / TOTAL"];

/// Serialize records into CSV bytes.
///
/// Exactly the three fixed columns, one row per record in document order,
/// no index column. Amounts are written in their canonical decimal form
/// (dot separator, two fractional digits).
pub fn serialize(records: &[PayrollRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(COLUMNS)?;

    for record in records {
        let amount = record.amount.to_string();
        wtr.write_record([
            record.classification.as_str(),
            record.description.as_str(),
            amount.as_str(),
        ])?;
    }

    wtr.into_inner().map_err(|e| TableError::Finish(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn record(classification: &str, description: &str, amount: &str) -> PayrollRecord {
        PayrollRecord {
            classification: classification.to_string(),
            description: description.to_string(),
            amount: Decimal::from_str(amount).unwrap(),
        }
    }

    #[test]
    fn test_serialize_writes_fixed_header_and_rows_in_order() {
        let records = vec![
            record("3.1.1.1.01.04", "VENCIMENTO BASICO", "1234.56"),
            record("00082", "ADICIONAL NOTURNO", "78.90"),
        ];

        let bytes = serialize(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "CLSF.CONTABIL,DENOMINACAO / RUBRICA,VALOR / TOTAL");
        assert_eq!(lines[1], "3.1.1.1.01.04,VENCIMENTO BASICO,1234.56");
        assert_eq!(lines[2], "00082,ADICIONAL NOTURNO,78.90");
    }

    #[test]
    fn test_serialize_empty_record_list_is_header_only() {
        let bytes = serialize(&[]).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_missing_values_render_as_empty_cells() {
        let records = vec![record("00082", "", "78.90")];

        let bytes = serialize(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert_eq!(text.lines().nth(1), Some("00082,,78.90"));
    }

    #[test]
    fn test_amounts_keep_two_fractional_digits() {
        let records = vec![record("A", "ROW", "10.00")];

        let bytes = serialize(&records).unwrap();
        let text = String::from_utf8(bytes).unwrap();

        assert!(text.lines().nth(1).unwrap().ends_with(",10.00"));
    }
}
