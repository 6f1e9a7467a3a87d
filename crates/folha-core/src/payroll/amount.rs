//! Brazilian-format amount normalization.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::AmountError;

/// Parse an amount token in Brazilian format (e.g. "1.234,56").
///
/// Dots are thousands separators and are removed; the single comma is the
/// decimal separator. The result keeps the fractional digits of the source
/// exactly.
pub fn parse_amount(raw: &str) -> Result<Decimal, AmountError> {
    let normalized = raw.replace('.', "").replace(',', ".");

    Decimal::from_str(&normalized).map_err(|_| AmountError {
        raw: raw.to_string(),
    })
}

/// Format an amount back into Brazilian style ("1.234,56").
pub fn format_amount(amount: &Decimal) -> String {
    let s = format!("{:.2}", amount);
    let parts: Vec<&str> = s.split('.').collect();

    if parts.len() != 2 {
        return s;
    }

    let integer_part = parts[0];
    let decimal_part = parts[1];

    // Add thousands separators
    let chars: Vec<char> = integer_part.chars().collect();
    let mut formatted = String::new();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*c);
    }

    format!("{},{}", formatted, decimal_part)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(
            parse_amount("1.234,56"),
            Ok(Decimal::from_str("1234.56").unwrap())
        );
        assert_eq!(
            parse_amount("123,45"),
            Ok(Decimal::from_str("123.45").unwrap())
        );
        assert_eq!(parse_amount("0,01"), Ok(Decimal::from_str("0.01").unwrap()));
        assert_eq!(
            parse_amount("123.456.789,00"),
            Ok(Decimal::from_str("123456789.00").unwrap())
        );
    }

    #[test]
    fn test_parse_amount_keeps_two_fractional_digits() {
        let amount = parse_amount("1.000,10").unwrap();
        assert_eq!(amount.scale(), 2);
        assert_eq!(amount.to_string(), "1000.10");
    }

    #[test]
    fn test_parse_amount_rejects_non_numeric() {
        assert!(parse_amount("X,XX").is_err());
        assert!(parse_amount("").is_err());
        assert!(parse_amount("1.2a3,45").is_err());
    }

    #[test]
    fn test_format_amount() {
        let amount = Decimal::from_str("1234.56").unwrap();
        assert_eq!(format_amount(&amount), "1.234,56");

        let amount = Decimal::from_str("12.00").unwrap();
        assert_eq!(format_amount(&amount), "12,00");

        let amount = Decimal::from_str("123456789.00").unwrap();
        assert_eq!(format_amount(&amount), "123.456.789,00");
    }

    #[test]
    fn test_round_trip_reproduces_source_digits() {
        for token in ["0,00", "7,30", "12,50", "999,99", "1.000,00", "54.321,09", "123.456.789,01"] {
            let parsed = parse_amount(token).unwrap();
            assert_eq!(format_amount(&parsed), token);
        }
    }
}
