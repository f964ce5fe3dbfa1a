use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a numeric form field cannot be parsed.
#[derive(Debug, Error)]
#[error("invalid number '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Parses the text of a numeric form field into a [`Decimal`].
///
/// Commas (thousands separators inserted by the input mask) are stripped
/// and surrounding whitespace is ignored. An empty field parses as 0,
/// which is the documented default for every numeric field on the form.
pub fn parse_field_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|source| {
        tracing::warn!(input = %s, "numeric field failed to parse");
        ParseDecimalError {
            input: s.to_string(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn empty_and_whitespace_parse_as_zero() {
        assert_eq!(parse_field_decimal("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_field_decimal("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn strips_mask_separators() {
        assert_eq!(parse_field_decimal("1,234,567").unwrap(), dec!(1234567));
        assert_eq!(parse_field_decimal("10,000").unwrap(), dec!(10000));
    }

    #[test]
    fn keeps_fractional_rates_exact() {
        assert_eq!(parse_field_decimal("0.15").unwrap(), dec!(0.15));
        assert_eq!(parse_field_decimal(" 0.0875 ").unwrap(), dec!(0.0875));
    }

    #[test]
    fn invalid_text_is_an_error() {
        let error = parse_field_decimal("10e").unwrap_err();
        assert!(error.to_string().contains("10e"));
    }
}
