//! Amount conversion against a base-relative rate table

use crate::core::currency::CurrencyCode;
use crate::core::rates::RateTable;

/// Rendered whenever the amount cannot be parsed, a rate is missing, or the
/// arithmetic does not produce a finite number.
pub const FALLBACK_RESULT: &str = "0.00";

/// Converts `amount_text` from one currency to another using a table of
/// rates expressed relative to a shared base currency.
///
/// The amount goes through the base: divide by the `from` rate, multiply by
/// the `to` rate. The result is formatted with exactly two fractional
/// digits, ties rounding to even. Invalid input never surfaces as an error;
/// the caller always receives a renderable string.
pub fn convert(
    amount_text: &str,
    from: CurrencyCode,
    to: CurrencyCode,
    rates: &RateTable,
) -> String {
    let Ok(amount) = amount_text.trim().parse::<f64>() else {
        return FALLBACK_RESULT.to_string();
    };
    if !amount.is_finite() {
        return FALLBACK_RESULT.to_string();
    }

    let (Some(from_rate), Some(to_rate)) = (rates.get(from.as_str()), rates.get(to.as_str()))
    else {
        return FALLBACK_RESULT.to_string();
    };

    let converted = amount / from_rate * to_rate;
    if !converted.is_finite() {
        return FALLBACK_RESULT.to_string();
    }

    format!("{converted:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_rates() -> RateTable {
        RateTable::from([("USD".to_string(), 1.0), ("EUR".to_string(), 0.92)])
    }

    fn assert_two_decimal(result: &str) {
        let unsigned = result.strip_prefix('-').unwrap_or(result);
        let (whole, frac) = unsigned.split_once('.').expect("missing decimal point");
        assert!(!whole.is_empty() && whole.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(frac.len(), 2);
        assert!(frac.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_usd_to_eur() {
        let result = convert("100", CurrencyCode::Usd, CurrencyCode::Eur, &sample_rates());
        assert_eq!(result, "92.00");
    }

    #[test]
    fn test_eur_to_usd() {
        let result = convert("92", CurrencyCode::Eur, CurrencyCode::Usd, &sample_rates());
        assert_eq!(result, "100.00");
    }

    #[test]
    fn test_round_trip_identity() {
        let rates = sample_rates();
        for amount in ["1", "12.5", "999.99"] {
            let result = convert(amount, CurrencyCode::Eur, CurrencyCode::Eur, &rates);
            let expected = format!("{:.2}", amount.parse::<f64>().unwrap());
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn test_output_shape() {
        let rates = sample_rates();
        for amount in ["0", "1", "0.005", "123456.789"] {
            let result = convert(amount, CurrencyCode::Usd, CurrencyCode::Eur, &rates);
            assert_two_decimal(&result);
        }
    }

    #[test]
    fn test_negative_amount_keeps_sign() {
        let result = convert("-50", CurrencyCode::Usd, CurrencyCode::Eur, &sample_rates());
        assert_eq!(result, "-46.00");
        assert_two_decimal(&result);
    }

    #[test]
    fn test_empty_amount_falls_back() {
        let result = convert("", CurrencyCode::Usd, CurrencyCode::Eur, &sample_rates());
        assert_eq!(result, FALLBACK_RESULT);
    }

    #[test]
    fn test_malformed_amount_falls_back() {
        let rates = sample_rates();
        for text in ["abc", "12,5", "1.2.3", "$10"] {
            assert_eq!(convert(text, CurrencyCode::Usd, CurrencyCode::Eur, &rates), "0.00");
        }
    }

    #[test]
    fn test_non_finite_amount_falls_back() {
        let rates = sample_rates();
        for text in ["inf", "-inf", "NaN"] {
            assert_eq!(convert(text, CurrencyCode::Usd, CurrencyCode::Eur, &rates), "0.00");
        }
    }

    #[test]
    fn test_missing_target_rate_falls_back() {
        // GBP is absent from the sample table
        let result = convert("12.5", CurrencyCode::Usd, CurrencyCode::Gbp, &sample_rates());
        assert_eq!(result, FALLBACK_RESULT);
    }

    #[test]
    fn test_missing_source_rate_falls_back() {
        let result = convert("12.5", CurrencyCode::Ngn, CurrencyCode::Usd, &sample_rates());
        assert_eq!(result, FALLBACK_RESULT);
    }

    #[test]
    fn test_empty_table_falls_back() {
        let rates = RateTable::new();
        let result = convert("100", CurrencyCode::Usd, CurrencyCode::Usd, &rates);
        assert_eq!(result, FALLBACK_RESULT);
    }

    #[test]
    fn test_zero_from_rate_falls_back() {
        let rates = RateTable::from([("USD".to_string(), 0.0), ("EUR".to_string(), 0.92)]);
        let result = convert("100", CurrencyCode::Usd, CurrencyCode::Eur, &rates);
        assert_eq!(result, FALLBACK_RESULT);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let result = convert(" 100 ", CurrencyCode::Usd, CurrencyCode::Eur, &sample_rates());
        assert_eq!(result, "92.00");
    }
}
