use async_trait::async_trait;
use std::collections::HashMap;

use crate::core::currency::CurrencyCode;
use crate::core::rates::{FetchError, RateSource, RateTable};

/// Built-in cross-rate tables: one row per source currency, each entry the
/// direct rate into the target currency. Covers USD, EUR, GBP and CAD as
/// source currencies; NGN has no row of its own.
///
/// Unlike the base-relative converter, this strategy multiplies by the
/// looked-up cross rate directly and treats any unknown pair as 0.0. The
/// two formulas are intentionally kept apart.
pub struct StaticCrossRateSource {
    tables: HashMap<CurrencyCode, RateTable>,
}

fn row(entries: &[(&str, f64)]) -> RateTable {
    entries
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

impl StaticCrossRateSource {
    pub fn new() -> Self {
        let tables = HashMap::from([
            (
                CurrencyCode::Usd,
                row(&[
                    ("USD", 1.0),
                    ("EUR", 0.92),
                    ("GBP", 0.79),
                    ("NGN", 1340.0),
                    ("CAD", 1.37),
                ]),
            ),
            (
                CurrencyCode::Eur,
                row(&[
                    ("USD", 1.09),
                    ("EUR", 1.0),
                    ("GBP", 0.85),
                    ("NGN", 1450.0),
                    ("CAD", 1.48),
                ]),
            ),
            (
                CurrencyCode::Gbp,
                row(&[
                    ("USD", 1.27),
                    ("EUR", 1.17),
                    ("GBP", 1.0),
                    ("NGN", 1702.0),
                    ("CAD", 1.74),
                ]),
            ),
            (
                CurrencyCode::Cad,
                row(&[
                    ("USD", 0.73),
                    ("EUR", 0.68),
                    ("GBP", 0.58),
                    ("NGN", 978.90),
                    ("CAD", 1.0),
                ]),
            ),
        ]);
        StaticCrossRateSource { tables }
    }

    /// Direct rate for the pair, 0.0 when either side is unknown.
    pub fn cross_rate(&self, from: CurrencyCode, to: CurrencyCode) -> f64 {
        self.tables
            .get(&from)
            .and_then(|table| table.get(to.as_str()))
            .copied()
            .unwrap_or(0.0)
    }

    /// Converts by direct cross-rate multiplication. Amount text that does
    /// not parse counts as zero, so the output is always a two-decimal
    /// number.
    pub fn convert(&self, amount_text: &str, from: CurrencyCode, to: CurrencyCode) -> String {
        let amount = amount_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .unwrap_or(0.0);
        format!("{:.2}", amount * self.cross_rate(from, to))
    }
}

impl Default for StaticCrossRateSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateSource for StaticCrossRateSource {
    /// A cross-rate row for `base` doubles as a base-relative table for
    /// that base (its self-entry is 1.0). Bases without a row yield an
    /// empty table, which degrades to fallback results at lookup time.
    async fn fetch_rates(&self, base: CurrencyCode) -> Result<RateTable, FetchError> {
        Ok(self.tables.get(&base).cloned().unwrap_or_default())
    }
}
