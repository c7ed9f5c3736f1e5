//! Currency identifiers and the selectable currency set

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// A currency selectable in the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CurrencyCode {
    Usd,
    Eur,
    Gbp,
    Ngn,
    Cad,
    Cny,
    Inr,
}

impl CurrencyCode {
    /// Every currency the application can offer for selection.
    pub const ALL: [CurrencyCode; 7] = [
        CurrencyCode::Usd,
        CurrencyCode::Eur,
        CurrencyCode::Gbp,
        CurrencyCode::Ngn,
        CurrencyCode::Cad,
        CurrencyCode::Cny,
        CurrencyCode::Inr,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CurrencyCode::Usd => "USD",
            CurrencyCode::Eur => "EUR",
            CurrencyCode::Gbp => "GBP",
            CurrencyCode::Ngn => "NGN",
            CurrencyCode::Cad => "CAD",
            CurrencyCode::Cny => "CNY",
            CurrencyCode::Inr => "INR",
        }
    }
}

impl Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CurrencyCode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "USD" => Ok(CurrencyCode::Usd),
            "EUR" => Ok(CurrencyCode::Eur),
            "GBP" => Ok(CurrencyCode::Gbp),
            "NGN" => Ok(CurrencyCode::Ngn),
            "CAD" => Ok(CurrencyCode::Cad),
            "CNY" => Ok(CurrencyCode::Cny),
            "INR" => Ok(CurrencyCode::Inr),
            _ => Err(anyhow::anyhow!("Unknown currency code: {}", s)),
        }
    }
}
