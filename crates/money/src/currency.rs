use core::str::FromStr;

use serde::{Deserialize, Serialize};

use kinship_core::DomainError;

/// Currency code attached to a [`Money`](crate::Money) value.
///
/// `USD` is the base currency every conversion routes through. Codes outside
/// the recognized set are kept verbatim in `Other` and convert as identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Currency {
    Usd,
    Gbp,
    Eur,
    Can,
    Other(String),
}

impl Currency {
    /// Lenient constructor: unrecognized codes become `Other`.
    ///
    /// Matching is exact, so `"gbp"` is not `Gbp`.
    pub fn from_code(code: &str) -> Self {
        match code {
            "USD" => Currency::Usd,
            "GBP" => Currency::Gbp,
            "EUR" => Currency::Eur,
            "CAN" => Currency::Can,
            other => Currency::Other(other.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Currency::Usd => "USD",
            Currency::Gbp => "GBP",
            Currency::Eur => "EUR",
            Currency::Can => "CAN",
            Currency::Other(code) => code,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Currency::Other(_))
    }

    /// Units of this currency per base unit, as `(numerator, denominator)`.
    ///
    /// GBP 1/2, EUR 3/2, CAN 5/4. Base and unrecognized codes are 1/1.
    pub fn units_per_base(&self) -> (i128, i128) {
        match self {
            Currency::Gbp => (1, 2),
            Currency::Eur => (3, 2),
            Currency::Can => (5, 4),
            Currency::Usd | Currency::Other(_) => (1, 1),
        }
    }

    /// Amount in this currency expressed in base units (truncated).
    pub fn to_base(&self, amount: i64) -> i64 {
        let (num, den) = self.units_per_base();
        saturate(i128::from(amount) * den / num)
    }

    /// Base-unit amount expressed in this currency (truncated).
    pub fn from_base(&self, base: i64) -> i64 {
        let (num, den) = self.units_per_base();
        saturate(i128::from(base) * num / den)
    }
}

fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Currency::from_code(value)
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        match Currency::from_code(&value) {
            Currency::Other(_) => Currency::Other(value),
            known => known,
        }
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        match value {
            Currency::Other(code) => code,
            known => known.code().to_string(),
        }
    }
}

/// Strict parse: only recognized codes are accepted.
impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let currency = Currency::from_code(s);
        if !currency.is_recognized() {
            return Err(DomainError::validation(format!(
                "unsupported currency: {currency}"
            )));
        }
        Ok(currency)
    }
}
