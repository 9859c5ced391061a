use serde::{Deserialize, Serialize};

use kinship_core::ValueObject;

use crate::currency::Currency;

/// An integer amount in a given currency.
///
/// Immutable: `convert`, `add` and `subtract` all return new values.
/// Conversions are lossy (truncation at each step), so converting A→B→A is not
/// guaranteed to give back the starting amount.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: i64,
    currency: Currency,
}

impl ValueObject for Money {}

impl Money {
    pub fn new(amount: i64, currency: impl Into<Currency>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Convert into `target` via the base currency.
    ///
    /// The result always carries `target`, recognized or not.
    pub fn convert(&self, target: impl Into<Currency>) -> Money {
        let target = target.into();
        let base = self.currency.to_base(self.amount);
        Money {
            amount: target.from_base(base),
            currency: target,
        }
    }

    /// `self` converted into `other`'s currency, plus `other`.
    pub fn add(&self, other: &Money) -> Money {
        let converted = self.convert(other.currency.clone());
        Money {
            amount: converted.amount.saturating_add(other.amount),
            currency: converted.currency,
        }
    }

    /// `self` converted into `other`'s currency, minus `other`. May go negative.
    pub fn subtract(&self, other: &Money) -> Money {
        let converted = self.convert(other.currency.clone());
        Money {
            amount: converted.amount.saturating_sub(other.amount),
            currency: converted.currency,
        }
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
