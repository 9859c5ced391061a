//! Money domain module (fixed-rate currency conversion).
//!
//! Amounts are integers; every conversion routes through the base currency
//! (USD) and truncates toward zero at each step.

pub mod currency;
pub mod money;

pub use currency::Currency;
pub use money::Money;
