//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative: {0}")]
    Negative(Decimal),
}

/// A non-negative price with currency information.
///
/// Amounts are in the currency's standard unit (dollars, not cents). All
/// arithmetic keeps the currency of the left-hand operand; callers that mix
/// currencies get no conversion.
///
/// ```
/// use context_demos_core::{CurrencyCode, Price};
/// use rust_decimal::Decimal;
///
/// let pc = Price::from_whole(1299, CurrencyCode::USD);
/// assert_eq!(pc.times(3).amount, Decimal::from(3897));
/// assert_eq!(pc.to_string(), "$1299");
/// assert!(Price::try_new(Decimal::from(-1), CurrencyCode::USD).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPrice")]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

#[derive(Deserialize)]
struct RawPrice {
    amount: Decimal,
    currency_code: CurrencyCode,
}

impl TryFrom<RawPrice> for Price {
    type Error = PriceError;

    fn try_from(raw: RawPrice) -> Result<Self, Self::Error> {
        Self::try_new(raw.amount, raw.currency_code)
    }
}

impl Price {
    /// Create a price, rejecting negative amounts.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn try_new(amount: Decimal, currency_code: CurrencyCode) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self {
            amount,
            currency_code,
        })
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_whole(units: u32, currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::from(units),
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency_code,
        }
    }

    /// This price multiplied by a quantity, saturating at [`Decimal::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self {
            amount: self.amount.saturating_mul(Decimal::from(quantity)),
            currency_code: self.currency_code,
        }
    }

    /// Sum of two prices, in this price's currency, saturating at
    /// [`Decimal::MAX`].
    #[must_use]
    pub fn plus(self, other: Self) -> Self {
        Self {
            amount: self.amount.saturating_add(other.amount),
            currency_code: self.currency_code,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.symbol(), self.amount.normalize())
    }
}

/// Errors that can occur when parsing a [`CurrencyCode`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unsupported currency code: {0}")]
pub struct CurrencyCodeError(pub String);

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

impl CurrencyCode {
    /// Symbol printed before amounts.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::USD | Self::CAD | Self::AUD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }

    /// The three-letter ISO code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::USD => "USD",
            Self::EUR => "EUR",
            Self::GBP => "GBP",
            Self::CAD => "CAD",
            Self::AUD => "AUD",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = CurrencyCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            "CAD" => Ok(Self::CAD),
            "AUD" => Ok(Self::AUD),
            _ => Err(CurrencyCodeError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_accepts_zero() {
        assert!(Price::try_new(Decimal::ZERO, CurrencyCode::USD).is_ok());
    }

    #[test]
    fn test_try_new_rejects_negative() {
        assert_eq!(
            Price::try_new(Decimal::from(-5), CurrencyCode::USD),
            Err(PriceError::Negative(Decimal::from(-5)))
        );
    }

    #[test]
    fn test_times_and_plus() {
        let gaming = Price::from_whole(1299, CurrencyCode::USD);
        let office = Price::from_whole(699, CurrencyCode::USD);
        assert_eq!(gaming.times(3).plus(office).amount, Decimal::from(4596));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let max = Price::try_new(Decimal::MAX, CurrencyCode::USD).unwrap();
        assert_eq!(max.times(u32::MAX).amount, Decimal::MAX);
        assert_eq!(max.plus(max).amount, Decimal::MAX);
    }

    #[test]
    fn test_display_trims_trailing_zeros() {
        let price = Price::try_new(Decimal::new(1100, 2), CurrencyCode::EUR).unwrap();
        assert_eq!(price.to_string(), "€11");
        let price = Price::try_new(Decimal::new(550, 2), CurrencyCode::GBP).unwrap();
        assert_eq!(price.to_string(), "£5.5");
    }

    #[test]
    fn test_currency_code_from_str() {
        assert_eq!("usd".parse::<CurrencyCode>(), Ok(CurrencyCode::USD));
        assert_eq!(" GBP ".parse::<CurrencyCode>(), Ok(CurrencyCode::GBP));
        assert!("XYZ".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        let json = r#"{"amount":"-1","currency_code":"USD"}"#;
        assert!(serde_json::from_str::<Price>(json).is_err());
        let json = r#"{"amount":"699","currency_code":"USD"}"#;
        let price: Price = serde_json::from_str(json).unwrap();
        assert_eq!(price, Price::from_whole(699, CurrencyCode::USD));
    }
}
