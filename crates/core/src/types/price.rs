//! Type-safe price representation using decimal arithmetic.
//!
//! The shop works in a single implied currency, so a [`Price`] is only an
//! amount. Formatting with a currency label is left to the renderers.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is below zero.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    Invalid(String),
    /// The amount has more decimal places than the shop prices in.
    #[error("price can have at most {max} decimal places (got {0})", max = Price::MAX_SCALE)]
    TooPrecise(Decimal),
    /// The amount is beyond the largest supported price.
    #[error("price cannot exceed {max} (got {0})", max = Price::MAX)]
    TooLarge(Decimal),
}

/// A non-negative unit or line price.
///
/// Serialized as a plain JSON number (`50`, `12.5`) and displayed without
/// trailing zeros, so `Decimal::new(1250, 2)` shows as `12.5`.
///
/// Unit prices are limited to [`Price::MAX_SCALE`] decimal places and
/// [`Price::MAX`], which keeps every price within the 15 significant digits a
/// JSON number (an `f64`) round-trips exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Most decimal places a price may carry.
    pub const MAX_SCALE: u32 = 2;

    /// Largest accepted price: 999,999,999,999.99.
    pub const MAX: Decimal = Decimal::from_parts(0x107A_3FFF, 0x5AF3, 0, false, 2);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero,
    /// [`PriceError::TooPrecise`] for more than [`Price::MAX_SCALE`] decimal
    /// places, and [`PriceError::TooLarge`] above [`Price::MAX`].
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        if amount.normalize().scale() > Self::MAX_SCALE {
            return Err(PriceError::TooPrecise(amount));
        }
        if amount > Self::MAX {
            return Err(PriceError::TooLarge(amount));
        }
        Ok(Self(amount))
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Parse a price from user input such as `"50"` or `"12.50"`.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Invalid`] for non-numeric input and
    /// [`PriceError::Negative`] for amounts below zero.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount =
            Decimal::from_str(s.trim()).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        Self::new(amount)
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this price.
    ///
    /// Line totals are computed, never stored, so they are not held to
    /// [`Price::MAX`].
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0.saturating_mul(Decimal::from(quantity)))
    }

    /// Whether this price is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let amount = self.0.normalize();
        if amount.scale() == 0
            && let Some(whole) = amount.to_i64()
        {
            return serializer.serialize_i64(whole);
        }
        rust_decimal::serde::float::serialize(&amount, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(Decimal::new(-1, 0)),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
    }

    #[test]
    fn test_parse() {
        assert_eq!(Price::parse("50").unwrap(), Price::from_units(50));
        assert_eq!(Price::parse(" 12.50 ").unwrap().to_string(), "12.5");
        assert!(matches!(Price::parse("abc"), Err(PriceError::Invalid(_))));
        assert!(matches!(Price::parse("-3"), Err(PriceError::Negative(_))));
    }

    #[test]
    fn test_times_and_sum() {
        let tea = Price::from_units(50);
        let cake = Price::from_units(120);
        let total: Price = [tea.times(2), cake.times(1)].into_iter().sum();
        assert_eq!(total, Price::from_units(220));
        assert_eq!(Price::ZERO.times(7), Price::ZERO);
    }

    #[test]
    fn test_display_is_integer_like() {
        assert_eq!(Price::from_units(220).to_string(), "220");
        assert_eq!(Price::new(Decimal::new(1250, 2)).unwrap().to_string(), "12.5");
        assert_eq!(Price::ZERO.to_string(), "0");
    }

    #[test]
    fn test_serializes_as_number() {
        assert_eq!(serde_json::to_string(&Price::from_units(50)).unwrap(), "50");
        let half = Price::parse("0.5").unwrap();
        assert_eq!(serde_json::to_string(&half).unwrap(), "0.5");
    }

    #[test]
    fn test_limits() {
        assert_eq!(Price::MAX.to_string(), "999999999999.99");
        assert!(Price::new(Price::MAX).is_ok());
        assert!(matches!(
            Price::parse("1000000000000"),
            Err(PriceError::TooLarge(_))
        ));
        assert!(matches!(
            Price::parse("0.125"),
            Err(PriceError::TooPrecise(_))
        ));
        // Trailing zeros do not count as precision.
        assert_eq!(Price::parse("12.5000").unwrap().to_string(), "12.5");
    }

    #[test]
    fn test_json_round_trip_is_exact() {
        for raw in ["0.01", "0.1", "12.34", "999999999999.99", "123456789012.07"] {
            let price = Price::parse(raw).unwrap();
            let json = serde_json::to_string(&price).unwrap();
            let back: Price = serde_json::from_str(&json).unwrap();
            assert_eq!(back, price, "{raw} came back as {back} via {json}");
        }
    }

    #[test]
    fn test_deserialize_rejects_out_of_range() {
        assert!(serde_json::from_str::<Price>("0.12345678901234567891").is_err());
        assert!(serde_json::from_str::<Price>("1.2345678901234568e22").is_err());
    }

    #[test]
    fn test_deserializes_numbers() {
        let whole: Price = serde_json::from_str("120").unwrap();
        assert_eq!(whole, Price::from_units(120));

        let fractional: Price = serde_json::from_str("12.5").unwrap();
        assert_eq!(fractional.to_string(), "12.5");

        assert!(serde_json::from_str::<Price>("-4").is_err());
    }
}
