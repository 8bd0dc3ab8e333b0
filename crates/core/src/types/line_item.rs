//! A single product entry in the cart.

use core::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use super::{ItemId, Price};

/// One distinct product the shopper intends to buy.
///
/// `quantity` is never zero: removing an item deletes the entry instead of
/// setting its count to zero, and a stored entry with `"quantity": 0` fails to
/// deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Identity of the product within the cart.
    pub id: ItemId,
    /// Display label.
    pub name: String,
    /// Unit price.
    pub price: Price,
    /// Number of units, at least one.
    pub quantity: NonZeroU32,
}

impl LineItem {
    /// Create a line item holding a single unit.
    #[must_use]
    pub fn new(id: ItemId, name: impl Into<String>, price: Price) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity: NonZeroU32::MIN,
        }
    }

    /// Price of all units on this line.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.price.times(self.quantity.get())
    }

    /// Add one unit.
    pub(crate) const fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn tea() -> LineItem {
        LineItem::new(ItemId::parse("a").unwrap(), "Tea", Price::from_units(50))
    }

    #[test]
    fn test_new_starts_at_one() {
        assert_eq!(tea().quantity.get(), 1);
    }

    #[test]
    fn test_line_total() {
        let mut item = tea();
        item.increment();
        item.increment();
        assert_eq!(item.line_total(), Price::from_units(150));
    }

    #[test]
    fn test_increment_saturates() {
        let mut item = tea();
        item.quantity = NonZeroU32::MAX;
        item.increment();
        assert_eq!(item.quantity, NonZeroU32::MAX);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(tea()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "a", "name": "Tea", "price": 50, "quantity": 1})
        );
    }

    #[test]
    fn test_zero_quantity_is_rejected() {
        let raw = r#"{"id":"a","name":"Tea","price":50,"quantity":0}"#;
        assert!(serde_json::from_str::<LineItem>(raw).is_err());
    }
}
