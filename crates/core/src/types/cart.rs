//! The ordered collection of line items.

use core::num::NonZeroU32;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{ItemId, LineItem, Price};

/// Errors that can occur when decoding a [`Cart`].
#[derive(thiserror::Error, Debug)]
pub enum CartError {
    /// Two entries share the same identifier.
    #[error("duplicate item id in cart: {0}")]
    DuplicateId(ItemId),
    /// The serialized form is not a valid list of line items.
    #[error("invalid cart json: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered list of line items, unique by [`ItemId`].
///
/// Order is insertion order and only matters for display stability. The
/// serialized form is a bare JSON array of line items:
///
/// ```
/// use teahouse_core::{Cart, ItemId, Price};
///
/// let mut cart = Cart::new();
/// cart.add(ItemId::parse("a").unwrap(), "Tea", Price::from_units(50));
/// cart.add(ItemId::parse("a").unwrap(), "Tea", Price::from_units(50));
///
/// assert_eq!(cart.total_quantity(), 2);
/// assert_eq!(
///     cart.to_json().unwrap(),
///     r#"[{"id":"a","name":"Tea","price":50,"quantity":2}]"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<LineItem>", into = "Vec<LineItem>")]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Decode a cart from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Json`] if the input is not an array of valid line
    /// items and [`CartError::DuplicateId`] if two entries share an id.
    pub fn from_json(raw: &str) -> Result<Self, CartError> {
        // Decode the lines first so a duplicate id keeps its own error
        // instead of being folded into a `serde_json::Error`.
        let items: Vec<LineItem> = serde_json::from_str(raw)?;
        Self::try_from(items)
    }

    /// Encode the cart as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Json`] if serialization fails.
    pub fn to_json(&self) -> Result<String, CartError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Add one unit of a product.
    ///
    /// If the id is already in the cart its quantity goes up by one and the
    /// stored name and price are kept, even when `name` or `price` differ.
    /// Otherwise a new line with quantity one is appended.
    ///
    /// Returns the quantity of the line after the call.
    pub fn add(&mut self, id: ItemId, name: impl Into<String>, price: Price) -> NonZeroU32 {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.increment();
            return item.quantity;
        }
        self.items.push(LineItem::new(id, name, price));
        NonZeroU32::MIN
    }

    /// Remove the line with this id, returning it if it was present.
    pub fn remove(&mut self, id: &ItemId) -> Option<LineItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    /// Empty the cart, returning the lines it held.
    pub fn clear(&mut self) -> Vec<LineItem> {
        std::mem::take(&mut self.items)
    }

    /// Look up the line for an id.
    #[must_use]
    pub fn get(&self, id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| &item.id == id)
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.get()))
            .sum()
    }

    /// Sum of `price × quantity` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.items.iter().map(LineItem::line_total).sum()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| &item.id == id)
    }
}

impl TryFrom<Vec<LineItem>> for Cart {
    type Error = CartError;

    fn try_from(items: Vec<LineItem>) -> Result<Self, Self::Error> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(&item.id) {
                return Err(CartError::DuplicateId(item.id.clone()));
            }
        }
        Ok(Self { items })
    }
}

impl From<Cart> for Vec<LineItem> {
    fn from(cart: Cart) -> Self {
        cart.items
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
