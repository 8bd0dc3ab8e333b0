//! Demo checkout results.

use teahouse_core::{LineItem, Price};

/// User-facing notices raised by checkout.
pub mod notice {
    /// Shown when checkout is attempted on an empty cart.
    pub const CART_EMPTY: &str = "Cart is empty!";

    /// Shown after a (simulated) successful checkout.
    pub const CHECKOUT_SUCCESS: &str = "Checkout successful! (Demo)";
}

/// What was "bought" by a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub items: Vec<LineItem>,
    pub total_quantity: u64,
    pub total_price: Price,
}

/// Result of [`super::CartStore::checkout`].
///
/// Checkout has no failure modes beyond an empty cart: there is no payment
/// step, so a non-empty cart always completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The cart had nothing in it; nothing changed.
    Empty,
    /// The cart was emptied.
    Completed(Receipt),
}

impl CheckoutOutcome {
    /// Notice to show the shopper.
    #[must_use]
    pub const fn notice(&self) -> &'static str {
        match self {
            Self::Empty => notice::CART_EMPTY,
            Self::Completed(_) => notice::CHECKOUT_SUCCESS,
        }
    }

    /// Whether the checkout went through.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}
