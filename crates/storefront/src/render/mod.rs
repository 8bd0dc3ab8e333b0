//! Rendering collaborators for the cart.
//!
//! The cart store knows nothing about markup. After each operation it calls
//! back into a [`CartRenderer`], which turns the new state into whatever the
//! surface needs: HTML fragments for the web page, text lines for the CLI.

mod html;
mod text;

use teahouse_core::{LineItem, Price};

pub use html::{CartCountTemplate, CartItemView, CartItemsTemplate, CartView, HtmlRenderer};
pub use text::TextRenderer;

/// Label printed in front of every amount.
pub const CURRENCY_LABEL: &str = "Rs.";

/// Text shown in place of the item list when the cart is empty.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// Presentation surface for cart state.
pub trait CartRenderer {
    /// Refresh the badge showing the total number of units.
    fn render_summary_count(&mut self, count: u64);

    /// Refresh the detailed list of lines and the cart total.
    fn render_detailed_list(&mut self, items: &[LineItem], total: Price);
}

/// Format an amount with the currency label, e.g. `Rs. 120`.
#[must_use]
pub fn format_price(price: Price) -> String {
    format!("{CURRENCY_LABEL} {price}")
}

/// One display line for an item, e.g. `Tea (x2) - Rs. 100`.
#[must_use]
pub fn describe_line(item: &LineItem) -> String {
    format!(
        "{} (x{}) - {}",
        item.name,
        item.quantity,
        format_price(item.line_total())
    )
}

/// The total line, e.g. `Total: Rs. 220`.
#[must_use]
pub fn describe_total(total: Price) -> String {
    format!("Total: {}", format_price(total))
}
