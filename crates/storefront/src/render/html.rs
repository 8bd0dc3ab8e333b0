//! HTML fragment renderer backed by askama templates.
//!
//! Fragments are kept until the HTTP layer takes them, so a handler can run a
//! cart operation and then return exactly the markup that operation produced.

use askama::Template;
use askama_web::WebTemplate;
use teahouse_core::{LineItem, Price};

use super::{CartRenderer, EMPTY_CART_TEXT, describe_total, format_price};

/// Cart line display data for templates.
#[derive(Debug, Clone)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub line_price: String,
}

impl From<&LineItem> for CartItemView {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.id.to_string(),
            name: item.name.clone(),
            quantity: item.quantity.get(),
            line_price: format_price(item.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub empty_text: &'static str,
}

impl CartView {
    /// Build the view for a list of lines and their total.
    #[must_use]
    pub fn new(items: &[LineItem], total: Price) -> Self {
        Self {
            items: items.iter().map(CartItemView::from).collect(),
            total: describe_total(total),
            empty_text: EMPTY_CART_TEXT,
        }
    }
}

/// Cart items fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub cart: CartView,
}

/// Cart count badge fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

/// Renders cart state into HTML fragments.
#[derive(Debug, Default)]
pub struct HtmlRenderer {
    summary: Option<String>,
    details: Option<String>,
}

impl HtmlRenderer {
    /// Create a renderer with no pending fragments.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the most recent count badge fragment.
    pub fn take_summary(&mut self) -> Option<String> {
        self.summary.take()
    }

    /// Take the most recent item list fragment.
    pub fn take_details(&mut self) -> Option<String> {
        self.details.take()
    }
}

impl CartRenderer for HtmlRenderer {
    fn render_summary_count(&mut self, count: u64) {
        self.summary = CartCountTemplate { count }
            .render()
            .inspect_err(|e| tracing::error!("Failed to render cart count: {e}"))
            .ok();
    }

    fn render_detailed_list(&mut self, items: &[LineItem], total: Price) {
        let cart = CartView::new(items, total);
        self.details = CartItemsTemplate { cart }
            .render()
            .inspect_err(|e| tracing::error!("Failed to render cart items: {e}"))
            .ok();
    }
}
