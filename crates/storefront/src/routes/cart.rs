//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Each handler runs one operation on the shared [`crate::cart::CartStore`]
//! through [`AppState::with_cart`] and returns the fragment its renderer
//! produced. Mutations also send an
//! `HX-Trigger: cart-updated` header so both count badges refresh themselves.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use serde::Deserialize;
use teahouse_core::{ItemId, Price};
use tracing::instrument;

use crate::cart::CheckoutOutcome;
use crate::error::{AppError, Result, add_breadcrumb};
use crate::render::CartCountTemplate;
use crate::state::AppState;

/// Event fired after any change to the cart.
pub const CART_UPDATED: &str = "cart-updated";

/// Events fired after a completed checkout. `cart-checked-out` closes the
/// cart panel.
pub const CHECKOUT_TRIGGERS: &str = "cart-updated, cart-checked-out";

/// Add to cart form data.
///
/// Mirrors the data attached to each menu card's button. The price is taken
/// as submitted.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub id: String,
    pub name: String,
    pub price: String,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

/// Checkout notice fragment template (for HTMX).
#[derive(Template, WebTemplate)]
#[template(path = "partials/checkout_notice.html")]
pub struct CheckoutNoticeTemplate {
    pub message: &'static str,
    pub completed: bool,
}

/// Turn a rendered fragment into HTML, or fail if rendering did not produce one.
fn fragment(html: Option<String>, what: &str) -> Result<Html<String>> {
    html.map(Html)
        .ok_or_else(|| AppError::Internal(format!("failed to render {what}")))
}

/// Cart items fragment, shown when the cart panel opens.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Html<String>> {
    let html = state
        .with_cart(|cart| {
            cart.open();
            cart.renderer_mut().take_details()
        })
        .await?;
    fragment(html, "cart items")
}

/// Add item to cart (HTMX).
///
/// Returns the updated count badge and triggers `cart-updated`.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Form(form): Form<AddToCartForm>,
) -> Result<Response> {
    let id = ItemId::parse(&form.id)?;
    let price = Price::parse(&form.price)?;

    add_breadcrumb("cart", "Added item", &[("item_id", id.as_str())]);

    let name = form.name;
    let html = state
        .with_cart(move |cart| {
            cart.add(id, name, price);
            cart.renderer_mut().take_summary()
        })
        .await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        fragment(html, "cart count")?,
    )
        .into_response())
}

/// Remove item from cart (HTMX).
///
/// Returns the refreshed item list. Removing an id that is not in the cart,
/// including a blank one that never could be, still succeeds.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Form(form): Form<RemoveFromCartForm>,
) -> Result<Response> {
    let id = ItemId::parse(&form.id).ok();
    if let Some(id) = &id {
        add_breadcrumb("cart", "Removed item", &[("item_id", id.as_str())]);
    }

    let html = state
        .with_cart(move |cart| {
            if let Some(id) = id {
                cart.remove(&id);
                // The badges refresh through the trigger; drop the count fragment.
                cart.renderer_mut().take_summary();
            } else {
                cart.open();
            }
            cart.renderer_mut().take_details()
        })
        .await?;

    Ok((
        AppendHeaders([("HX-Trigger", CART_UPDATED)]),
        fragment(html, "cart items")?,
    )
        .into_response())
}

/// Get cart count badge (HTMX).
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Result<CartCountTemplate> {
    let count = state.with_cart(|cart| cart.total_quantity()).await?;
    Ok(CartCountTemplate { count })
}

/// Demo checkout (HTMX).
///
/// Always answers with a notice. A completed checkout also triggers
/// `cart-updated` and `cart-checked-out`.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Result<Response> {
    let outcome = state
        .with_cart(|cart| {
            let outcome = cart.checkout();
            cart.renderer_mut().take_summary();
            outcome
        })
        .await?;

    let notice = CheckoutNoticeTemplate {
        message: outcome.notice(),
        completed: outcome.is_completed(),
    };

    Ok(match outcome {
        CheckoutOutcome::Empty => notice.into_response(),
        CheckoutOutcome::Completed(receipt) => {
            let total = receipt.total_price.to_string();
            add_breadcrumb("cart", "Checked out", &[("total", total.as_str())]);
            (AppendHeaders([("HX-Trigger", CHECKOUT_TRIGGERS)]), notice).into_response()
        }
    })
}
