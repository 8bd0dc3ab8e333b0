//! The cart store: in-memory cart, persistence, and render callbacks.

use teahouse_core::{Cart, ItemId, LineItem, Price};
use tracing::instrument;

use super::{CheckoutOutcome, Receipt};
use crate::render::CartRenderer;
use crate::storage::{CART_KEY, KeyValueStore};

/// Authoritative owner of the shopper's cart.
///
/// The only way to obtain a `CartStore` is [`CartStore::initialize`], which
/// loads whatever the persistent store holds. After that, every mutating call
/// writes the whole cart back before returning, so the stored value always
/// matches memory once a call completes.
///
/// None of the operations fail. Unreadable stored data is replaced by an empty
/// cart and write failures are logged; in both cases the in-memory cart stays
/// the source of truth.
///
/// The store is single-writer. Callers that share it between threads must
/// serialize access (the web server keeps it behind a mutex).
#[derive(Debug)]
pub struct CartStore<S, R> {
    cart: Cart,
    storage: S,
    renderer: R,
    key: String,
}

impl<S: KeyValueStore, R: CartRenderer> CartStore<S, R> {
    /// Load the cart stored under the default `cart` key.
    pub fn initialize(storage: S, renderer: R) -> Self {
        Self::initialize_with_key(storage, renderer, CART_KEY)
    }

    /// Load the cart stored under `key`.
    ///
    /// A missing entry, a read failure, or an entry that is not a valid cart
    /// all yield an empty cart. The summary count is rendered once afterwards.
    pub fn initialize_with_key(storage: S, mut renderer: R, key: impl Into<String>) -> Self {
        let key = key.into();
        let cart = load_cart(&storage, &key);
        tracing::debug!(key = %key, lines = cart.len(), "Cart loaded");

        renderer.render_summary_count(cart.total_quantity());

        Self {
            cart,
            storage,
            renderer,
            key,
        }
    }

    /// Add one unit of a product.
    ///
    /// An existing line is incremented and keeps its original name and price;
    /// otherwise a new line is appended. Refreshes the summary count.
    #[instrument(skip(self, name, price), fields(id = %id))]
    pub fn add(&mut self, id: ItemId, name: impl Into<String>, price: Price) {
        let quantity = self.cart.add(id, name, price);
        tracing::debug!(quantity = quantity.get(), "Added to cart");

        self.persist();
        self.renderer.render_summary_count(self.total_quantity());
    }

    /// Remove the line for `id`.
    ///
    /// Removing an id that is not in the cart is a no-op, but the cart is
    /// still persisted and both views are still refreshed. Returns whether a
    /// line was removed.
    #[instrument(skip(self), fields(id = %id))]
    pub fn remove(&mut self, id: &ItemId) -> bool {
        let removed = self.cart.remove(id).is_some();
        if !removed {
            tracing::debug!("Nothing to remove");
        }

        self.persist();
        self.renderer
            .render_detailed_list(self.cart.items(), self.total_price());
        self.renderer.render_summary_count(self.total_quantity());
        removed
    }

    /// Render the detailed list, as when the cart panel is opened.
    pub fn open(&mut self) {
        self.renderer
            .render_detailed_list(self.cart.items(), self.total_price());
    }

    /// Simulated checkout.
    ///
    /// An empty cart is left untouched and reported as
    /// [`CheckoutOutcome::Empty`]. Anything else always succeeds: the cart is
    /// emptied, persisted, and the summary count refreshed.
    #[instrument(skip(self), fields(lines = self.cart.len()))]
    pub fn checkout(&mut self) -> CheckoutOutcome {
        if self.cart.is_empty() {
            tracing::debug!("Checkout attempted on empty cart");
            return CheckoutOutcome::Empty;
        }

        let total_quantity = self.total_quantity();
        let total_price = self.total_price();
        let items = self.cart.clear();

        self.persist();
        self.renderer.render_summary_count(0);

        tracing::info!(%total_price, total_quantity, "Checkout completed");
        CheckoutOutcome::Completed(Receipt {
            items,
            total_quantity,
            total_price,
        })
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.cart.total_quantity()
    }

    /// Sum of `price × quantity` over all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.cart.total_price()
    }

    /// The current cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        self.cart.items()
    }

    /// The persistent store.
    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the rendering collaborator, for taking output.
    pub const fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn persist(&mut self) {
        let raw = match self.cart.to_json() {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to encode cart: {e}");
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.key, &raw) {
            tracing::error!(key = %self.key, "Failed to persist cart: {e}");
        }
    }
}

/// Read and decode the stored cart, falling back to an empty one.
fn load_cart<S: KeyValueStore>(storage: &S, key: &str) -> Cart {
    let raw = match storage.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Cart::new(),
        Err(e) => {
            tracing::warn!(key, "Failed to read stored cart, starting empty: {e}");
            return Cart::new();
        }
    };

    Cart::from_json(&raw).unwrap_or_else(|e| {
        tracing::warn!(key, "Stored cart is malformed, starting empty: {e}");
        Cart::new()
    })
}
