//! Application state shared across handlers.

use std::sync::{Arc, Mutex, PoisonError};

use crate::cart::CartStore;
use crate::config::StorefrontConfig;
use crate::error::{AppError, Result};
use crate::menu::Menu;
use crate::render::HtmlRenderer;
use crate::storage::KeyValueStore;

/// Storage backend behind the shared cart.
pub type ProfileStorage = Box<dyn KeyValueStore + Send>;

/// The cart store as held by the server.
pub type SharedCart = CartStore<ProfileStorage, HtmlRenderer>;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. The cart sits behind a mutex
/// and every cart operation (mutation, persistence, rendering) runs under it
/// on tokio's blocking pool, so profile file I/O never stalls the async
/// workers and the store keeps the single-writer access it relies on.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    menu: Menu,
    cart: Mutex<SharedCart>,
}

impl AppState {
    /// Create a new application state, loading the cart from `storage`.
    ///
    /// # Arguments
    ///
    /// * `config` - Storefront configuration
    /// * `menu` - Catalog shown on the home page
    /// * `storage` - Persistent store holding the shopper profile
    pub fn new(
        config: StorefrontConfig,
        menu: Menu,
        storage: impl KeyValueStore + Send + 'static,
    ) -> Self {
        let storage: ProfileStorage = Box::new(storage);
        let cart = CartStore::initialize_with_key(storage, HtmlRenderer::new(), &config.cart_key);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                menu,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the menu catalog.
    #[must_use]
    pub fn menu(&self) -> &Menu {
        &self.inner.menu
    }

    /// Run one cart operation with exclusive access to the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the operation panicked.
    pub async fn with_cart<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut SharedCart) -> T + Send + 'static,
        T: Send + 'static,
    {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || {
            // A panic mid-operation leaves the cart itself valid.
            let mut cart = inner.cart.lock().unwrap_or_else(PoisonError::into_inner);
            op(&mut cart)
        })
        .await
        .map_err(|e| AppError::Internal(format!("cart operation failed: {e}")))
    }
}
