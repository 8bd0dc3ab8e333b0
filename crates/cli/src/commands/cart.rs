//! Cart commands.
//!
//! Each command opens the cart store on a profile file, runs one operation,
//! and logs whatever the text renderer produced.

use std::path::Path;

use teahouse_core::{ItemId, Price};
use teahouse_storefront::cart::CartStore;
use teahouse_storefront::render::TextRenderer;
use teahouse_storefront::storage::FileStorage;

use super::CommandError;

/// Cart store backed by a profile file.
pub type FileCart = CartStore<FileStorage, TextRenderer>;

/// Load the cart stored under `key` in the profile at `profile`.
pub fn open(profile: &Path, key: &str) -> FileCart {
    tracing::debug!(profile = %profile.display(), key, "Opening cart");
    let mut cart = CartStore::initialize_with_key(FileStorage::new(profile), TextRenderer::new(), key);
    // The badge line from loading is noise on the command line.
    cart.renderer_mut().take_lines();
    cart
}

/// Print every line and the total.
pub fn show(cart: &mut FileCart) {
    cart.open();
    flush(cart);
}

/// Add one unit of an item.
///
/// # Errors
///
/// Returns an error if `id` is blank or `price` is not a non-negative number.
pub fn add(cart: &mut FileCart, id: &str, name: String, price: &str) -> Result<(), CommandError> {
    let id = ItemId::parse(id)?;
    let price = Price::parse(price)?;

    cart.add(id, name, price);
    flush(cart);
    Ok(())
}

/// Remove a line entirely.
///
/// An id that is not in the cart, blank or otherwise, leaves it unchanged.
pub fn remove(cart: &mut FileCart, id: &str) {
    match ItemId::parse(id) {
        Ok(id) => {
            if !cart.remove(&id) {
                tracing::debug!("{id} was not in the cart");
            }
        }
        Err(e) => {
            tracing::debug!("Nothing to remove: {e}");
            cart.open();
        }
    }
    flush(cart);
}

/// Run the demo checkout.
pub fn checkout(cart: &mut FileCart) {
    let outcome = cart.checkout();
    tracing::info!("{}", outcome.notice());
    flush(cart);
}

fn flush(cart: &mut FileCart) {
    for line in cart.renderer_mut().take_lines() {
        tracing::info!("{line}");
    }
}
